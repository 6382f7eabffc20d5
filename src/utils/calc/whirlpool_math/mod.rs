// Fixed-point primitives and the tick curve used by the whirlpool program.
// The curve is consumed from orca_whirlpools_core, not reimplemented.

pub mod big_num;
pub mod fixed_point_64;
pub mod tick_math;

pub use big_num::{U256, U512};
pub use fixed_point_64::{FixedPointX64, Q64, RESOLUTION, min_max};
