//! Protocol constants for Orca Whirlpools.

pub use orca_whirlpools_core::{MAX_TICK_INDEX, MIN_TICK_INDEX, TICK_ARRAY_SIZE};

/// Upper bound on the number of tick arrays a single swap can cross.
/// A swap touches at most `MAX_TICK_ARRAY_CROSSINGS + 1` tick arrays.
pub const MAX_TICK_ARRAY_CROSSINGS: usize = 2;

/// Number of tick array accounts passed to a swap instruction.
pub const TICK_ARRAYS_PER_SWAP: usize = MAX_TICK_ARRAY_CROSSINGS + 1;

/// Lowest sqrt price the program accepts (sqrt price at `MIN_TICK_INDEX`)
pub const MIN_SQRT_PRICE_X64: u128 = 4295048016;
/// Highest sqrt price the program accepts (sqrt price at `MAX_TICK_INDEX`)
pub const MAX_SQRT_PRICE_X64: u128 = 79226673515401279992447579055;

/// `fee_rate` is stored as hundredths of a basis point, u16::MAX is ~6.5%
pub const FEE_RATE_DENOMINATOR: u64 = 1_000_000;
/// `protocol_fee_rate` is stored in basis points
pub const PROTOCOL_FEE_RATE_DENOMINATOR: u64 = 10_000;
