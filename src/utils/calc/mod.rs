pub mod liquidity;

// Whirlpool fixed-point and tick math
pub mod whirlpool_math;
