pub mod calc;
pub mod pool;
