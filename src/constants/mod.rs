pub mod whirlpool;

pub use whirlpool::*;
