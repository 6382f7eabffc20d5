pub mod error;
pub mod types;

pub use error::{PoolUtilError, PoolUtilResult};
pub use types::*;
