//! Client-side pool math for Orca Whirlpools.
//!
//! - [`get_token_amounts_from_liquidity`] and
//!   [`estimate_liquidity_from_token_amounts`] convert between a position's
//!   liquidity and the token amounts it holds.
//! - [`get_tick_array_public_keys_for_swap`] lists the tick array accounts a
//!   swap may cross.
//! - [`utils::pool`] normalizes mint order, fee rates and reward slots.
//!
//! Everything is synchronous and performs no I/O. Prices are Q64.64 sqrt
//! prices stored in a `u128`.

pub mod common;
pub mod constants;
pub mod instruction;
pub mod utils;

pub use crate::common::{
    Percentage, PoolUtilError, PoolUtilResult, SwapDirection, TokenAmounts, WhirlpoolRewardInfo,
};
pub use crate::constants::MAX_TICK_ARRAY_CROSSINGS;
pub use crate::instruction::utils::whirlpool::{
    Pda, derive_tick_array_address, get_tick_array_public_keys_for_swap,
    get_tick_array_start_indexes_for_swap,
};
pub use crate::utils::calc::liquidity::{
    estimate_liquidity_from_token_amounts, get_token_amounts_from_liquidity,
};
pub use crate::utils::pool::{
    get_fee_rate, get_protocol_fee_rate, is_reward_initialized, order_mints,
};
