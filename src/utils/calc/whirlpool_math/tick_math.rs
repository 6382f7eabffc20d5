//! Tick index <-> sqrt price mapping and tick array quantization.
//!
//! The curve itself comes from `orca_whirlpools_core`, the same math the
//! whirlpool program runs on chain. This module only adds bounds checks and
//! the offset-based tick array stepping used when resolving swap accounts.

use orca_whirlpools_core::{
    get_tick_array_start_tick_index, sqrt_price_to_tick_index, tick_index_to_sqrt_price,
};
use tracing::warn;

use crate::common::{PoolUtilError, PoolUtilResult};
use crate::constants::{
    MAX_SQRT_PRICE_X64, MAX_TICK_INDEX, MIN_SQRT_PRICE_X64, MIN_TICK_INDEX, TICK_ARRAY_SIZE,
};

#[inline]
pub fn is_tick_index_in_bounds(tick_index: i32) -> bool {
    (MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick_index)
}

/// Calculates 1.0001^(tick/2) as a Q64.64 number
pub fn tick_index_to_sqrt_price_x64(tick_index: i32) -> PoolUtilResult<u128> {
    if !is_tick_index_in_bounds(tick_index) {
        return Err(PoolUtilError::TickIndexOutOfBounds(tick_index));
    }
    Ok(tick_index_to_sqrt_price(tick_index).into())
}

/// Greatest tick whose sqrt price is <= `sqrt_price_x64`
pub fn sqrt_price_x64_to_tick_index(sqrt_price_x64: u128) -> PoolUtilResult<i32> {
    if !(MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64).contains(&sqrt_price_x64) {
        return Err(PoolUtilError::SqrtPriceOutOfBounds(sqrt_price_x64));
    }
    Ok(sqrt_price_to_tick_index(sqrt_price_x64.into()))
}

/// Tick index for a UI price (token B per token A, decimals applied).
/// Floating point; use only for user input, never for settlement math.
pub fn price_to_tick_index(price: f64, decimals_a: u8, decimals_b: u8) -> i32 {
    orca_whirlpools_core::price_to_tick_index(price, decimals_a, decimals_b)
}

pub fn tick_index_to_price(tick_index: i32, decimals_a: u8, decimals_b: u8) -> f64 {
    orca_whirlpools_core::tick_index_to_price(tick_index, decimals_a, decimals_b)
}

/// Number of ticks covered by one tick array
#[inline]
pub fn tick_array_width(tick_spacing: u16) -> i32 {
    TICK_ARRAY_SIZE as i32 * i32::from(tick_spacing)
}

/// Start index of the tick array `offset` arrays away from the one holding `tick_index`.
///
/// Offset 0 is the containing array, -1 the one below it, +1 the one above.
/// The result must lie between the start of the array holding `MIN_TICK_INDEX`
/// and `MAX_TICK_INDEX`.
pub fn get_start_tick_index(tick_index: i32, tick_spacing: u16, offset: i32) -> PoolUtilResult<i32> {
    if tick_spacing == 0 {
        return Err(PoolUtilError::InvalidTickSpacing);
    }
    let width = i64::from(tick_array_width(tick_spacing));
    let containing = i64::from(get_tick_array_start_tick_index(tick_index, tick_spacing));
    let start = containing + i64::from(offset) * width;

    let min_start = i64::from(MIN_TICK_INDEX).div_euclid(width) * width;
    if start < min_start || start > i64::from(MAX_TICK_INDEX) {
        let clamped = start.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        warn!(tick_index, tick_spacing, offset, start, "tick array start index out of bounds");
        return Err(PoolUtilError::TickArrayIndexOutOfBounds(clamped));
    }
    Ok(start as i32)
}

/// Rounds `tick_index` toward zero to the nearest multiple of `tick_spacing`.
pub fn get_initializable_tick_index(tick_index: i32, tick_spacing: u16) -> PoolUtilResult<i32> {
    if tick_spacing == 0 {
        return Err(PoolUtilError::InvalidTickSpacing);
    }
    Ok(tick_index - tick_index % i32::from(tick_spacing))
}
