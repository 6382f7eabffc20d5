//! Liquidity <-> token amount conversions for a whirlpool position.
//!
//! These mirror the program's settlement math on the client. Every
//! multiply-then-divide runs in a wide integer and de-scales from X64 once,
//! at the final division, so results are bit-identical across callers.

use tracing::{trace, warn};

use crate::common::{PoolUtilError, PoolUtilResult, TokenAmounts};
use crate::utils::calc::whirlpool_math::big_num::{U256, U512};
use crate::utils::calc::whirlpool_math::fixed_point_64::{FixedPointX64, min_max};
use crate::utils::calc::whirlpool_math::tick_math::tick_index_to_sqrt_price_x64;

/// Token amounts backed by `liquidity` over `[lower, upper]` at the current sqrt price.
///
/// * current < lower: everything is token A
/// * lower <= current < upper: token A for `[current, upper]`, token B for `[lower, current]`
/// * current >= upper: everything is token B
///
/// `round_up` applies the same rounding (ceil vs floor) to both amounts.
/// Round up when quoting what a depositor must provide, down when quoting
/// what a withdrawal returns.
pub fn get_token_amounts_from_liquidity(
    liquidity: u128,
    current_sqrt_price_x64: u128,
    lower_sqrt_price_x64: u128,
    upper_sqrt_price_x64: u128,
    round_up: bool,
) -> PoolUtilResult<TokenAmounts> {
    if lower_sqrt_price_x64 > upper_sqrt_price_x64 {
        return Err(PoolUtilError::InvalidPriceRange {
            lower: lower_sqrt_price_x64,
            upper: upper_sqrt_price_x64,
        });
    }

    let amounts = if current_sqrt_price_x64 < lower_sqrt_price_x64 {
        trace!(liquidity, "price below range, position is all token A");
        TokenAmounts::new(
            get_amount_a(liquidity, lower_sqrt_price_x64, upper_sqrt_price_x64, round_up)?,
            0,
        )
    } else if current_sqrt_price_x64 < upper_sqrt_price_x64 {
        trace!(liquidity, "price inside range");
        TokenAmounts::new(
            get_amount_a(liquidity, current_sqrt_price_x64, upper_sqrt_price_x64, round_up)?,
            get_amount_b(liquidity, lower_sqrt_price_x64, current_sqrt_price_x64, round_up)?,
        )
    } else {
        trace!(liquidity, "price above range, position is all token B");
        TokenAmounts::new(
            0,
            get_amount_b(liquidity, lower_sqrt_price_x64, upper_sqrt_price_x64, round_up)?,
        )
    };

    Ok(amounts)
}

/// Estimate the liquidity that `token_amounts` can back over `[lower_tick, upper_tick]`
/// with the pool at `current_tick`.
///
/// Inside the range each token gives its own estimate and the smaller one wins,
/// so the returned liquidity never needs more of either token than supplied.
/// All divisions truncate.
pub fn estimate_liquidity_from_token_amounts(
    current_tick: i32,
    lower_tick: i32,
    upper_tick: i32,
    token_amounts: TokenAmounts,
) -> PoolUtilResult<u128> {
    if upper_tick <= lower_tick {
        return Err(PoolUtilError::InvalidRange {
            lower: lower_tick,
            upper: upper_tick,
        });
    }

    let current_sqrt_price = tick_index_to_sqrt_price_x64(current_tick)?;
    let lower_sqrt_price = tick_index_to_sqrt_price_x64(lower_tick)?;
    let upper_sqrt_price = tick_index_to_sqrt_price_x64(upper_tick)?;

    if current_tick >= upper_tick {
        trace!(current_tick, upper_tick, "estimating from token B only");
        Ok(estimate_liquidity_for_token_b(upper_sqrt_price, lower_sqrt_price, token_amounts.token_b)?
            .unwrap_or(0))
    } else if current_tick < lower_tick {
        trace!(current_tick, lower_tick, "estimating from token A only");
        Ok(estimate_liquidity_for_token_a(lower_sqrt_price, upper_sqrt_price, token_amounts.token_a)?
            .unwrap_or(0))
    } else {
        let from_a =
            estimate_liquidity_for_token_a(current_sqrt_price, upper_sqrt_price, token_amounts.token_a)?;
        let from_b =
            estimate_liquidity_for_token_b(current_sqrt_price, lower_sqrt_price, token_amounts.token_b)?;
        trace!(?from_a, ?from_b, "in-range liquidity estimates");
        // a side with no price width puts no bound on liquidity
        Ok(match (from_a, from_b) {
            (Some(a), Some(b)) => a.min(b),
            (Some(l), None) | (None, Some(l)) => l,
            (None, None) => 0,
        })
    }
}

/// `liquidity * 2^64 * (upper - lower) / (lower * upper)`
///
/// Prices must satisfy `lower <= upper`.
pub fn get_amount_a(
    liquidity: u128,
    lower_sqrt_price_x64: u128,
    upper_sqrt_price_x64: u128,
    round_up: bool,
) -> PoolUtilResult<u64> {
    let numerator = U512::to_x64(liquidity) * U512::from(upper_sqrt_price_x64 - lower_sqrt_price_x64);
    let denominator = U512::from(lower_sqrt_price_x64) * U512::from(upper_sqrt_price_x64);

    numerator
        .div_rounding(denominator, round_up)
        .ok_or(PoolUtilError::ZeroSqrtPrice)?
        .checked_to_u64()
        .ok_or_else(|| {
            warn!(liquidity, lower_sqrt_price_x64, upper_sqrt_price_x64, "token A amount overflows u64");
            PoolUtilError::TokenAmountOverflow
        })
}

/// `liquidity * (upper - lower) / 2^64`
///
/// Prices must satisfy `lower <= upper`.
pub fn get_amount_b(
    liquidity: u128,
    lower_sqrt_price_x64: u128,
    upper_sqrt_price_x64: u128,
    round_up: bool,
) -> PoolUtilResult<u64> {
    let product = U256::from(liquidity) * U256::from(upper_sqrt_price_x64 - lower_sqrt_price_x64);

    product.from_x64(round_up).checked_to_u64().ok_or_else(|| {
        warn!(liquidity, lower_sqrt_price_x64, upper_sqrt_price_x64, "token B amount overflows u64");
        PoolUtilError::TokenAmountOverflow
    })
}

/// Liquidity backed by `token_amount` of token A between two sqrt prices,
/// from `Δa = L * (1/sqrt(lower) - 1/sqrt(upper))`:
/// `L = a * upper * lower / 2^64 / (upper - lower)`.
///
/// `None` when both prices are equal.
pub fn estimate_liquidity_for_token_a(
    sqrt_price_1: u128,
    sqrt_price_2: u128,
    token_amount: u64,
) -> PoolUtilResult<Option<u128>> {
    let (lower, upper) = min_max(sqrt_price_1, sqrt_price_2);
    if lower == upper {
        return Ok(None);
    }

    let numerator = U512::from(token_amount) * U512::from(upper) * U512::from(lower);
    let denominator = U512::to_x64(upper - lower);

    numerator
        .div_rounding(denominator, false)
        .and_then(FixedPointX64::checked_to_u128)
        .map(Some)
        .ok_or_else(|| {
            warn!(token_amount, lower, upper, "token A liquidity estimate overflows u128");
            PoolUtilError::LiquidityOverflow
        })
}

/// Liquidity backed by `token_amount` of token B between two sqrt prices,
/// from `Δb = L * (sqrt(upper) - sqrt(lower))`: `L = b * 2^64 / (upper - lower)`.
///
/// `None` when both prices are equal.
pub fn estimate_liquidity_for_token_b(
    sqrt_price_1: u128,
    sqrt_price_2: u128,
    token_amount: u64,
) -> PoolUtilResult<Option<u128>> {
    let (lower, upper) = min_max(sqrt_price_1, sqrt_price_2);
    if lower == upper {
        return Ok(None);
    }

    U256::to_x64(u128::from(token_amount))
        .div_rounding(U256::from(upper - lower), false)
        .and_then(FixedPointX64::checked_to_u128)
        .map(Some)
        .ok_or(PoolUtilError::LiquidityOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::calc::whirlpool_math::fixed_point_64::Q64;

    const LIQUIDITY: u128 = 1_000_000_000;

    // sqrt prices 1.0 and 2.0 (prices 1 and 4)
    const LOWER: u128 = Q64;
    const UPPER: u128 = 2 * Q64;

    #[test]
    fn test_amounts_below_range() {
        let amounts = get_token_amounts_from_liquidity(LIQUIDITY, Q64 / 2, LOWER, UPPER, false).unwrap();
        // L * (2 - 1) / (1 * 2)
        assert_eq!(amounts, TokenAmounts::new(500_000_000, 0));
    }

    #[test]
    fn test_amounts_inside_range() {
        let current = Q64 + Q64 / 2;
        let floor = get_token_amounts_from_liquidity(LIQUIDITY, current, LOWER, UPPER, false).unwrap();
        let ceil = get_token_amounts_from_liquidity(LIQUIDITY, current, LOWER, UPPER, true).unwrap();
        // a = L * 0.5 / 3, b = L * 0.5
        assert_eq!(floor, TokenAmounts::new(166_666_666, 500_000_000));
        assert_eq!(ceil, TokenAmounts::new(166_666_667, 500_000_000));
    }

    #[test]
    fn test_amounts_above_range() {
        let amounts = get_token_amounts_from_liquidity(LIQUIDITY, UPPER, LOWER, UPPER, true).unwrap();
        assert_eq!(amounts, TokenAmounts::new(0, 1_000_000_000));
    }

    #[test]
    fn test_amounts_inverted_range() {
        assert_eq!(
            get_token_amounts_from_liquidity(LIQUIDITY, Q64, UPPER, LOWER, false),
            Err(PoolUtilError::InvalidPriceRange { lower: UPPER, upper: LOWER })
        );
    }

    #[test]
    fn test_amounts_zero_current_price() {
        assert_eq!(
            get_token_amounts_from_liquidity(LIQUIDITY, 0, 0, UPPER, false),
            Err(PoolUtilError::ZeroSqrtPrice)
        );
    }

    #[test]
    fn test_amounts_overflow() {
        assert_eq!(
            get_token_amounts_from_liquidity(u128::MAX, 0, Q64, UPPER, false),
            Err(PoolUtilError::TokenAmountOverflow)
        );
    }

    #[test]
    fn test_estimate_rejects_bad_ranges() {
        let amounts = TokenAmounts::new(1_000, 1_000);
        assert_eq!(
            estimate_liquidity_from_token_amounts(0, 10, -10, amounts),
            Err(PoolUtilError::InvalidRange { lower: 10, upper: -10 })
        );
        assert_eq!(
            estimate_liquidity_from_token_amounts(0, 10, 10, amounts),
            Err(PoolUtilError::InvalidRange { lower: 10, upper: 10 })
        );
    }

    #[test]
    fn test_estimate_token_b_only() {
        let token_b = 1_000_000u64;
        let lower = tick_index_to_sqrt_price_x64(-128).unwrap();
        let upper = tick_index_to_sqrt_price_x64(128).unwrap();
        let expected = (u128::from(token_b) << 64) / (upper - lower);

        let liquidity =
            estimate_liquidity_from_token_amounts(200, -128, 128, TokenAmounts::new(0, token_b)).unwrap();
        assert_eq!(liquidity, expected);
    }

    #[test]
    fn test_estimate_at_lower_tick_uses_token_a() {
        let amounts = TokenAmounts::new(1_000_000, 0);
        let at_lower = estimate_liquidity_from_token_amounts(-128, -128, 128, amounts).unwrap();
        let below = estimate_liquidity_from_token_amounts(-500, -128, 128, amounts).unwrap();
        assert!(at_lower > 0);
        assert_eq!(at_lower, below);
    }

    #[test]
    fn test_estimate_for_token_a_equal_prices() {
        assert_eq!(estimate_liquidity_for_token_a(Q64, Q64, 10).unwrap(), None);
        assert_eq!(estimate_liquidity_for_token_b(Q64, Q64, 10).unwrap(), None);
    }

    #[test]
    fn test_estimate_for_token_a_is_order_independent() {
        let a = estimate_liquidity_for_token_a(LOWER, UPPER, 500_000_000).unwrap();
        let b = estimate_liquidity_for_token_a(UPPER, LOWER, 500_000_000).unwrap();
        assert_eq!(a, b);
        // inverse of test_amounts_below_range
        assert_eq!(a, Some(LIQUIDITY));
    }
}
