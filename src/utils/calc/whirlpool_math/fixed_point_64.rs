//! Helpers for Q64.64 fixed point numbers.
//! Sqrt prices are stored as `sqrt(price) * 2^64` in a `u128`.

use super::big_num::{U256, U512};

pub const Q64: u128 = (u64::MAX as u128) + 1; // 2^64
pub const RESOLUTION: u8 = 64;

/// Scaling and rounding operations shared by the wide integer types.
pub trait FixedPointX64: Sized + Copy {
    /// `value * 2^64`
    fn to_x64(value: u128) -> Self;

    /// `self / 2^64`, rounded up when `round_up` is set and there is a remainder.
    fn from_x64(self, round_up: bool) -> Self;

    /// Division with an explicit rounding direction. `None` when `rhs` is zero.
    fn div_rounding(self, rhs: Self, round_up: bool) -> Option<Self>;

    fn checked_to_u64(self) -> Option<u64>;

    fn checked_to_u128(self) -> Option<u128>;
}

macro_rules! impl_fixed_point_x64 {
    ($($ty:ident),*) => {
        $(
            impl FixedPointX64 for $ty {
                #[inline]
                fn to_x64(value: u128) -> Self {
                    $ty::from(value) << RESOLUTION
                }

                #[inline]
                fn from_x64(self, round_up: bool) -> Self {
                    let quotient = self >> RESOLUTION;
                    let remainder = self & $ty::from(u64::MAX);
                    // quotient < 2^(bits - 64), the increment cannot overflow
                    if round_up && !remainder.is_zero() {
                        quotient + $ty::one()
                    } else {
                        quotient
                    }
                }

                #[inline]
                fn div_rounding(self, rhs: Self, round_up: bool) -> Option<Self> {
                    if rhs.is_zero() {
                        return None;
                    }
                    let (quotient, remainder) = self.div_mod(rhs);
                    if round_up && !remainder.is_zero() {
                        quotient.checked_add($ty::one())
                    } else {
                        Some(quotient)
                    }
                }

                #[inline]
                fn checked_to_u64(self) -> Option<u64> {
                    if self > $ty::from(u64::MAX) { None } else { Some(self.low_u64()) }
                }

                #[inline]
                fn checked_to_u128(self) -> Option<u128> {
                    if self > $ty::from(u128::MAX) { None } else { Some(self.low_u128()) }
                }
            }
        )*
    };
}

impl_fixed_point_x64!(U256, U512);

/// Orders two sqrt prices as `(min, max)`.
#[inline]
pub fn min_max(a: u128, b: u128) -> (u128, u128) {
    (a.min(b), a.max(b))
}
