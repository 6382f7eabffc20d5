use solana_sdk::pubkey::Pubkey;
use std::fmt;

/// Pair of raw token amounts (no decimals applied) backing a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TokenAmounts {
    pub token_a: u64,
    pub token_b: u64,
}

impl TokenAmounts {
    pub const fn new(token_a: u64, token_b: u64) -> Self {
        Self { token_a, token_b }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0)
    }
}

/// A rational percentage, `numerator / denominator`.
///
/// Fee rates are kept as the raw fraction read from the pool so that no
/// precision is lost before the caller decides how to apply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percentage {
    numerator: u64,
    denominator: u64,
}

impl Percentage {
    pub const fn from_fraction(numerator: u64, denominator: u64) -> Self {
        Self { numerator, denominator }
    }

    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Approximate value as a fraction of one (0.001 for 0.1%). Display only.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// True when both fractions denote the same value, e.g. 1/100 and 100/10_000.
    pub fn is_equivalent(&self, other: &Percentage) -> bool {
        u128::from(self.numerator) * u128::from(other.denominator)
            == u128::from(other.numerator) * u128::from(self.denominator)
    }
}

impl fmt::Display for Percentage {
    /// Exact decimal rendering with up to six fractional digits, e.g. `0.1%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FRACTION_SCALE: u128 = 1_000_000;
        if self.denominator == 0 {
            return write!(f, "NaN%");
        }
        let scaled = u128::from(self.numerator) * 100 * FRACTION_SCALE / u128::from(self.denominator);
        let whole = scaled / FRACTION_SCALE;
        let fraction = scaled % FRACTION_SCALE;
        if fraction == 0 {
            write!(f, "{whole}%")
        } else {
            let digits = format!("{fraction:06}");
            write!(f, "{whole}.{}%", digits.trim_end_matches('0'))
        }
    }
}

/// Trade direction of a swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell token A for token B, price moves down
    AToB,
    /// Sell token B for token A, price moves up
    BToA,
}

impl SwapDirection {
    pub const fn from_a_to_b(a_to_b: bool) -> Self {
        if a_to_b { Self::AToB } else { Self::BToA }
    }

    pub const fn is_a_to_b(self) -> bool {
        matches!(self, Self::AToB)
    }

    /// Tick array offset applied per crossing: -1 walking down, +1 walking up.
    pub const fn array_step(self) -> i32 {
        match self {
            Self::AToB => -1,
            Self::BToA => 1,
        }
    }
}

/// One reward slot of a whirlpool account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WhirlpoolRewardInfo {
    /// Reward token mint
    pub mint: Pubkey,
    /// Reward vault token account
    pub vault: Pubkey,
    /// Authority allowed to set emissions
    pub authority: Pubkey,
    /// Q64.64 number of reward tokens emitted per second
    pub emissions_per_second_x64: u128,
    /// Q64.64 reward growth per unit of liquidity since pool creation
    pub growth_global_x64: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_display() {
        assert_eq!(Percentage::from_fraction(1000, 1_000_000).to_string(), "0.1%");
        assert_eq!(Percentage::from_fraction(300, 10_000).to_string(), "3%");
        assert_eq!(Percentage::from_fraction(65535, 1_000_000).to_string(), "6.5535%");
        assert_eq!(Percentage::from_fraction(1, 3).to_string(), "33.333333%");
        assert_eq!(Percentage::from_fraction(0, 10_000).to_string(), "0%");
        assert_eq!(Percentage::from_fraction(1, 0).to_string(), "NaN%");
    }

    #[test]
    fn test_percentage_equivalence() {
        let one_percent = Percentage::from_fraction(1, 100);
        assert!(one_percent.is_equivalent(&Percentage::from_fraction(100, 10_000)));
        assert!(!one_percent.is_equivalent(&Percentage::from_fraction(101, 10_000)));
        // structural equality keeps the raw encoding
        assert_ne!(one_percent, Percentage::from_fraction(100, 10_000));
    }

    #[test]
    fn test_swap_direction() {
        assert_eq!(SwapDirection::from_a_to_b(true), SwapDirection::AToB);
        assert_eq!(SwapDirection::from_a_to_b(false), SwapDirection::BToA);
        assert!(SwapDirection::AToB.is_a_to_b());
        assert_eq!(SwapDirection::AToB.array_step(), -1);
        assert_eq!(SwapDirection::BToA.array_step(), 1);
    }

    #[test]
    fn test_token_amounts() {
        assert_eq!(TokenAmounts::zero(), TokenAmounts::default());
        assert_eq!(TokenAmounts::new(1, 2).token_b, 2);
    }
}
