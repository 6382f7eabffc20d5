/// Errors raised by the pool math and account helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PoolUtilError {
    #[error("invalid tick range: upper tick {upper} must be above lower tick {lower}")]
    InvalidRange { lower: i32, upper: i32 },
    #[error("invalid sqrt price range: upper {upper} is below lower {lower}")]
    InvalidPriceRange { lower: u128, upper: u128 },
    #[error("tick index {0} is out of bounds")]
    TickIndexOutOfBounds(i32),
    #[error("sqrt price {0} is outside the supported range")]
    SqrtPriceOutOfBounds(u128),
    #[error("tick array start index {0} is out of bounds")]
    TickArrayIndexOutOfBounds(i32),
    #[error("tick spacing must be greater than zero")]
    InvalidTickSpacing,
    #[error("sqrt price must be greater than zero")]
    ZeroSqrtPrice,
    #[error("token amount does not fit in u64")]
    TokenAmountOverflow,
    #[error("liquidity does not fit in u128")]
    LiquidityOverflow,
    #[error("no program address found for {0}")]
    AddressDerivation(&'static str),
}

pub type PoolUtilResult<T> = Result<T, PoolUtilError>;
