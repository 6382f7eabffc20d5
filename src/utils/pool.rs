//! Pool metadata helpers: mint ordering, fee decoding, reward slots.

use solana_sdk::pubkey::Pubkey;

use crate::common::{Percentage, WhirlpoolRewardInfo};
use crate::constants::{FEE_RATE_DENOMINATOR, PROTOCOL_FEE_RATE_DENOMINATOR};

/// Orders a mint pair the way the program expects: `mint_a` has the
/// lexicographically smaller byte representation.
pub fn order_mints(mint_x: Pubkey, mint_y: Pubkey) -> (Pubkey, Pubkey) {
    if mint_x.to_bytes() < mint_y.to_bytes() {
        (mint_x, mint_y)
    } else {
        (mint_y, mint_x)
    }
}

/// Pool `fee_rate`, stored as hundredths of a basis point (u16::MAX is ~6.5%).
pub fn get_fee_rate(fee_rate: u16) -> Percentage {
    Percentage::from_fraction(u64::from(fee_rate), FEE_RATE_DENOMINATOR)
}

/// Pool `protocol_fee_rate`, stored as basis points of the collected fee.
pub fn get_protocol_fee_rate(protocol_fee_rate: u16) -> Percentage {
    Percentage::from_fraction(u64::from(protocol_fee_rate), PROTOCOL_FEE_RATE_DENOMINATOR)
}

pub fn is_reward_initialized(reward_info: &WhirlpoolRewardInfo) -> bool {
    reward_info.mint != Pubkey::default() && reward_info.vault != Pubkey::default()
}
