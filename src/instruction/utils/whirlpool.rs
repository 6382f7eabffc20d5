use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::common::{PoolUtilError, PoolUtilResult, SwapDirection};
use crate::constants::TICK_ARRAYS_PER_SWAP;
use crate::utils::calc::whirlpool_math::tick_math::get_start_tick_index;

/// Seeds for PDA derivation
pub mod seeds {
    pub const WHIRLPOOL_SEED: &[u8] = b"whirlpool";
    pub const TICK_ARRAY_SEED: &[u8] = b"tick_array";
    pub const POSITION_SEED: &[u8] = b"position";
    pub const ORACLE_SEED: &[u8] = b"oracle";
}

/// Constants related to program accounts and authorities
pub mod accounts {
    use solana_sdk::{pubkey, pubkey::Pubkey};
    pub const WHIRLPOOL_PROGRAM_ID: Pubkey = pubkey!("whirLbMiicVdio4qvUfM5KAg6Ct8VwpYzGff3uctyCc");
    pub const WHIRLPOOLS_CONFIG: Pubkey = pubkey!("2LecshUwdy9xi7meFgHtFJQNSKk4KdTrcpvaB56dP2NQ");
}

/// A program derived address and its bump seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pda {
    pub address: Pubkey,
    pub bump: u8,
}

fn find_pda(seeds: &[&[u8]], program_id: &Pubkey, what: &'static str) -> PoolUtilResult<Pda> {
    Pubkey::try_find_program_address(seeds, program_id)
        .map(|(address, bump)| Pda { address, bump })
        .ok_or(PoolUtilError::AddressDerivation(what))
}

/// Calculate tick array PDA
///
/// # Arguments
/// * `program_id` - Whirlpool program
/// * `whirlpool` - Pool the tick array belongs to
/// * `start_tick_index` - Starting tick index for the tick array
///
/// Note: the program seeds the start index as its decimal string, not as bytes
pub fn get_tick_array_pda(
    program_id: &Pubkey,
    whirlpool: &Pubkey,
    start_tick_index: i32,
) -> PoolUtilResult<Pda> {
    let start_tick_index_str = start_tick_index.to_string();
    find_pda(
        &[seeds::TICK_ARRAY_SEED, whirlpool.as_ref(), start_tick_index_str.as_bytes()],
        program_id,
        "tick array",
    )
}

/// Address of the tick array starting at `start_tick_index`
pub fn derive_tick_array_address(
    program_id: &Pubkey,
    whirlpool: &Pubkey,
    start_tick_index: i32,
) -> PoolUtilResult<Pubkey> {
    get_tick_array_pda(program_id, whirlpool, start_tick_index).map(|pda| pda.address)
}

/// Calculate whirlpool PDA
///
/// `token_mint_a` and `token_mint_b` must already be ordered, see
/// [`order_mints`](crate::utils::pool::order_mints).
pub fn get_whirlpool_pda(
    program_id: &Pubkey,
    whirlpools_config: &Pubkey,
    token_mint_a: &Pubkey,
    token_mint_b: &Pubkey,
    tick_spacing: u16,
) -> PoolUtilResult<Pda> {
    find_pda(
        &[
            seeds::WHIRLPOOL_SEED,
            whirlpools_config.as_ref(),
            token_mint_a.as_ref(),
            token_mint_b.as_ref(),
            &tick_spacing.to_le_bytes(),
        ],
        program_id,
        "whirlpool",
    )
}

pub fn get_position_pda(program_id: &Pubkey, position_mint: &Pubkey) -> PoolUtilResult<Pda> {
    find_pda(&[seeds::POSITION_SEED, position_mint.as_ref()], program_id, "position")
}

pub fn get_oracle_pda(program_id: &Pubkey, whirlpool: &Pubkey) -> PoolUtilResult<Pda> {
    find_pda(&[seeds::ORACLE_SEED, whirlpool.as_ref()], program_id, "oracle")
}

/// Start indexes of the tick arrays a swap from `tick_current_index` may traverse.
///
/// The first entry is the array holding the current tick; each following entry
/// is one array further in the swap direction.
pub fn get_tick_array_start_indexes_for_swap(
    tick_current_index: i32,
    tick_spacing: u16,
    direction: SwapDirection,
) -> PoolUtilResult<[i32; TICK_ARRAYS_PER_SWAP]> {
    let mut start_indexes = [0i32; TICK_ARRAYS_PER_SWAP];
    let mut offset = 0i32;
    for start_index in start_indexes.iter_mut() {
        *start_index = get_start_tick_index(tick_current_index, tick_spacing, offset)?;
        offset += direction.array_step();
    }
    Ok(start_indexes)
}

/// Tick array addresses a swap on `whirlpool` may traverse.
///
/// No account is fetched: callers must check that each returned array is
/// initialized before building the swap.
///
/// Known limitation: when slippage moves the price back across the array
/// boundary, the first array can be the one before the computed start index.
/// That case is not handled here.
///
/// # Arguments
/// * `tick_current_index` - The current tick index of the whirlpool
/// * `tick_spacing` - The tick spacing of the whirlpool
/// * `direction` - Direction of the trade
/// * `program_id` - The whirlpool program the pool lives on
/// * `whirlpool` - Address of the whirlpool to swap on
pub fn get_tick_array_public_keys_for_swap(
    tick_current_index: i32,
    tick_spacing: u16,
    direction: SwapDirection,
    program_id: &Pubkey,
    whirlpool: &Pubkey,
) -> PoolUtilResult<[Pubkey; TICK_ARRAYS_PER_SWAP]> {
    let start_indexes =
        get_tick_array_start_indexes_for_swap(tick_current_index, tick_spacing, direction)?;

    let mut addresses = [Pubkey::default(); TICK_ARRAYS_PER_SWAP];
    for (address, start_index) in addresses.iter_mut().zip(start_indexes) {
        *address = derive_tick_array_address(program_id, whirlpool, start_index)?;
        debug!(%whirlpool, start_index, address = %address, "derived tick array address");
    }
    Ok(addresses)
}
