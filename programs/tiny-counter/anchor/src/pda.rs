use anchor_lang::prelude::*;

use crate::error::CounterError;

/// Namespace tag the counter address is derived from.
pub const COUNTER_SEED: &[u8] = b"counter";

/// Derives the counter address and its canonical bump for `program_id`.
///
/// Pure function of the seed and the program id, so any caller can
/// re-derive the same pair without reading chain state. The resulting
/// address is off the ed25519 curve and only `program_id` can sign for it.
pub fn find_counter_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[COUNTER_SEED], program_id)
        .ok_or_else(|| error!(CounterError::DerivationFailure))
}

/// Re-creates the counter address from a bump stored in the record.
pub fn counter_address_with_bump(program_id: &Pubkey, bump: u8) -> Result<Pubkey> {
    Pubkey::create_program_address(&[COUNTER_SEED, &[bump]], program_id)
        .map_err(|_| error!(CounterError::DerivationFailure))
}

/// Checks that `candidate` is the counter address of `program_id` and
/// returns the canonical bump.
pub fn verify_counter_address(program_id: &Pubkey, candidate: &Pubkey) -> Result<u8> {
    let (expected, bump) = find_counter_address(program_id)?;
    require_keys_eq!(*candidate, expected, CounterError::AddressMismatch);
    Ok(bump)
}
