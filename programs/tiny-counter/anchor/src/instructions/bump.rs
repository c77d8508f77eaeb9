use anchor_lang::prelude::*;

use crate::error::CounterError;
use crate::pda::counter_address_with_bump;
use crate::state::{Counter, RecordState};

#[derive(Accounts)]
pub struct Bump<'info> {
    /// CHECK: ownership, discriminator and address are validated in the handler
    #[account(mut)]
    pub counter: UncheckedAccount<'info>,
}

/// Increments the record held in `data` and writes it back.
///
/// The account must hold an active counter (`NotFound` otherwise) sitting at
/// the address recreated from its stored bump. On any failure `data` is left
/// untouched. Returns the new count.
pub fn apply_bump(
    program_id: &Pubkey,
    address: &Pubkey,
    owner: &Pubkey,
    data: &mut [u8],
) -> Result<u64> {
    require!(
        RecordState::classify(owner, data, program_id) == RecordState::Active,
        CounterError::NotFound
    );

    let mut counter = Counter::try_deserialize(&mut &data[..])?;
    let expected = counter_address_with_bump(program_id, counter.bump)?;
    require_keys_eq!(*address, expected, CounterError::AddressMismatch);

    let count = counter.increment()?;
    counter.try_serialize(&mut &mut data[..])?;
    Ok(count)
}

pub fn bump(ctx: Context<Bump>) -> Result<()> {
    let counter = ctx.accounts.counter.to_account_info();
    let mut data = counter.try_borrow_mut_data()?;

    let count = apply_bump(ctx.program_id, counter.key, counter.owner, &mut data[..])?;

    msg!("Counter bumped to {}", count);
    Ok(())
}
