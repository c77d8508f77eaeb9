use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::error::CounterError;

/// The single persisted counter record.
///
/// Lives at the address derived from `[b"counter"]` and is owned by this
/// program. Created once by `initialize`, incremented in place by `bump`.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Counter {
    /// Number of successful bumps since initialization
    pub count: u64,
    /// Canonical bump of the counter address
    pub bump: u8,
    /// Layout version of this record
    pub version: u8,
}

impl Counter {
    /// 8 bytes discriminator + 8 bytes count + 1 byte bump + 1 byte version
    pub const LEN: usize = 8 + 8 + 1 + 1;
    pub const VERSION: u8 = 1;

    pub fn new(bump: u8) -> Self {
        Self {
            count: 0,
            bump,
            version: Self::VERSION,
        }
    }

    /// Adds one to `count`. Fails with `Overflow` instead of wrapping, leaving
    /// the record unchanged.
    pub fn increment(&mut self) -> Result<u64> {
        self.count = self.count.checked_add(1).ok_or(CounterError::Overflow)?;
        Ok(self.count)
    }
}

/// What currently sits at the counter address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// System-owned with no data. May already hold lamports.
    Uninitialized,
    /// Owned by this program and holding a `Counter`.
    Active,
    /// Holds something that is not a counter record.
    Occupied,
}

impl RecordState {
    pub fn classify(owner: &Pubkey, data: &[u8], program_id: &Pubkey) -> Self {
        if *owner == anchor_lang::system_program::ID && data.is_empty() {
            RecordState::Uninitialized
        } else if owner == program_id && data.starts_with(Counter::DISCRIMINATOR) {
            RecordState::Active
        } else {
            RecordState::Occupied
        }
    }
}

/// Writes a fresh `Counter` into freshly allocated account data.
pub fn write_new_record(data: &mut [u8], bump: u8) -> Result<Counter> {
    if data.len() < Counter::LEN {
        return err!(anchor_lang::error::ErrorCode::AccountDidNotSerialize);
    }
    require!(
        !data.starts_with(Counter::DISCRIMINATOR),
        CounterError::AlreadyInitialized
    );

    let counter = Counter::new(bump);
    counter.try_serialize(&mut &mut data[..])?;
    Ok(counter)
}
