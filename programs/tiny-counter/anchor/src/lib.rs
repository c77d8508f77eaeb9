use anchor_lang::prelude::*;

declare_id!("8tGA612eKkjd1bemxogA75dF9LQHi7ZZeFNC3MUqDcpu");

pub mod error;
pub mod instructions;
pub mod pda;
pub mod state;

pub use error::*;
pub use instructions::*;
pub use pda::*;
pub use state::*;


#[program]
pub mod tiny_counter {
    use super::*;

    /// Create the counter record at `[b"counter"]` with `count = 0`
    ///
    /// The counter account must be the address derived from this program's
    /// id, and nothing may live there yet. `user` signs and pays rent for the
    /// allocation. Fails with `AddressMismatch` for any other account and with
    /// `AlreadyInitialized` on a second call.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Increment the counter by one
    ///
    /// Anyone may bump an existing counter. Fails with `NotFound` before
    /// `initialize` and with `Overflow` at `u64::MAX`.
    pub fn bump(ctx: Context<Bump>) -> Result<()> {
        instructions::bump(ctx)
    }
}
