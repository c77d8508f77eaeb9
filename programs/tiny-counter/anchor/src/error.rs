use anchor_lang::prelude::*;

#[error_code]
pub enum CounterError {
    #[msg("Counter account does not match the derived counter address")]
    AddressMismatch,
    #[msg("Counter account is already initialized")]
    AlreadyInitialized,
    #[msg("Counter account has not been initialized")]
    NotFound,
    #[msg("Counter would overflow")]
    Overflow,
    #[msg("No valid bump seed for the counter address")]
    DerivationFailure,
}
