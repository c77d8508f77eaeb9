use anchor_lang::prelude::*;
use anchor_lang::error::ErrorCode;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::error::CounterError;
use crate::pda::{verify_counter_address, COUNTER_SEED};
use crate::state::{write_new_record, Counter, RecordState};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// CHECK: address, state and allocation are validated in the handler
    #[account(mut)]
    pub counter: UncheckedAccount<'info>,

    /// CHECK: pays for the counter's rent-exempt allocation; the signer check
    /// runs in the handler after the counter address check
    #[account(mut)]
    pub user: UncheckedAccount<'info>,

    /// CHECK: must be the system program; checked in the handler after the counter address
    pub system_program: UncheckedAccount<'info>,
}

impl<'info> Initialize<'info> {
    /// Payer and allocator checks. Run after `check_vacant` so a wrong counter
    /// address is reported as such whatever else is passed in.
    fn check_funding(&self) -> Result<()> {
        require!(self.user.is_signer, ErrorCode::AccountNotSigner);
        require_keys_eq!(
            self.system_program.key(),
            system_program::ID,
            ErrorCode::InvalidProgramId
        );
        Ok(())
    }

    /// Allocates `Counter::LEN` bytes at the counter address and assigns it to
    /// this program. Lamports already sitting at the address count toward rent.
    fn allocate_counter(&self, program_id: &Pubkey, signer_seeds: &[&[&[u8]]]) -> Result<()> {
        let rent = Rent::get()?.minimum_balance(Counter::LEN);
        let system = self.system_program.to_account_info();
        let payer = self.user.to_account_info();
        let counter = self.counter.to_account_info();

        let current = counter.lamports();
        if current == 0 {
            return system_program::create_account(
                CpiContext::new_with_signer(
                    system,
                    CreateAccount {
                        from: payer,
                        to: counter,
                    },
                    signer_seeds,
                ),
                rent,
                Counter::LEN as u64,
                program_id,
            );
        }

        let shortfall = rent.saturating_sub(current);
        if shortfall > 0 {
            system_program::transfer(
                CpiContext::new(
                    system.clone(),
                    Transfer {
                        from: payer,
                        to: counter.clone(),
                    },
                ),
                shortfall,
            )?;
        }

        system_program::allocate(
            CpiContext::new_with_signer(
                system.clone(),
                Allocate {
                    account_to_allocate: counter.clone(),
                },
                signer_seeds,
            ),
            Counter::LEN as u64,
        )?;

        system_program::assign(
            CpiContext::new_with_signer(
                system,
                Assign {
                    account_to_assign: counter,
                },
                signer_seeds,
            ),
            program_id,
        )
    }
}

/// Guards for `initialize`: the account must sit at the derived counter
/// address and must not hold anything yet. Returns the canonical bump.
pub fn check_vacant(
    program_id: &Pubkey,
    address: &Pubkey,
    owner: &Pubkey,
    data: &[u8],
) -> Result<u8> {
    let bump = verify_counter_address(program_id, address)?;
    require!(
        RecordState::classify(owner, data, program_id) == RecordState::Uninitialized,
        CounterError::AlreadyInitialized
    );
    Ok(bump)
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let counter = ctx.accounts.counter.to_account_info();

    let bump = {
        let data = counter.try_borrow_data()?;
        check_vacant(ctx.program_id, counter.key, counter.owner, &data[..])?
    };
    ctx.accounts.check_funding()?;

    let bump_seed = [bump];
    let signer_seeds: &[&[&[u8]]] = &[&[COUNTER_SEED, &bump_seed]];
    ctx.accounts.allocate_counter(ctx.program_id, signer_seeds)?;

    let mut data = counter.try_borrow_mut_data()?;
    write_new_record(&mut data[..], bump)?;

    msg!("Counter initialized at {} (bump {})", counter.key, bump);
    Ok(())
}
