use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, TokenAccount, Transfer};

declare_id!("761RUKWGgStRshdz3HJcS7dPodFSckDAcudLtU1CZ1b6");

pub mod constants;
pub mod contexts;
pub mod error;
pub mod events;
pub mod state;

pub use constants::*;
pub use contexts::*;
pub use error::CollectorError;
pub use events::*;
pub use state::*;

#[program]
pub mod collector {
    use super::*;

    /// Bind a collector to the registry's current beneficiary, once
    pub fn setup(ctx: Context<Setup>, salt: [u8; 32]) -> Result<()> {
        let collector = &mut ctx.accounts.collector;
        collector.assert_not_set_up()?;

        let config_info = ctx.accounts.registry_config.to_account_info();
        let config_data = config_info.try_borrow_data()?;
        let beneficiary = state::read_registry_beneficiary(&config_data)?;
        drop(config_data);

        let clock = Clock::get()?;
        collector.registry = ctx.accounts.registry_config.key();
        collector.bound_beneficiary = beneficiary;
        collector.salt = salt;
        collector.initialized = true;
        collector.created_at = clock.unix_timestamp;
        collector.bump = ctx.bumps.collector;

        emit!(CollectorInitialized {
            collector: collector.key(),
            registry: collector.registry,
            bound_beneficiary: beneficiary,
            salt,
        });

        msg!(
            "Collector {} bound to beneficiary {}",
            ctx.accounts.collector.key(),
            beneficiary
        );

        Ok(())
    }

    /// Deposit lamports into a collector address, materialized or not
    pub fn deposit_native(ctx: Context<DepositNative>, amount: u64) -> Result<()> {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.sender.to_account_info(),
                    to: ctx.accounts.collector.to_account_info(),
                },
            ),
            amount,
        )?;

        emit!(Received {
            sender: ctx.accounts.sender.key(),
            collector: ctx.accounts.collector.key(),
            amount,
        });

        Ok(())
    }

    /// Sweep the collector's spendable lamports to the bound beneficiary.
    /// Anyone may trigger the sweep; the destination is fixed.
    pub fn collect_native(ctx: Context<CollectNative>) -> Result<u64> {
        let amount = sweep_native(
            &ctx.accounts.collector.to_account_info(),
            &ctx.accounts.beneficiary.to_account_info(),
        )?;

        if amount > 0 {
            emit!(Collected {
                collector: ctx.accounts.collector.key(),
                beneficiary: ctx.accounts.collector.bound_beneficiary,
                asset: Pubkey::default(),
                amount,
            });
            msg!(
                "Swept {} lamports to {}",
                amount,
                ctx.accounts.collector.bound_beneficiary
            );
        }

        Ok(amount)
    }

    /// Sweep the collector's entire balance of one token
    pub fn collect(ctx: Context<Collect>) -> Result<u64> {
        let mint = ctx.accounts.mint.key();
        let amount = sweep_token(
            &ctx.accounts.collector,
            &mint,
            &ctx.accounts.collector_token.to_account_info(),
            &ctx.accounts.beneficiary_token.to_account_info(),
            &ctx.accounts.token_program.to_account_info(),
        )?;

        if amount > 0 {
            emit!(Collected {
                collector: ctx.accounts.collector.key(),
                beneficiary: ctx.accounts.collector.bound_beneficiary,
                asset: mint,
                amount,
            });
            msg!(
                "Swept {} of {} to {}",
                amount,
                mint,
                ctx.accounts.collector.bound_beneficiary
            );
        }

        Ok(amount)
    }

    /// Sweep a list of assets in order, all-or-nothing.
    /// The default pubkey denotes lamports; any other entry is a mint and
    /// consumes one `[collector_token, beneficiary_token]` pair from the
    /// remaining accounts.
    pub fn collect_many<'info>(
        ctx: Context<'_, '_, 'info, 'info, CollectMany<'info>>,
        assets: Vec<Pubkey>,
    ) -> Result<()> {
        require!(!assets.is_empty(), CollectorError::EmptyAssetList);

        let collector_key = ctx.accounts.collector.key();
        let beneficiary = ctx.accounts.collector.bound_beneficiary;
        let mut remaining = ctx.remaining_accounts.iter();

        for asset in assets.iter() {
            let amount = if *asset == Pubkey::default() {
                sweep_native(
                    &ctx.accounts.collector.to_account_info(),
                    &ctx.accounts.beneficiary.to_account_info(),
                )?
            } else {
                let source = remaining
                    .next()
                    .ok_or(CollectorError::MissingSweepAccounts)?;
                let destination = remaining
                    .next()
                    .ok_or(CollectorError::MissingSweepAccounts)?;
                sweep_token(
                    &ctx.accounts.collector,
                    asset,
                    source,
                    destination,
                    &ctx.accounts.token_program.to_account_info(),
                )?
            };

            if amount > 0 {
                emit!(Collected {
                    collector: collector_key,
                    beneficiary,
                    asset: *asset,
                    amount,
                });
            }
        }

        Ok(())
    }
}

/// Move everything above the rent floor out of the collector.
/// The balance is read and debited in the same instruction.
fn sweep_native<'info>(
    collector_info: &AccountInfo<'info>,
    beneficiary_info: &AccountInfo<'info>,
) -> Result<u64> {
    let rent_floor = Rent::get()?.minimum_balance(collector_info.data_len());
    let amount = state::sweepable_lamports(collector_info.lamports(), rent_floor);
    if amount == 0 {
        return Ok(0);
    }

    let debited = collector_info
        .lamports()
        .checked_sub(amount)
        .ok_or(CollectorError::Overflow)?;
    let credited = beneficiary_info
        .lamports()
        .checked_add(amount)
        .ok_or(CollectorError::Overflow)?;
    **collector_info.try_borrow_mut_lamports()? = debited;
    **beneficiary_info.try_borrow_mut_lamports()? = credited;

    Ok(amount)
}

/// Transfer the collector's full balance of `mint` to a beneficiary-owned
/// token account, signed with the collector's PDA seeds.
fn sweep_token<'info>(
    collector: &Account<'info, Collector>,
    mint: &Pubkey,
    source_info: &AccountInfo<'info>,
    destination_info: &AccountInfo<'info>,
    token_program_info: &AccountInfo<'info>,
) -> Result<u64> {
    let source = {
        require!(
            source_info.owner == &token::ID,
            CollectorError::InvalidTokenAccount
        );
        let data = source_info.try_borrow_data()?;
        TokenAccount::try_deserialize(&mut &data[..])
            .map_err(|_| CollectorError::InvalidTokenAccount)?
    };
    require!(
        source.owner == collector.key(),
        CollectorError::InvalidTokenAccount
    );
    require!(source.mint == *mint, CollectorError::InvalidTokenAccount);

    let destination = {
        require!(
            destination_info.owner == &token::ID,
            CollectorError::InvalidTokenAccount
        );
        let data = destination_info.try_borrow_data()?;
        TokenAccount::try_deserialize(&mut &data[..])
            .map_err(|_| CollectorError::InvalidTokenAccount)?
    };
    require!(
        destination.owner == collector.bound_beneficiary,
        CollectorError::BeneficiaryMismatch
    );
    require!(
        destination.mint == *mint,
        CollectorError::InvalidTokenAccount
    );

    let amount = source.amount;
    if amount == 0 {
        return Ok(0);
    }

    let signer_seeds: &[&[&[u8]]] = &[&[
        SEED_COLLECTOR,
        collector.registry.as_ref(),
        collector.salt.as_ref(),
        &[collector.bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            token_program_info.clone(),
            Transfer {
                from: source_info.clone(),
                to: destination_info.clone(),
                authority: collector.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
    .map_err(|_| CollectorError::TransferFailed)?;

    Ok(amount)
}
