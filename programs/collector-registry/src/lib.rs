use anchor_lang::prelude::*;

declare_id!("4u849yEmC4oRkBE2HcMCTYxuZuazPiqueps7XkCk16qx");

pub mod constants;
pub mod contexts;
pub mod derive;
pub mod error;
pub mod events;
pub mod state;

pub use contexts::*;
pub use error::RegistryError;
pub use events::*;
pub use state::*;

#[program]
pub mod collector_registry {
    use super::*;

    /// Create the registry config with an initial beneficiary and the
    /// collector program as the instance template
    pub fn initialize(ctx: Context<Initialize>, beneficiary: Pubkey) -> Result<()> {
        require!(
            beneficiary != Pubkey::default(),
            RegistryError::InvalidBeneficiary
        );

        let config = &mut ctx.accounts.config;
        config.authority = ctx.accounts.authority.key();
        config.beneficiary = beneficiary;
        config.template = ctx.accounts.template.key();
        config.total_materialized = 0;
        config.bump = ctx.bumps.config;

        emit!(RegistryInitialized {
            authority: config.authority,
            beneficiary,
            template: config.template,
        });

        msg!(
            "Registry initialized: authority={}, beneficiary={}",
            ctx.accounts.authority.key(),
            beneficiary
        );

        Ok(())
    }

    /// Derive the collector address for a salt, without touching state.
    /// Returns the same address before and after materialization.
    pub fn compute_identifier(ctx: Context<ComputeIdentifier>, salt: [u8; 32]) -> Result<Pubkey> {
        let config = &ctx.accounts.config;
        let (identifier, _) = derive::collector_address(&config.key(), &salt, &config.template);
        Ok(identifier)
    }

    /// Whether a collector already exists for a salt
    pub fn is_materialized(ctx: Context<IsMaterialized>, salt: [u8; 32]) -> Result<bool> {
        let _ = salt;
        Ok(!ctx.accounts.collector.data_is_empty())
    }

    /// Create the collector for a salt, bind it to the current beneficiary
    /// and sweep the listed assets, all in one transaction.
    ///
    /// The sweep list is caller-supplied: assets already sitting at the
    /// derived address are collected only if listed here, which keeps the
    /// cost of materialization bounded by the caller.
    pub fn materialize<'info>(
        ctx: Context<'_, '_, 'info, 'info, Materialize<'info>>,
        salt: [u8; 32],
        assets: Vec<Pubkey>,
    ) -> Result<Pubkey> {
        require!(
            ctx.accounts.collector.data_is_empty(),
            RegistryError::AlreadyMaterialized
        );

        collector::cpi::setup(
            CpiContext::new(
                ctx.accounts.collector_program.to_account_info(),
                collector::cpi::accounts::Setup {
                    payer: ctx.accounts.payer.to_account_info(),
                    registry_config: ctx.accounts.config.to_account_info(),
                    collector: ctx.accounts.collector.to_account_info(),
                    system_program: ctx.accounts.system_program.to_account_info(),
                },
            ),
            salt,
        )?;

        if !assets.is_empty() {
            collector::cpi::collect_many(
                CpiContext::new(
                    ctx.accounts.collector_program.to_account_info(),
                    collector::cpi::accounts::CollectMany {
                        collector: ctx.accounts.collector.to_account_info(),
                        beneficiary: ctx.accounts.beneficiary.to_account_info(),
                        token_program: ctx.accounts.token_program.to_account_info(),
                    },
                )
                .with_remaining_accounts(ctx.remaining_accounts.to_vec()),
                assets,
            )?;
        }

        let config = &mut ctx.accounts.config;
        config.total_materialized = config
            .total_materialized
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;

        let identifier = ctx.accounts.collector.key();
        emit!(Materialized { salt, identifier });

        msg!("Collector materialized at {}", identifier);

        Ok(identifier)
    }

    /// Point future materializations at a new beneficiary (owner only).
    /// Collectors already materialized keep the beneficiary they bound.
    pub fn set_beneficiary(ctx: Context<UpdateConfig>, new_beneficiary: Pubkey) -> Result<()> {
        require!(
            new_beneficiary != Pubkey::default(),
            RegistryError::InvalidBeneficiary
        );

        let config = &mut ctx.accounts.config;
        let previous_beneficiary = config.beneficiary;
        config.beneficiary = new_beneficiary;

        emit!(BeneficiaryUpdated {
            previous_beneficiary,
            new_beneficiary,
        });

        msg!(
            "Beneficiary updated from {} to {}",
            previous_beneficiary,
            new_beneficiary
        );

        Ok(())
    }

    /// Hand the registry over to a new owner (owner only)
    pub fn transfer_ownership(ctx: Context<UpdateConfig>, new_owner: Pubkey) -> Result<()> {
        let config = &mut ctx.accounts.config;
        let previous_owner = config.authority;
        config.authority = new_owner;

        emit!(OwnershipTransferred {
            previous_owner,
            new_owner,
        });

        msg!("Ownership transferred from {} to {}", previous_owner, new_owner);

        Ok(())
    }
}
