use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use collector::constants::SEED_COLLECTOR;

use crate::constants::SEED_CONFIG;
use crate::error::RegistryError;
use crate::state::RegistryConfig;

/// Create the registry config; the caller becomes the owner
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = RegistryConfig::DISCRIMINATOR.len() + RegistryConfig::INIT_SPACE,
        seeds = [SEED_CONFIG],
        bump,
    )]
    pub config: Account<'info, RegistryConfig>,

    /// Collector program used as the template for every materialized instance
    /// CHECK: Must be an executable program; stored once and never changed
    #[account(
        constraint = template.executable && template.key() != Pubkey::default()
            @ RegistryError::InvalidTemplate
    )]
    pub template: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Owner-gated mutation of the beneficiary or owner
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump,
        constraint = config.authority == authority.key() @ RegistryError::Unauthorized,
    )]
    pub config: Account<'info, RegistryConfig>,
}

/// Pure address derivation for a salt
#[derive(Accounts)]
pub struct ComputeIdentifier<'info> {
    #[account(seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, RegistryConfig>,
}

/// Existence query for a salt's collector
#[derive(Accounts)]
#[instruction(salt: [u8; 32])]
pub struct IsMaterialized<'info> {
    #[account(seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, RegistryConfig>,

    /// CHECK: Existence check only; address verified against the template
    #[account(
        seeds = [SEED_COLLECTOR, config.key().as_ref(), salt.as_ref()],
        bump,
        seeds::program = config.template,
    )]
    pub collector: UncheckedAccount<'info>,
}

/// Create the collector for a salt and sweep the listed assets to the
/// current beneficiary, in one transaction
#[derive(Accounts)]
#[instruction(salt: [u8; 32])]
pub struct Materialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut, seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, RegistryConfig>,

    /// CHECK: Created by CPI into the collector program
    #[account(
        mut,
        seeds = [SEED_COLLECTOR, config.key().as_ref(), salt.as_ref()],
        bump,
        seeds::program = config.template,
    )]
    pub collector: UncheckedAccount<'info>,

    /// Receives the swept assets
    /// CHECK: Constrained to the configured beneficiary
    #[account(
        mut,
        constraint = beneficiary.key() == config.beneficiary
            @ RegistryError::InvalidBeneficiary
    )]
    pub beneficiary: UncheckedAccount<'info>,

    /// CHECK: Address constrained against the stored template
    #[account(
        constraint = collector_program.key() == config.template
            @ RegistryError::InvalidTemplate
    )]
    pub collector_program: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
