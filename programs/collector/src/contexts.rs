use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{REGISTRY_PROGRAM_ID, SEED_COLLECTOR};
use crate::error::CollectorError;
use crate::state::Collector;

/// One-time setup of a collector at its deterministic address.
///
/// Permissionless to trigger; the bound beneficiary is read from the
/// registry config, never from the caller.
#[derive(Accounts)]
#[instruction(salt: [u8; 32])]
pub struct Setup<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Registry config the collector address is derived from
    /// CHECK: Owner program verified here, beneficiary read in the instruction
    #[account(
        constraint = registry_config.owner == &REGISTRY_PROGRAM_ID
            @ CollectorError::InvalidRegistryConfig
    )]
    pub registry_config: UncheckedAccount<'info>,

    /// Lamports already sitting at the address are preserved by `init_if_needed`
    #[account(
        init_if_needed,
        payer = payer,
        space = Collector::DISCRIMINATOR.len() + Collector::INIT_SPACE,
        seeds = [SEED_COLLECTOR, registry_config.key().as_ref(), salt.as_ref()],
        bump,
    )]
    pub collector: Account<'info, Collector>,

    pub system_program: Program<'info, System>,
}

/// Explicit native deposit; works before and after setup
#[derive(Accounts)]
pub struct DepositNative<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    /// CHECK: Any address can hold lamports; existence is not required
    #[account(mut)]
    pub collector: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Sweep the collector's spendable lamports to the bound beneficiary
#[derive(Accounts)]
pub struct CollectNative<'info> {
    #[account(
        mut,
        seeds = [SEED_COLLECTOR, collector.registry.as_ref(), collector.salt.as_ref()],
        bump = collector.bump,
    )]
    pub collector: Account<'info, Collector>,

    /// CHECK: Constrained to the beneficiary bound at setup
    #[account(
        mut,
        constraint = beneficiary.key() == collector.bound_beneficiary
            @ CollectorError::BeneficiaryMismatch
    )]
    pub beneficiary: UncheckedAccount<'info>,
}

/// Sweep one token balance to the bound beneficiary
#[derive(Accounts)]
pub struct Collect<'info> {
    #[account(
        seeds = [SEED_COLLECTOR, collector.registry.as_ref(), collector.salt.as_ref()],
        bump = collector.bump,
    )]
    pub collector: Account<'info, Collector>,

    /// Mint of the token being swept
    /// CHECK: Only used as an address to match both token accounts
    pub mint: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = collector_token.owner == collector.key()
            @ CollectorError::InvalidTokenAccount,
        constraint = collector_token.mint == mint.key()
            @ CollectorError::InvalidTokenAccount,
    )]
    pub collector_token: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token.owner == collector.bound_beneficiary
            @ CollectorError::BeneficiaryMismatch,
        constraint = beneficiary_token.mint == mint.key()
            @ CollectorError::InvalidTokenAccount,
    )]
    pub beneficiary_token: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Sweep a list of assets in order.
///
/// Token entries consume one `[collector_token, beneficiary_token]` pair
/// from the remaining accounts; the default pubkey entry sweeps lamports
/// to `beneficiary`.
#[derive(Accounts)]
pub struct CollectMany<'info> {
    #[account(
        mut,
        seeds = [SEED_COLLECTOR, collector.registry.as_ref(), collector.salt.as_ref()],
        bump = collector.bump,
    )]
    pub collector: Account<'info, Collector>,

    /// CHECK: Constrained to the beneficiary bound at setup
    #[account(
        mut,
        constraint = beneficiary.key() == collector.bound_beneficiary
            @ CollectorError::BeneficiaryMismatch
    )]
    pub beneficiary: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}
