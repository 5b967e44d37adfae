//! Deterministic collector address derivation.

use anchor_lang::prelude::*;
use collector::constants::SEED_COLLECTOR;

/// Derive the collector address for a salt under a registry and template.
///
/// The derivation commits to the registry config address, the raw salt
/// bytes and the template program, so the same triple always yields the
/// same address whether or not the collector exists yet. This is what
/// lets anyone fund an address before anyone pays to materialize it.
pub fn collector_address(config: &Pubkey, salt: &[u8; 32], template: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[SEED_COLLECTOR, config.as_ref(), salt.as_ref()],
        template,
    )
}
