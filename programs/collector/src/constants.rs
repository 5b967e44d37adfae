//! PDA seed constants for the collector program.
//!
//! The collector address is derived from the registry config and a
//! caller-chosen salt, so it can be computed before the account exists.

use anchor_lang::prelude::*;

/// Collector account PDA seed
/// PDA: ["collector", registry_config.key(), salt]
pub const SEED_COLLECTOR: &[u8] = b"collector";

/// Program that owns registry config accounts.
/// Used to verify the config passed to `setup` without a crate dependency
/// on the registry program.
pub const REGISTRY_PROGRAM_ID: Pubkey = pubkey!("4u849yEmC4oRkBE2HcMCTYxuZuazPiqueps7XkCk16qx");
