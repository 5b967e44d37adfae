//! PDA seed constants for the registry program.

/// Registry configuration PDA seed
/// PDA: ["config"]
pub const SEED_CONFIG: &[u8] = b"config";
