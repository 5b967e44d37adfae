use anchor_lang::prelude::*;

/// Emitted when a collector is bound to its beneficiary
#[event]
pub struct CollectorInitialized {
    /// Collector account address
    pub collector: Pubkey,
    /// Registry config the collector was derived from
    pub registry: Pubkey,
    /// Beneficiary every sweep will pay out to
    pub bound_beneficiary: Pubkey,
    /// Salt the address was derived with
    pub salt: [u8; 32],
}

/// Emitted when lamports are deposited through the program
#[event]
pub struct Received {
    pub sender: Pubkey,
    pub collector: Pubkey,
    pub amount: u64,
}

/// Emitted for each asset swept to the beneficiary
#[event]
pub struct Collected {
    pub collector: Pubkey,
    pub beneficiary: Pubkey,
    /// Mint of the swept token, or the default pubkey for lamports
    pub asset: Pubkey,
    pub amount: u64,
}
