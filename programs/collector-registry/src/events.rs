use anchor_lang::prelude::*;

/// Emitted once when the registry config is created
#[event]
pub struct RegistryInitialized {
    pub authority: Pubkey,
    pub beneficiary: Pubkey,
    pub template: Pubkey,
}

/// Emitted when a collector is materialized for a salt
#[event]
pub struct Materialized {
    /// Salt the address was derived with
    pub salt: [u8; 32],
    /// Address of the new collector
    pub identifier: Pubkey,
}

/// Emitted when the beneficiary for future collectors changes
#[event]
pub struct BeneficiaryUpdated {
    pub previous_beneficiary: Pubkey,
    pub new_beneficiary: Pubkey,
}

/// Emitted when registry ownership moves
#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
