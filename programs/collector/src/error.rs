use anchor_lang::prelude::*;

#[error_code]
pub enum CollectorError {
    #[msg("Setup can only run once")]
    AlreadySetUp,

    #[msg("At least one asset must be specified")]
    EmptyAssetList,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Token account does not belong to this collector or mint")]
    InvalidTokenAccount,

    #[msg("Destination is not owned by the bound beneficiary")]
    BeneficiaryMismatch,

    #[msg("Missing token account pair for a sweep entry")]
    MissingSweepAccounts,

    #[msg("Registry config account is not valid")]
    InvalidRegistryConfig,

    #[msg("Arithmetic overflow")]
    Overflow,
}
