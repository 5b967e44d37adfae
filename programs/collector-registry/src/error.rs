use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Only the registry owner can perform this action")]
    Unauthorized,

    #[msg("Beneficiary address cannot be zero")]
    InvalidBeneficiary,

    #[msg("Template must be an executable program")]
    InvalidTemplate,

    #[msg("A collector has already been materialized for this salt")]
    AlreadyMaterialized,

    #[msg("Arithmetic overflow")]
    Overflow,
}
