use anchor_lang::prelude::*;

/// Global registry configuration.
///
/// Field order is wire layout: the collector program reads `beneficiary`
/// at a fixed offset (8-byte discriminator + 32-byte authority).
#[account]
#[derive(InitSpace)]
pub struct RegistryConfig {
    /// Registry owner (admin)
    pub authority: Pubkey,

    /// Beneficiary bound into collectors materialized from now on
    pub beneficiary: Pubkey,

    /// Collector program every instance is derived from; set once
    pub template: Pubkey,

    /// Total collectors materialized through this registry
    pub total_materialized: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl RegistryConfig {
    /// Account size: 32 + 32 + 32 + 8 + 1 = 105 bytes
    pub const SIZE: usize = 32 + 32 + 32 + 8 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_config_size() {
        assert_eq!(RegistryConfig::SIZE, 105);
        assert_eq!(RegistryConfig::INIT_SPACE, RegistryConfig::SIZE);
    }

    #[test]
    fn test_beneficiary_sits_at_fixed_offset() {
        let config = RegistryConfig {
            authority: Pubkey::new_unique(),
            beneficiary: Pubkey::new_unique(),
            template: Pubkey::new_unique(),
            total_materialized: 7,
            bump: 254,
        };

        // serialized body starts after the 8-byte discriminator, so the
        // beneficiary lands at account bytes 40..72
        let bytes = config.try_to_vec().unwrap();
        assert_eq!(&bytes[32..64], config.beneficiary.as_ref());
    }
}
