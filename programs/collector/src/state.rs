use anchor_lang::prelude::*;

use crate::error::CollectorError;

/// A forwarding account at a deterministic address, bound to a single
/// beneficiary at setup time.
///
/// The address is derived from `["collector", registry_config, salt]`
/// under this program, so anyone can fund it before it exists.
#[account]
#[derive(InitSpace)]
pub struct Collector {
    /// Registry config this collector was derived from
    pub registry: Pubkey,

    /// Beneficiary captured at setup; never changes afterwards, even if
    /// the registry's beneficiary does
    pub bound_beneficiary: Pubkey,

    /// Salt the address was derived with (kept for PDA signing)
    pub salt: [u8; 32],

    /// One-time setup flag
    pub initialized: bool,

    /// Setup timestamp
    pub created_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl Collector {
    /// Account size: 32 + 32 + 32 + 1 + 8 + 1 = 106 bytes
    pub const SIZE: usize = 32 + 32 + 32 + 1 + 8 + 1;

    /// Guard for the one-time setup transition.
    pub fn assert_not_set_up(&self) -> Result<()> {
        require!(!self.initialized, CollectorError::AlreadySetUp);
        Ok(())
    }
}

/// Registry config layout: 8-byte discriminator, authority (32),
/// beneficiary (32), then fields this program does not read.
const CONFIG_BENEFICIARY_OFFSET: usize = 40;

/// Read the current beneficiary out of a registry config account.
///
/// The registry program fixes the field order of its config account, so
/// the beneficiary sits at a known offset and no crate dependency on the
/// registry is needed.
pub fn read_registry_beneficiary(data: &[u8]) -> Result<Pubkey> {
    let end = CONFIG_BENEFICIARY_OFFSET + 32;
    require!(data.len() >= end, CollectorError::InvalidRegistryConfig);

    let beneficiary = Pubkey::new_from_array(
        data[CONFIG_BENEFICIARY_OFFSET..end]
            .try_into()
            .map_err(|_| CollectorError::InvalidRegistryConfig)?,
    );
    require!(
        beneficiary != Pubkey::default(),
        CollectorError::InvalidRegistryConfig
    );

    Ok(beneficiary)
}

/// Lamports that can leave an account without dropping below its
/// rent-exempt minimum.
pub fn sweepable_lamports(balance: u64, rent_floor: u64) -> u64 {
    balance.saturating_sub(rent_floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_size() {
        assert_eq!(Collector::SIZE, 106);
        assert_eq!(Collector::INIT_SPACE, Collector::SIZE);
    }

    #[test]
    fn test_setup_guard() {
        let mut collector = Collector {
            registry: Pubkey::default(),
            bound_beneficiary: Pubkey::default(),
            salt: [0; 32],
            initialized: false,
            created_at: 0,
            bump: 255,
        };

        assert!(collector.assert_not_set_up().is_ok());

        collector.initialized = true;
        assert!(collector.assert_not_set_up().is_err());
    }

    #[test]
    fn test_read_registry_beneficiary() {
        let beneficiary = Pubkey::new_unique();

        // discriminator + authority + beneficiary + trailing fields
        let mut data = vec![0u8; 8];
        data.extend_from_slice(Pubkey::new_unique().as_ref());
        data.extend_from_slice(beneficiary.as_ref());
        data.extend_from_slice(&[0u8; 41]);

        assert_eq!(read_registry_beneficiary(&data).unwrap(), beneficiary);
    }

    #[test]
    fn test_read_registry_beneficiary_rejects_short_or_zero() {
        assert!(read_registry_beneficiary(&[0u8; 40]).is_err());

        // beneficiary bytes all zero
        let data = vec![0u8; 105 + 8];
        assert!(read_registry_beneficiary(&data).is_err());
    }

    #[test]
    fn test_sweepable_lamports() {
        assert_eq!(sweepable_lamports(5_000_000, 1_500_000), 3_500_000);
        assert_eq!(sweepable_lamports(1_500_000, 1_500_000), 0);
        // never underflows below the rent floor
        assert_eq!(sweepable_lamports(1_000_000, 1_500_000), 0);
    }
}
