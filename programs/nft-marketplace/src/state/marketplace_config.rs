use anchor_lang::prelude::*;
use crate::constants::{MARKETPLACE_VERSION, MAX_FEE_BPS};
use crate::errors::MarketplaceError;

/// Fee schedule and aggregate counters for one administrator.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq)]
pub struct MarketplaceConfig {
    pub version: u8,                 // 1 byte - 0 until initialized
    pub admin: Pubkey,               // 32 bytes
    pub fee_bps: u16,                // 2 bytes - fee per sale (basis points)
    pub total_active_listings: u64,  // 8 bytes
    pub total_sales: u64,            // 8 bytes
    pub total_volume: u64,           // 8 bytes - settled lamports
    pub bump: u8,                    // 1 byte
}

impl MarketplaceConfig {
    pub const SIZE: usize = 1 + 32 + 2 + 8 + 8 + 8 + 1;

    pub fn validate_fee(fee_bps: u16) -> Result<()> {
        require!(fee_bps <= MAX_FEE_BPS, MarketplaceError::InvalidFee);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.version != 0
    }

    pub fn check_version(&self) -> Result<()> {
        require!(
            self.version == MARKETPLACE_VERSION,
            MarketplaceError::UnsupportedAccountVersion
        );
        Ok(())
    }

    /// Sets up a freshly allocated account. An account that already carries
    /// a version was initialized before and is left untouched.
    pub fn initialize(&mut self, admin: Pubkey, fee_bps: u16, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), MarketplaceError::AlreadyInitialized);
        Self::validate_fee(fee_bps)?;

        *self = MarketplaceConfig {
            version: MARKETPLACE_VERSION,
            admin,
            fee_bps,
            total_active_listings: 0,
            total_sales: 0,
            total_volume: 0,
            bump,
        };
        Ok(())
    }

    pub fn update_fee(&mut self, caller: Pubkey, fee_bps: u16) -> Result<()> {
        require_keys_eq!(caller, self.admin, MarketplaceError::Unauthorized);
        Self::validate_fee(fee_bps)?;
        self.fee_bps = fee_bps;
        Ok(())
    }

    pub fn record_listing(&mut self) -> Result<()> {
        self.total_active_listings = self
            .total_active_listings
            .checked_add(1)
            .ok_or(MarketplaceError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_delisting(&mut self) -> Result<()> {
        self.total_active_listings = self
            .total_active_listings
            .checked_sub(1)
            .ok_or(MarketplaceError::ArithmeticOverflow)?;
        Ok(())
    }

    /// A sale closes one active listing and adds its price to the volume.
    pub fn record_sale(&mut self, price: u64) -> Result<()> {
        let total_volume = self
            .total_volume
            .checked_add(price)
            .ok_or(MarketplaceError::ArithmeticOverflow)?;
        let total_sales = self
            .total_sales
            .checked_add(1)
            .ok_or(MarketplaceError::ArithmeticOverflow)?;

        self.record_delisting()?;
        self.total_volume = total_volume;
        self.total_sales = total_sales;
        Ok(())
    }
}
