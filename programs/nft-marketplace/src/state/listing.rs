use crate::constants::LISTING_VERSION;
use crate::errors::MarketplaceError;
use anchor_lang::prelude::*;

/// Lifecycle tag of a listing record. `Closed` is terminal for one listing
/// instance; relisting the mint reopens the same account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum ListingState {
    #[default]
    Uninitialized,
    Active,
    Closed,
}

#[account]
#[derive(InitSpace, Default, Debug, PartialEq)]
pub struct Listing {
    pub version: u8,               // 1 byte
    pub state: ListingState,       // 1 byte
    pub seller: Pubkey,            // 32 bytes - owner of the NFT when listed
    pub nft_mint: Pubkey,          // 32 bytes
    pub marketplace: Pubkey,       // 32 bytes - config whose fee applies
    pub price: u64,                // 8 bytes - lamports
    pub listed_at: i64,            // 8 bytes - Unix timestamp
    pub closed_at: i64,            // 8 bytes - Unix timestamp, 0 while active
    pub bump: u8,                  // 1 byte
    pub escrow_bump: u8,           // 1 byte
}

impl Listing {
    pub const SIZE: usize = 1 + 1 + 32 + 32 + 32 + 8 + 8 + 8 + 1 + 1;

    pub fn is_active(&self) -> bool {
        self.state == ListingState::Active
    }

    pub fn check_version(&self) -> Result<()> {
        if self.state != ListingState::Uninitialized {
            require!(
                self.version == LISTING_VERSION,
                MarketplaceError::UnsupportedAccountVersion
            );
        }
        Ok(())
    }

    /// Writes a new active listing over a fresh or closed record.
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        &mut self,
        seller: Pubkey,
        nft_mint: Pubkey,
        marketplace: Pubkey,
        price: u64,
        now: i64,
        bump: u8,
        escrow_bump: u8,
    ) -> Result<()> {
        require!(price > 0, MarketplaceError::InvalidPrice);
        self.check_version()?;
        require!(!self.is_active(), MarketplaceError::AlreadyListed);

        *self = Listing {
            version: LISTING_VERSION,
            state: ListingState::Active,
            seller,
            nft_mint,
            marketplace,
            price,
            listed_at: now,
            closed_at: 0,
            bump,
            escrow_bump,
        };
        Ok(())
    }

    pub fn ensure_active(&self) -> Result<()> {
        self.check_version()?;
        match self.state {
            ListingState::Active => Ok(()),
            ListingState::Uninitialized => err!(MarketplaceError::NotFound),
            ListingState::Closed => err!(MarketplaceError::NotActive),
        }
    }

    pub fn ensure_seller(&self, caller: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.seller, MarketplaceError::Unauthorized);
        Ok(())
    }

    pub fn ensure_purchasable(&self, buyer: Pubkey) -> Result<()> {
        self.ensure_active()?;
        require_keys_neq!(buyer, self.seller, MarketplaceError::CannotBuyOwnListing);
        Ok(())
    }

    pub fn update_price(&mut self, caller: Pubkey, new_price: u64) -> Result<()> {
        require!(new_price > 0, MarketplaceError::InvalidPrice);
        self.ensure_active()?;
        self.ensure_seller(caller)?;
        self.price = new_price;
        Ok(())
    }

    pub fn deactivate(&mut self, now: i64) -> Result<()> {
        self.ensure_active()?;
        self.state = ListingState::Closed;
        self.closed_at = now;
        Ok(())
    }
}
