//! Read-only decoding of raw account snapshots.
//!
//! Clients fetch account bytes straight from the ledger and never go through
//! the program to read state. These helpers give them the same discriminator
//! and schema-version validation the program applies to its own accounts.

use anchor_lang::prelude::*;
use crate::errors::MarketplaceError;
use crate::state::{Listing, MarketplaceConfig};
use crate::utils::{find_listing_address, find_marketplace_address};

pub fn decode_marketplace(data: &[u8]) -> Result<MarketplaceConfig> {
    let config = MarketplaceConfig::try_deserialize(&mut &data[..])?;
    config.check_version()?;
    Ok(config)
}

pub fn decode_listing(data: &[u8]) -> Result<Listing> {
    let listing = Listing::try_deserialize(&mut &data[..])?;
    listing.check_version()?;
    Ok(listing)
}

/// Looks up the config of `admin` through `fetch`, which returns the raw data
/// stored at an address or `None` when no account exists there.
pub fn get_config<F>(fetch: F, admin: &Pubkey, program_id: &Pubkey) -> Result<MarketplaceConfig>
where
    F: Fn(&Pubkey) -> Option<Vec<u8>>,
{
    let (address, _) = find_marketplace_address(admin, program_id);
    let data = fetch(&address).ok_or(MarketplaceError::NotFound)?;
    decode_marketplace(&data)
}

pub fn get_listing<F>(fetch: F, nft_mint: &Pubkey, program_id: &Pubkey) -> Result<Listing>
where
    F: Fn(&Pubkey) -> Option<Vec<u8>>,
{
    let (address, _) = find_listing_address(nft_mint, program_id);
    let data = fetch(&address).ok_or(MarketplaceError::NotFound)?;
    decode_listing(&data)
}

/// Filters a bulk dump of program accounts down to the listings that are for
/// sale. Accounts of other types are skipped.
pub fn active_listings<'a, I>(accounts: I) -> Vec<(Pubkey, Listing)>
where
    I: IntoIterator<Item = (Pubkey, &'a [u8])>,
{
    accounts
        .into_iter()
        .filter_map(|(address, data)| decode_listing(data).ok().map(|listing| (address, listing)))
        .filter(|(_, listing)| listing.is_active())
        .collect()
}
