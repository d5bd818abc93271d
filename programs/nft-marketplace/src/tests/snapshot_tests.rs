use std::collections::HashMap;

use anchor_lang::prelude::*;
use super::assert_error;
use crate::constants::LISTING_VERSION;
use crate::errors::MarketplaceError;
use crate::snapshot::*;
use crate::state::{Listing, MarketplaceConfig};
use crate::utils::{find_listing_address, find_marketplace_address};

fn encode<T: AccountSerialize>(account: &T) -> Vec<u8> {
    let mut data = Vec::new();
    account.try_serialize(&mut data).unwrap();
    data
}

fn listing_for(mint: Pubkey, active: bool) -> Listing {
    let mut listing = Listing::default();
    listing
        .open(Pubkey::new_unique(), mint, Pubkey::new_unique(), 42, 1000, 255, 254)
        .unwrap();
    if !active {
        listing.deactivate(2000).unwrap();
    }
    listing
}

#[test]
fn test_get_config() {
    let admin = Pubkey::new_unique();
    let mut config = MarketplaceConfig::default();
    config.initialize(admin, 250, 255).unwrap();

    let mut accounts = HashMap::new();
    accounts.insert(find_marketplace_address(&admin, &crate::ID).0, encode(&config));
    let fetch = |address: &Pubkey| accounts.get(address).cloned();

    assert_eq!(get_config(fetch, &admin, &crate::ID).unwrap(), config);
    assert_error(
        get_config(fetch, &Pubkey::new_unique(), &crate::ID),
        MarketplaceError::NotFound,
    );
}

#[test]
fn test_get_listing() {
    let mint = Pubkey::new_unique();
    let listing = listing_for(mint, true);

    let mut accounts = HashMap::new();
    accounts.insert(find_listing_address(&mint, &crate::ID).0, encode(&listing));
    let fetch = |address: &Pubkey| accounts.get(address).cloned();

    assert_eq!(get_listing(fetch, &mint, &crate::ID).unwrap(), listing);
    assert_error(
        get_listing(fetch, &Pubkey::new_unique(), &crate::ID),
        MarketplaceError::NotFound,
    );
}

#[test]
fn test_decode_rejects_wrong_type_and_version() {
    let mint = Pubkey::new_unique();
    let listing = listing_for(mint, true);
    let data = encode(&listing);

    // A listing is never mistaken for a config
    assert!(decode_marketplace(&data).is_err());

    let mut future = listing.clone();
    future.version = LISTING_VERSION + 1;
    assert_error(decode_listing(&encode(&future)), MarketplaceError::UnsupportedAccountVersion);

    let uninitialized = encode(&MarketplaceConfig::default());
    assert_error(
        decode_marketplace(&uninitialized),
        MarketplaceError::UnsupportedAccountVersion,
    );
}

#[test]
fn test_active_listings_filters_bulk_dump() {
    let admin = Pubkey::new_unique();
    let mut config = MarketplaceConfig::default();
    config.initialize(admin, 250, 255).unwrap();

    let open_mint = Pubkey::new_unique();
    let sold_mint = Pubkey::new_unique();
    let dump = vec![
        (Pubkey::new_unique(), encode(&config)),
        (Pubkey::new_unique(), encode(&listing_for(open_mint, true))),
        (Pubkey::new_unique(), encode(&listing_for(sold_mint, false))),
        (Pubkey::new_unique(), vec![0u8; 3]),
    ];

    let active = active_listings(dump.iter().map(|(address, data)| (*address, data.as_slice())));

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].0, dump[1].0);
    assert_eq!(active[0].1.nft_mint, open_mint);
}
