use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod snapshot;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("BYTa99VP9tK6oKsYXC7UPeo268CJMyXs9mWbu94yBHwn");

#[program]
pub mod nft_marketplace {
    use super::*;

    pub fn initialize_marketplace(
        ctx: Context<InitializeMarketplace>,
        fee_bps: u16,
    ) -> Result<()> {
        instructions::initialize_marketplace::initialize_marketplace(ctx, fee_bps)
    }

    pub fn update_marketplace_fee(
        ctx: Context<UpdateMarketplaceFee>,
        new_fee_bps: u16,
    ) -> Result<()> {
        instructions::update_marketplace_fee::update_marketplace_fee(ctx, new_fee_bps)
    }

    pub fn list_nft(ctx: Context<ListNft>, price: u64) -> Result<()> {
        instructions::list_nft::list_nft(ctx, price)
    }

    pub fn update_listing_price(ctx: Context<UpdateListingPrice>, new_price: u64) -> Result<()> {
        instructions::update_listing_price::update_listing_price(ctx, new_price)
    }

    pub fn cancel_listing(ctx: Context<CancelListing>) -> Result<()> {
        instructions::cancel_listing::cancel_listing(ctx)
    }

    pub fn buy_nft(ctx: Context<BuyNft>) -> Result<()> {
        instructions::buy_nft::buy_nft(ctx)
    }
}


#[cfg(test)]
mod tests;
