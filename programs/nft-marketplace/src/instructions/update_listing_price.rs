use anchor_lang::prelude::*;
use crate::constants::LISTING_SEED;
use crate::state::Listing;

#[derive(Accounts)]
pub struct UpdateListingPrice<'info> {
    pub seller: Signer<'info>,

    #[account(
        mut,
        seeds = [LISTING_SEED, listing.nft_mint.as_ref()],
        bump = listing.bump,
    )]
    pub listing: Account<'info, Listing>,
}

pub fn update_listing_price(ctx: Context<UpdateListingPrice>, new_price: u64) -> Result<()> {
    let listing = &mut ctx.accounts.listing;
    let old_price = listing.price;
    listing.update_price(ctx.accounts.seller.key(), new_price)?;

    emit!(ListingPriceUpdated {
        seller: listing.seller,
        nft_mint: listing.nft_mint,
        old_price,
        new_price,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Listing price updated from {} to {}", old_price, new_price);

    Ok(())
}

#[event]
pub struct ListingPriceUpdated {
    pub seller: Pubkey,
    pub nft_mint: Pubkey,
    pub old_price: u64,
    pub new_price: u64,
    pub timestamp: i64,
}
