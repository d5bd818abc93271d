use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{ESCROW_SEED, LISTING_SEED, MARKETPLACE_SEED, MARKETPLACE_VERSION};
use crate::errors::MarketplaceError;
use crate::state::{Listing, MarketplaceConfig};
use crate::utils::escrow;

#[derive(Accounts)]
pub struct CancelListing<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKETPLACE_SEED, marketplace.admin.as_ref()],
        bump = marketplace.bump,
        constraint = marketplace.version == MARKETPLACE_VERSION @ MarketplaceError::UnsupportedAccountVersion,
    )]
    pub marketplace: Account<'info, MarketplaceConfig>,

    #[account(
        mut,
        seeds = [LISTING_SEED, nft_mint.key().as_ref()],
        bump = listing.bump,
        has_one = marketplace @ MarketplaceError::InvalidMarketplace,
    )]
    pub listing: Account<'info, Listing>,

    pub nft_mint: Account<'info, Mint>,

    /// CHECK: address is pinned by the seeds; it only holds a token account
    /// while the listing is active, and `escrow::release` loads it
    #[account(
        mut,
        seeds = [ESCROW_SEED, nft_mint.key().as_ref()],
        bump = listing.escrow_bump,
    )]
    pub escrow_token_account: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = seller,
        associated_token::mint = nft_mint,
        associated_token::authority = seller,
    )]
    pub seller_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn cancel_listing(ctx: Context<CancelListing>) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    let listing = &ctx.accounts.listing;
    listing.ensure_active()?;
    listing.ensure_seller(ctx.accounts.seller.key())?;

    escrow::release(
        &ctx.accounts.token_program,
        &ctx.accounts.nft_mint,
        &ctx.accounts.escrow_token_account.to_account_info(),
        &ctx.accounts.seller_token_account,
        &ctx.accounts.seller.to_account_info(),
        &ctx.accounts.listing,
    )?;

    let listing = &mut ctx.accounts.listing;
    listing.deactivate(current_time)?;
    ctx.accounts.marketplace.record_delisting()?;

    emit!(ListingCancelled {
        seller: listing.seller,
        nft_mint: listing.nft_mint,
        timestamp: current_time,
    });

    msg!("Listing cancelled for NFT: {}", listing.nft_mint);

    Ok(())
}

#[event]
pub struct ListingCancelled {
    pub seller: Pubkey,
    pub nft_mint: Pubkey,
    pub timestamp: i64,
}
