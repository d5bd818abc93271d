use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{ESCROW_SEED, LISTING_SEED, MARKETPLACE_SEED, MARKETPLACE_VERSION};
use crate::errors::MarketplaceError;
use crate::state::{Listing, MarketplaceConfig};
use crate::utils::escrow;

#[derive(Accounts)]
pub struct ListNft<'info> {
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
        constraint = nft_mint.decimals == 0 @ MarketplaceError::InvalidMint,
        constraint = nft_mint.supply == 1 @ MarketplaceError::InvalidMint,
    )]
    pub nft_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = seller_token_account.mint == nft_mint.key() @ MarketplaceError::InvalidMint,
        constraint = seller_token_account.owner == seller.key() @ MarketplaceError::NotTokenOwner,
    )]
    pub seller_token_account: Account<'info, TokenAccount>,

    // A mint keeps one listing address for life; a closed record is reopened
    #[account(
        init_if_needed,
        payer = seller,
        space = 8 + Listing::INIT_SPACE,
        seeds = [LISTING_SEED, nft_mint.key().as_ref()],
        bump,
    )]
    pub listing: Account<'info, Listing>,

    #[account(
        init_if_needed,
        payer = seller,
        token::mint = nft_mint,
        token::authority = listing,
        seeds = [ESCROW_SEED, nft_mint.key().as_ref()],
        bump,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn list_nft(ctx: Context<ListNft>, price: u64) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let seller = ctx.accounts.seller.key();
    let nft_mint = ctx.accounts.nft_mint.key();
    let marketplace_key = ctx.accounts.marketplace.key();

    ctx.accounts.listing.open(
        seller,
        nft_mint,
        marketplace_key,
        price,
        current_time,
        ctx.bumps.listing,
        ctx.bumps.escrow_token_account,
    )?;
    ctx.accounts.marketplace.record_listing()?;

    escrow::deposit(
        &ctx.accounts.token_program,
        &ctx.accounts.nft_mint,
        &ctx.accounts.seller_token_account,
        &ctx.accounts.escrow_token_account,
        &ctx.accounts.seller,
    )?;

    emit!(NftListed {
        marketplace: marketplace_key,
        seller,
        nft_mint,
        price,
        timestamp: current_time,
    });

    msg!("NFT listed for sale: {} at price: {}", nft_mint, price);

    Ok(())
}

#[event]
pub struct NftListed {
    pub marketplace: Pubkey,
    pub seller: Pubkey,
    pub nft_mint: Pubkey,
    pub price: u64,
    pub timestamp: i64,
}
