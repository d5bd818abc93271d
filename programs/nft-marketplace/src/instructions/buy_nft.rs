use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{ESCROW_SEED, LISTING_SEED, MARKETPLACE_SEED, MARKETPLACE_VERSION};
use crate::errors::MarketplaceError;
use crate::state::{Listing, MarketplaceConfig};
use crate::utils::{escrow, split_sale};

#[derive(Accounts)]
pub struct BuyNft<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

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
        has_one = seller @ MarketplaceError::InvalidSeller,
    )]
    pub listing: Account<'info, Listing>,

    /// Receives the sale proceeds
    #[account(mut)]
    pub seller: SystemAccount<'info>,

    /// Receives the marketplace fee
    #[account(
        mut,
        address = marketplace.admin @ MarketplaceError::InvalidAdmin,
    )]
    pub admin: SystemAccount<'info>,

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
        payer = buyer,
        associated_token::mint = nft_mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn buy_nft(ctx: Context<BuyNft>) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let buyer = ctx.accounts.buyer.key();

    // Every check runs before the first transfer
    let listing = &ctx.accounts.listing;
    listing.ensure_purchasable(buyer)?;
    let price = listing.price;
    let split = split_sale(price, ctx.accounts.marketplace.fee_bps)?;
    require!(
        ctx.accounts.buyer.lamports() >= price,
        MarketplaceError::InsufficientFunds
    );

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.seller.to_account_info(),
            },
        ),
        split.seller_proceeds,
    )?;

    if split.fee > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.admin.to_account_info(),
                },
            ),
            split.fee,
        )?;
    }

    escrow::release(
        &ctx.accounts.token_program,
        &ctx.accounts.nft_mint,
        &ctx.accounts.escrow_token_account.to_account_info(),
        &ctx.accounts.buyer_token_account,
        &ctx.accounts.seller.to_account_info(),
        &ctx.accounts.listing,
    )?;

    let listing = &mut ctx.accounts.listing;
    listing.deactivate(current_time)?;
    ctx.accounts.marketplace.record_sale(price)?;

    emit!(NftSold {
        marketplace: listing.marketplace,
        buyer,
        seller: listing.seller,
        nft_mint: listing.nft_mint,
        price,
        marketplace_fee: split.fee,
        seller_proceeds: split.seller_proceeds,
        timestamp: current_time,
    });

    msg!("NFT purchased: {} for {}", listing.nft_mint, price);

    Ok(())
}

#[event]
pub struct NftSold {
    pub marketplace: Pubkey,
    pub buyer: Pubkey,
    pub seller: Pubkey,
    pub nft_mint: Pubkey,
    pub price: u64,
    pub marketplace_fee: u64,
    pub seller_proceeds: u64,
    pub timestamp: i64,
}
