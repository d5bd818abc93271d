use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Mint, Token, TokenAccount, TransferChecked};
use crate::constants::{LISTING_SEED, NFT_AMOUNT};
use crate::errors::MarketplaceError;
use crate::state::Listing;

// The escrow token account sits at [ESCROW_SEED, mint] and its authority is the
// listing PDA at [LISTING_SEED, mint]. It exists only while the listing is
// active: `list_nft` creates it, `release` empties and closes it. Only these two
// helpers move the NFT in or out of it, and both are called from inside a
// listing or settlement handler.

/// Moves the seller's single unit into escrow.
pub fn deposit<'info>(
    token_program: &Program<'info, Token>,
    nft_mint: &Account<'info, Mint>,
    owner_token_account: &Account<'info, TokenAccount>,
    escrow_token_account: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
) -> Result<()> {
    require!(escrow_token_account.amount == 0, MarketplaceError::AlreadyListed);
    require!(
        owner_token_account.amount == NFT_AMOUNT,
        MarketplaceError::NotTokenOwner
    );

    token::transfer_checked(
        CpiContext::new(
            token_program.to_account_info(),
            TransferChecked {
                from: owner_token_account.to_account_info(),
                mint: nft_mint.to_account_info(),
                to: escrow_token_account.to_account_info(),
                authority: owner.to_account_info(),
            },
        ),
        NFT_AMOUNT,
        nft_mint.decimals,
    )
}

/// Moves the escrowed unit to `recipient`, signing as the listing PDA, then
/// closes the escrow and returns its rent to `rent_destination`.
pub fn release<'info>(
    token_program: &Program<'info, Token>,
    nft_mint: &Account<'info, Mint>,
    escrow_token_account: &AccountInfo<'info>,
    recipient_token_account: &Account<'info, TokenAccount>,
    rent_destination: &AccountInfo<'info>,
    listing: &Account<'info, Listing>,
) -> Result<()> {
    listing.ensure_active()?;
    require!(
        escrowed_amount(escrow_token_account)? == NFT_AMOUNT,
        MarketplaceError::NotActive
    );

    let mint_key = nft_mint.key();
    let bump = [listing.bump];
    let listing_seeds: &[&[u8]] = &[LISTING_SEED, mint_key.as_ref(), &bump];
    let signer_seeds = &[listing_seeds];

    token::transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            TransferChecked {
                from: escrow_token_account.clone(),
                mint: nft_mint.to_account_info(),
                to: recipient_token_account.to_account_info(),
                authority: listing.to_account_info(),
            },
            signer_seeds,
        ),
        NFT_AMOUNT,
        nft_mint.decimals,
    )?;

    token::close_account(CpiContext::new_with_signer(
        token_program.to_account_info(),
        CloseAccount {
            account: escrow_token_account.clone(),
            destination: rent_destination.clone(),
            authority: listing.to_account_info(),
        },
        signer_seeds,
    ))
}

/// Balance held at the escrow address. A closed escrow holds nothing.
fn escrowed_amount(escrow_token_account: &AccountInfo) -> Result<u64> {
    if escrow_token_account.data_is_empty() {
        return Ok(0);
    }
    require_keys_eq!(
        *escrow_token_account.owner,
        token::ID,
        MarketplaceError::NotActive
    );
    let data = escrow_token_account.try_borrow_data()?;
    let escrow = TokenAccount::try_deserialize(&mut &data[..])?;
    Ok(escrow.amount)
}
