use anchor_lang::prelude::*;
use crate::constants::{MARKETPLACE_SEED, MARKETPLACE_VERSION};
use crate::errors::MarketplaceError;
use crate::state::MarketplaceConfig;

#[derive(Accounts)]
pub struct UpdateMarketplaceFee<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKETPLACE_SEED, marketplace.admin.as_ref()],
        bump = marketplace.bump,
        constraint = marketplace.version == MARKETPLACE_VERSION @ MarketplaceError::UnsupportedAccountVersion,
    )]
    pub marketplace: Account<'info, MarketplaceConfig>,
}

pub fn update_marketplace_fee(ctx: Context<UpdateMarketplaceFee>, new_fee_bps: u16) -> Result<()> {
    let marketplace = &mut ctx.accounts.marketplace;
    let old_fee_bps = marketplace.fee_bps;
    marketplace.update_fee(ctx.accounts.admin.key(), new_fee_bps)?;

    emit!(MarketplaceFeeUpdated {
        marketplace: marketplace.key(),
        old_fee_bps,
        new_fee_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Marketplace fee updated from {}bps to {}bps", old_fee_bps, new_fee_bps);

    Ok(())
}

#[event]
pub struct MarketplaceFeeUpdated {
    pub marketplace: Pubkey,
    pub old_fee_bps: u16,
    pub new_fee_bps: u16,
    pub timestamp: i64,
}
