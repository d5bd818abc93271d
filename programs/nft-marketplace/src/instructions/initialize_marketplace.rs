use anchor_lang::prelude::*;
use crate::constants::MARKETPLACE_SEED;
use crate::state::MarketplaceConfig;

#[derive(Accounts)]
pub struct InitializeMarketplace<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    // An existing config reaches the handler, which rejects it
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + MarketplaceConfig::INIT_SPACE,
        seeds = [MARKETPLACE_SEED, admin.key().as_ref()],
        bump,
    )]
    pub marketplace: Account<'info, MarketplaceConfig>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_marketplace(ctx: Context<InitializeMarketplace>, fee_bps: u16) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let marketplace = &mut ctx.accounts.marketplace;
    marketplace.initialize(admin, fee_bps, ctx.bumps.marketplace)?;

    emit!(MarketplaceInitialized {
        marketplace: marketplace.key(),
        admin,
        fee_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Marketplace initialized with admin: {}, fee: {}bps", admin, fee_bps);

    Ok(())
}

#[event]
pub struct MarketplaceInitialized {
    pub marketplace: Pubkey,
    pub admin: Pubkey,
    pub fee_bps: u16,
    pub timestamp: i64,
}
