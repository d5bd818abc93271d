use anchor_lang::prelude::*;
use crate::constants::{ESCROW_SEED, LISTING_SEED, MARKETPLACE_SEED};

// Every account the program manages lives at one of these addresses. They are
// pure functions of the seeds, so any client can recompute and verify them.

pub fn marketplace_seeds(admin: &Pubkey) -> [&[u8]; 2] {
    [MARKETPLACE_SEED, admin.as_ref()]
}

pub fn listing_seeds(nft_mint: &Pubkey) -> [&[u8]; 2] {
    [LISTING_SEED, nft_mint.as_ref()]
}

pub fn escrow_seeds(nft_mint: &Pubkey) -> [&[u8]; 2] {
    [ESCROW_SEED, nft_mint.as_ref()]
}

pub fn find_marketplace_address(admin: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&marketplace_seeds(admin), program_id)
}

pub fn find_listing_address(nft_mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&listing_seeds(nft_mint), program_id)
}

pub fn find_escrow_address(nft_mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&escrow_seeds(nft_mint), program_id)
}
