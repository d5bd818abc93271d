// Seeds
pub const MARKETPLACE_SEED: &[u8] = b"marketplace";
pub const LISTING_SEED: &[u8] = b"listing";
pub const ESCROW_SEED: &[u8] = b"escrow";

// Financial constants
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const MAX_FEE_BPS: u16 = 10_000;         // 100%
pub const NFT_AMOUNT: u64 = 1;

// Account schema versions, 0 is reserved for freshly allocated accounts
pub const MARKETPLACE_VERSION: u8 = 1;
pub const LISTING_VERSION: u8 = 1;
