use anchor_lang::prelude::*;

#[error_code]
pub enum MarketplaceError {
    // Validation
    #[msg("Fee must be between 0 and 10000 basis points")]
    InvalidFee,

    #[msg("Invalid price - must be greater than 0")]
    InvalidPrice,

    #[msg("Seller cannot buy their own listing")]
    CannotBuyOwnListing,

    // Authorization
    #[msg("Unauthorized access")]
    Unauthorized,

    #[msg("Seller account does not match the listing")]
    InvalidSeller,

    #[msg("Admin account does not match the marketplace")]
    InvalidAdmin,

    #[msg("Marketplace does not match the listing")]
    InvalidMarketplace,

    // State conflicts
    #[msg("Marketplace is already initialized")]
    AlreadyInitialized,

    #[msg("NFT is already listed")]
    AlreadyListed,

    #[msg("Listing is not active")]
    NotActive,

    #[msg("Account not found")]
    NotFound,

    #[msg("Seller does not hold the NFT")]
    NotTokenOwner,

    #[msg("Token account is not for the listed mint")]
    InvalidMint,

    #[msg("Unsupported account version")]
    UnsupportedAccountVersion,

    // Resources
    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
