pub mod initialize_marketplace;
pub mod update_marketplace_fee;
pub mod list_nft;
pub mod update_listing_price;
pub mod cancel_listing;
pub mod buy_nft;

pub use initialize_marketplace::*;
pub use update_marketplace_fee::*;
pub use list_nft::*;
pub use update_listing_price::*;
pub use cancel_listing::*;
pub use buy_nft::*;
