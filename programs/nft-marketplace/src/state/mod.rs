pub mod listing;
pub mod marketplace_config;

pub use listing::*;
pub use marketplace_config::*;
