pub mod derivation;
pub mod escrow;
pub mod fees;

pub use derivation::*;
pub use fees::*;
