use anchor_lang::prelude::*;
use crate::constants::BPS_DENOMINATOR;
use crate::errors::MarketplaceError;

/// How one sale price is divided between the marketplace admin and the seller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaleSplit {
    pub fee: u64,
    pub seller_proceeds: u64,
}

pub fn safe_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(MarketplaceError::ArithmeticOverflow.into())
}

/// floor(amount * fee_bps / 10_000). The product is taken in u128 so every
/// u64 price can be settled; a result wider than u64 is rejected.
pub fn calculate_fee(amount: u64, fee_bps: u16) -> Result<u64> {
    let fee = (amount as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(MarketplaceError::ArithmeticOverflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(MarketplaceError::ArithmeticOverflow)?;
    u64::try_from(fee).map_err(|_| error!(MarketplaceError::ArithmeticOverflow))
}

pub fn split_sale(price: u64, fee_bps: u16) -> Result<SaleSplit> {
    let fee = calculate_fee(price, fee_bps)?;
    let seller_proceeds = safe_sub(price, fee)?;
    Ok(SaleSplit { fee, seller_proceeds })
}
