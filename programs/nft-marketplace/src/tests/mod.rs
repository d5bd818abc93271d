mod snapshot_tests;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use crate::errors::MarketplaceError;

pub(crate) fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: MarketplaceError) {
    assert_eq!(result.unwrap_err(), Error::from(expected));
}
