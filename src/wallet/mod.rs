//! Wallet module for handling the currency catalog, holdings and reports.
mod currency;
mod error;
mod purse;
mod types;

pub use currency::*;
pub use error::*;
pub use purse::*;
pub use types::*;
