//! Errors raised by wallet operations.
use thiserror::Error;

use crate::wallet::Currency;

fn join_names(money: &[Currency]) -> String {
    money
        .iter()
        .map(|currency| currency.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur while withdrawing from a wallet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Not every requested unit was held. Carries the units that were short,
    /// one entry per missing unit.
    #[error("Missed money: {}", join_names(.0))]
    OutOfMoney(Vec<Currency>),
}

impl WalletError {
    /// The denominations that could not be withdrawn.
    pub fn missed_money(&self) -> &[Currency] {
        match self {
            WalletError::OutOfMoney(missed) => missed,
        }
    }
}
