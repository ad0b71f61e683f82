//! Wallet holdings, withdrawal and reporting.
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::wallet::{
    Currency, WalletError,
    types::{Amount, format_amount},
};

/// Counts each denomination, returning the distinct ones in order of first appearance.
fn frequencies(money: &[Currency]) -> (Vec<Currency>, HashMap<Currency, usize>) {
    let mut order = Vec::new();
    let mut counts = HashMap::new();
    for &currency in money {
        let count = counts.entry(currency).or_insert(0);
        if *count == 0 {
            order.push(currency);
        }
        *count += 1;
    }
    (order, counts)
}

fn join_names<'a>(money: impl Iterator<Item = &'a Currency>) -> String {
    money
        .map(|currency| currency.name())
        .collect::<Vec<_>>()
        .join(",")
}

/// A named container of banknotes and coins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wallet {
    /// The owner's name, printed in reports.
    name: String,

    /// Held units in deposit order.
    money: Vec<Currency>,
}

impl Wallet {
    /// Creates an empty wallet for the given owner.
    pub fn new(name: impl Into<String>) -> Self {
        Wallet {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every held unit in deposit order.
    pub fn money(&self) -> &[Currency] {
        &self.money
    }

    /// Held banknotes in deposit order.
    pub fn banknotes(&self) -> Vec<Currency> {
        self.money.iter().copied().filter(|c| c.is_banknote()).collect()
    }

    /// Held coins in deposit order.
    pub fn coins(&self) -> Vec<Currency> {
        self.money.iter().copied().filter(|c| c.is_coin()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.money.is_empty()
    }

    /// How many units of `currency` are held.
    pub fn count_of(&self, currency: Currency) -> usize {
        self.money.iter().filter(|&&c| c == currency).count()
    }

    /// Sum of all held face values, in kopecks.
    pub fn total(&self) -> Amount {
        self.money.iter().map(|c| c.face_value()).sum()
    }

    /// Appends the given units, keeping their order.
    pub fn put_money(&mut self, items: &[Currency]) {
        self.money.extend_from_slice(items);
        debug!(
            owner = %self.name,
            units = items.len(),
            total = %format_amount(self.total()),
            "money deposited"
        );
    }

    /// Returns true if every requested unit is held, counting duplicates.
    pub fn has_money(&self, requested: &[Currency]) -> bool {
        let (_, wanted) = frequencies(requested);
        let (_, held) = frequencies(&self.money);
        wanted
            .iter()
            .all(|(currency, &count)| held.get(currency).copied().unwrap_or(0) >= count)
    }

    /// Removes one held unit per requested unit.
    /// Returns an error listing every missing unit if the request cannot be fully met,
    /// in which case the wallet is left untouched.
    pub fn take_money(&mut self, requested: &[Currency]) -> Result<(), WalletError> {
        let (order, mut wanted) = frequencies(requested);
        let (_, held) = frequencies(&self.money);

        let missed: Vec<Currency> = order
            .iter()
            .flat_map(|currency| {
                let available = held.get(currency).copied().unwrap_or(0);
                let short = wanted[currency].saturating_sub(available);
                std::iter::repeat_n(*currency, short)
            })
            .collect();

        if !missed.is_empty() {
            warn!(owner = %self.name, ?missed, "withdrawal rejected");
            return Err(WalletError::OutOfMoney(missed));
        }

        self.money.retain(|currency| match wanted.get_mut(currency) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                false
            }
            _ => true,
        });
        debug!(
            owner = %self.name,
            units = requested.len(),
            total = %format_amount(self.total()),
            "money taken"
        );
        Ok(())
    }

    /// Owner and total only.
    pub fn get_short_report(&self) -> String {
        format!(
            "Wallet: {}\nTotal: {}",
            self.name,
            format_amount(self.total())
        )
    }

    /// Owner, total, and the held banknotes and coins in deposit order.
    /// A line is printed even when its list is empty.
    pub fn get_full_report(&self) -> String {
        format!(
            "{}\nBanknotes: {}\nCoins: {}",
            self.get_short_report(),
            join_names(self.money.iter().filter(|c| c.is_banknote())),
            join_names(self.money.iter().filter(|c| c.is_coin())),
        )
    }
}
