//! A cash wallet holding discrete ruble banknotes and coins.
pub mod wallet;
