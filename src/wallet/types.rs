//! Types used throughout the wallet.

/// Number of kopecks in one ruble.
/// Amounts are kept as whole kopecks so totals never drift.
pub const DECIMAL_PRECISION: Amount = 100;

/// Amount type, representing a fixed-point monetary value in kopecks.
pub type Amount = i64;

/// Renders an amount in rubles with exactly two decimal digits, e.g. `124.12`.
pub fn format_amount(amount: Amount) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let precision = DECIMAL_PRECISION as u64;
    format!("{sign}{}.{:02}", abs / precision, abs % precision)
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12412), "124.12");
        assert_eq!(format_amount(350), "3.50");
        assert_eq!(format_amount(2452), "24.52");
        assert_eq!(format_amount(0), "0.00");
        assert_eq!(format_amount(7), "0.07");
        assert_eq!(format_amount(-150), "-1.50");
    }
}
