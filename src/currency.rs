//! Currency codes and pair labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies known to the monitor.
///
/// Codes are kept lowercase because that is how the NBP API addresses them
/// and how the table labels its columns (`eur/pln`, `eur/usd`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Euro
    Eur,
    /// US Dollar
    Usd,
    /// Swiss Franc
    Chf,
    /// Polish Zloty
    Pln,
}

/// The base currency all fetched rates are quoted against.
pub const BASE_CURRENCY: Currency = Currency::Pln;

/// Currencies fetched from the remote source, in fetch order. The first
/// entry also supplies the table's date column.
pub const FETCHED_CURRENCIES: [Currency; 3] = [Currency::Eur, Currency::Usd, Currency::Chf];

/// Cross-rates derived once the fetched columns are populated, in
/// derivation order: (numerator, denominator) over their base-currency rates.
pub const CROSS_RATES: [(Currency, Currency); 2] = [
    (Currency::Eur, Currency::Usd),
    (Currency::Chf, Currency::Usd),
];

impl Currency {
    /// Lowercase code as the NBP API and column labels use it
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "eur",
            Currency::Usd => "usd",
            Currency::Chf => "chf",
            Currency::Pln => "pln",
        }
    }

    /// Parse from a code, case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "eur" => Some(Currency::Eur),
            "usd" => Some(Currency::Usd),
            "chf" => Some(Currency::Chf),
            "pln" => Some(Currency::Pln),
            _ => None,
        }
    }

    /// Column label for this currency quoted against `quote`, e.g. `eur/pln`
    pub fn pair_label(&self, quote: Currency) -> String {
        format!("{}/{}", self.code(), quote.code())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::Eur.code(), "eur");
        assert_eq!(Currency::Usd.code(), "usd");
        assert_eq!(Currency::Pln.code(), "pln");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::Usd));
        assert_eq!(Currency::from_code("USD"), Some(Currency::Usd));
        assert_eq!(Currency::from_code("xyz"), None);
    }

    #[test]
    fn test_pair_label() {
        assert_eq!(Currency::Eur.pair_label(BASE_CURRENCY), "eur/pln");
        assert_eq!(Currency::Chf.pair_label(Currency::Usd), "chf/usd");
    }

    #[test]
    fn test_fetched_order() {
        // The first fetched currency supplies the date column, so the order
        // is part of the contract.
        assert_eq!(FETCHED_CURRENCIES[0], Currency::Eur);
        assert_eq!(FETCHED_CURRENCIES.len(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Currency::Chf), "chf");
    }
}
