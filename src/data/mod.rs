//! Rate observations, per-currency series and the aligned table

pub mod sources;
pub mod table;

pub use table::{RateTable, RateTableBuilder};

use crate::currency::Currency;
use chrono::NaiveDate;
use serde::Deserialize;

/// One currency's quoted mid-rate for one date.
///
/// Deserializes directly from an entry of the NBP `rates` array.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RateObservation {
    /// Effective date of the quote
    #[serde(rename = "effectiveDate")]
    pub date: NaiveDate,
    /// Daily mid-point rate (no bid/ask spread)
    pub mid: f64,
}

/// Ordered sequence of observations for one currency against the base.
///
/// The order is whatever the remote source returned for the window
/// (ascending effective date); it is not re-sorted here.
#[derive(Debug, Clone)]
pub struct CurrencySeries {
    pub currency: Currency,
    pub observations: Vec<RateObservation>,
}

impl CurrencySeries {
    pub fn new(currency: Currency, observations: Vec<RateObservation>) -> Self {
        Self {
            currency,
            observations,
        }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.observations.iter().map(|o| o.date)
    }

    pub fn mids(&self) -> impl Iterator<Item = f64> + '_ {
        self.observations.iter().map(|o| o.mid)
    }
}
