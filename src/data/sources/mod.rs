//! Remote rate sources
//!
//! Each source issues one request per currency per run. Results are only
//! combined after every fetch succeeds, so sources keep no shared state.

pub mod nbp;

pub use nbp::NbpRateSource;

use crate::currency::Currency;
use crate::data::CurrencySeries;
use crate::error::Result;
use chrono::NaiveDate;

/// Trait for remote daily-rate sources
pub trait RateSource: Send + Sync {
    /// Fetch one currency's daily mid-rate series against the base currency
    /// for an inclusive date window
    fn fetch(
        &self,
        currency: Currency,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl std::future::Future<Output = Result<CurrencySeries>> + Send;

    /// Get the source name
    fn name(&self) -> &str;
}
