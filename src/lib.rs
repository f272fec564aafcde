//! # kantor
//!
//! An exchange-rate monitor for the NBP (Narodowy Bank Polski) web API.
//!
//! kantor fetches daily mid-rates for a small set of currencies quoted against
//! PLN over a rolling window, aligns them by date into a single [`RateTable`],
//! derives cross-rate columns (EUR/USD, CHF/USD), and exposes the table to CSV
//! export and descriptive statistics.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kantor::prelude::*;
//! use chrono::{Duration, Local};
//!
//! # async fn demo() -> Result<()> {
//! let end = Local::now().date_naive();
//! let start = end - Duration::days(30);
//!
//! let source = NbpRateSource::new()?;
//! let series = source.fetch_window(&FETCHED_CURRENCIES, start, end).await?;
//!
//! let table = RateTableBuilder::new()
//!     .derive_cross_rate(Currency::Eur, Currency::Usd)
//!     .derive_cross_rate(Currency::Chf, Currency::Usd)
//!     .build(series)?;
//!
//! let stats = SummaryStats::for_column(&table, "eur/usd")?;
//! println!("{}", stats);
//! # Ok(())
//! # }
//! ```
//!
//! [`RateTable`]: crate::data::table::RateTable

pub mod analysis;
pub mod currency;
pub mod data;
pub mod error;
pub mod export;
pub mod menu;
pub mod selection;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::analysis::SummaryStats;
    pub use crate::currency::{Currency, BASE_CURRENCY, CROSS_RATES, FETCHED_CURRENCIES};
    pub use crate::data::sources::{NbpRateSource, RateSource};
    pub use crate::data::table::{RateTable, RateTableBuilder};
    pub use crate::data::{CurrencySeries, RateObservation};
    pub use crate::error::{KantorError, Result};
    pub use crate::selection::SelectionSet;
}
