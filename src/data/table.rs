//! Date-aligned rate table and its builder
//!
//! The table is built once per run, right after all fetches succeed, and is
//! read-only from then on. Columns live in a fixed order: fetched pairs in
//! fetch order, then derived cross-rate pairs in derivation order.

use crate::currency::{Currency, BASE_CURRENCY};
use crate::data::CurrencySeries;
use crate::error::{KantorError, Result};
use chrono::NaiveDate;
use hashbrown::HashMap;

/// Round to 4 decimal places. `f64::round` rounds half away from zero.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Immutable collection of named rate columns sharing one date column
#[derive(Debug, Clone)]
pub struct RateTable {
    dates: Vec<NaiveDate>,
    columns: Vec<(String, Vec<f64>)>,
    index: HashMap<String, usize>,
}

impl RateTable {
    pub fn num_rows(&self) -> usize {
        self.dates.len()
    }

    /// The shared date column, one entry per row
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Column names in construction order, date column excluded
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Look up a column by name. Undefined names are rejected explicitly
    /// rather than falling through to an empty column.
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.index
            .get(name)
            .map(|&i| self.columns[i].1.as_slice())
            .ok_or_else(|| KantorError::ColumnNotFound(name.to_string()))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

/// Builds a [`RateTable`] from independently fetched per-currency series
pub struct RateTableBuilder {
    cross_rates: Vec<(Currency, Currency)>,
}

impl RateTableBuilder {
    pub fn new() -> Self {
        Self {
            cross_rates: Vec::new(),
        }
    }

    /// Request a derived column `numerator/denominator`, computed by dividing
    /// the two currencies' base-currency rates row by row. Derived columns
    /// are appended after the fetched ones, in request order.
    pub fn derive_cross_rate(mut self, numerator: Currency, denominator: Currency) -> Self {
        self.cross_rates.push((numerator, denominator));
        self
    }

    /// Align the series into a table. The date column comes from the first
    /// series; every other series must carry the same dates in the same
    /// order, otherwise positional alignment would silently skew and the
    /// build fails with [`KantorError::MisalignedSeries`].
    pub fn build(self, series: Vec<CurrencySeries>) -> Result<RateTable> {
        let first = series.first().ok_or_else(|| {
            KantorError::MisalignedSeries("no series to build a table from".to_string())
        })?;

        let dates: Vec<NaiveDate> = first.dates().collect();

        for other in &series[1..] {
            if other.len() != dates.len() {
                return Err(KantorError::MisalignedSeries(format!(
                    "{} returned {} rows, expected {} (as {} did)",
                    other.currency,
                    other.len(),
                    dates.len(),
                    first.currency
                )));
            }
            if let Some(stray) = other
                .dates()
                .zip(dates.iter().copied())
                .find_map(|(got, expected)| (got != expected).then_some(got))
            {
                return Err(KantorError::MisalignedSeries(format!(
                    "{} has an observation for {} out of step with {}",
                    other.currency, stray, first.currency
                )));
            }
        }

        let mut columns: Vec<(String, Vec<f64>)> = series
            .iter()
            .map(|s| (s.currency.pair_label(BASE_CURRENCY), s.mids().collect()))
            .collect();

        let fetched: HashMap<Currency, usize> = series
            .iter()
            .enumerate()
            .map(|(i, s)| (s.currency, i))
            .collect();

        // Derived columns are computed only once all fetched columns are in.
        let mut derived = Vec::with_capacity(self.cross_rates.len());
        for &(numerator, denominator) in &self.cross_rates {
            let num = *fetched.get(&numerator).ok_or_else(|| {
                KantorError::ColumnNotFound(numerator.pair_label(BASE_CURRENCY))
            })?;
            let den = *fetched.get(&denominator).ok_or_else(|| {
                KantorError::ColumnNotFound(denominator.pair_label(BASE_CURRENCY))
            })?;

            let values: Vec<f64> = columns[num]
                .1
                .iter()
                .zip(&columns[den].1)
                .map(|(n, d)| round4(n / d))
                .collect();

            derived.push((numerator.pair_label(denominator), values));
        }
        columns.extend(derived);

        let index = columns
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();

        log::debug!(
            "built rate table: {} rows, {} columns",
            dates.len(),
            columns.len()
        );

        Ok(RateTable {
            dates,
            columns,
            index,
        })
    }
}

impl Default for RateTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
