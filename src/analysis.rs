//! Descriptive statistics over table columns

use crate::data::table::RateTable;
use crate::error::{KantorError, Result};
use statrs::statistics::{Data, Distribution, Max, Min, OrderStatistics};
use std::fmt;

/// Mean/median/min/max summary of one rate column.
///
/// Computed fresh from the table on every call; the table is immutable, so
/// repeated calls for the same column always agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Compute the summary for a named column. An empty table has no
    /// summary and yields [`KantorError::EmptyColumn`].
    pub fn for_column(table: &RateTable, name: &str) -> Result<Self> {
        let values = table.column(name)?;
        if values.is_empty() {
            return Err(KantorError::EmptyColumn(name.to_string()));
        }

        let mut data = Data::new(values.to_vec());
        Ok(Self {
            mean: data.mean().unwrap_or(f64::NAN),
            median: data.median(),
            min: data.min(),
            max: data.max(),
        })
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average: {:.4}", self.mean)?;
        writeln!(f, "Median: {:.4}", self.median)?;
        writeln!(f, "Maximum: {:.4}", self.max)?;
        write!(f, "Minimum: {:.4}", self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;
    use crate::data::table::RateTableBuilder;
    use crate::data::{CurrencySeries, RateObservation};
    use approx::assert_relative_eq;

    fn table_with(mids: &[f64]) -> RateTable {
        let observations = mids
            .iter()
            .enumerate()
            .map(|(i, mid)| RateObservation {
                date: format!("2024-01-{:02}", i + 1).parse().unwrap(),
                mid: *mid,
            })
            .collect();

        RateTableBuilder::new()
            .build(vec![CurrencySeries::new(Currency::Eur, observations)])
            .unwrap()
    }

    #[test]
    fn test_summary_values() {
        let table = table_with(&[4.30, 4.31, 4.29, 4.30, 4.32]);
        let stats = SummaryStats::for_column(&table, "eur/pln").unwrap();

        assert_relative_eq!(stats.mean, 4.304, epsilon = 1e-9);
        assert_relative_eq!(stats.median, 4.30, epsilon = 1e-9);
        assert_relative_eq!(stats.min, 4.29, epsilon = 1e-9);
        assert_relative_eq!(stats.max, 4.32, epsilon = 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let table = table_with(&[3.95, 3.96, 3.94]);
        let first = SummaryStats::for_column(&table, "eur/pln").unwrap();
        let second = SummaryStats::for_column(&table, "eur/pln").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_table() {
        let table = table_with(&[]);
        let result = SummaryStats::for_column(&table, "eur/pln");
        assert!(matches!(result, Err(KantorError::EmptyColumn(_))));
    }

    #[test]
    fn test_unknown_column() {
        let table = table_with(&[4.30]);
        let result = SummaryStats::for_column(&table, "usd/pln");
        assert!(matches!(result, Err(KantorError::ColumnNotFound(_))));
    }

    #[test]
    fn test_four_decimal_rendering() {
        let table = table_with(&[1.0, 2.0]);
        let stats = SummaryStats::for_column(&table, "eur/pln").unwrap();
        let rendered = format!("{}", stats);

        assert!(rendered.contains("Average: 1.5000"));
        assert!(rendered.contains("Median: 1.5000"));
        assert!(rendered.contains("Maximum: 2.0000"));
        assert!(rendered.contains("Minimum: 1.0000"));
    }
}
