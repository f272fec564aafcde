//! CSV export of the full table and selected subsets

use crate::data::table::RateTable;
use crate::error::Result;
use crate::selection::SelectionSet;
use std::path::Path;

/// Write the full table to `path`: header row of `date` plus every column
/// name in builder order, one row per date, overwriting any prior file.
pub fn export_all(table: &RateTable, path: &Path) -> Result<()> {
    let names = table.column_names();
    write_columns(table, &names, path)
}

/// Write the date column plus the selected columns, in selection order.
/// Returns `false` without touching the file when the selection is empty;
/// the caller decides whether to clear the selection on `true`.
pub fn export_selected(table: &RateTable, selection: &SelectionSet, path: &Path) -> Result<bool> {
    if selection.is_empty() {
        return Ok(false);
    }

    let names: Vec<&str> = selection.names().collect();
    write_columns(table, &names, path)?;
    Ok(true)
}

fn write_columns(table: &RateTable, names: &[&str], path: &Path) -> Result<()> {
    // Resolve every column up front so an undefined name fails before the
    // output file is created.
    let columns: Vec<&[f64]> = names
        .iter()
        .map(|name| table.column(name))
        .collect::<Result<_>>()?;

    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["date"];
    header.extend_from_slice(names);
    writer.write_record(&header)?;

    for (row, date) in table.dates().iter().enumerate() {
        let mut record = vec![date.to_string()];
        record.extend(columns.iter().map(|column| column[row].to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    log::debug!("wrote {} rows to {}", table.num_rows(), path.display());
    Ok(())
}
