use std::collections::BTreeMap;

use super::model::{CatalogRow, CatalogTable, CellValue, RawTable};
use crate::config::{DashboardConfig, GENRE_COLUMN, TYPE_COLUMN, YEAR_COLUMN};
use crate::error::DashboardError;

/// What cleaning did to the raw table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub rows_in: usize,
    pub rows_kept: usize,
    /// Rows with no `release_year` at all.
    pub dropped_missing_year: usize,
    /// Rows whose `release_year` is present but not a whole number.
    pub dropped_invalid_year: usize,
    pub filled_type: usize,
    pub filled_listed_in: usize,
}

/// Turn a validated [`RawTable`] into the immutable [`CatalogTable`].
///
/// * rows without a year are dropped,
/// * rows whose year is not a whole number are dropped as well (and logged),
/// * missing `type` / `listed_in` become the configured unknown label.
///
/// Fails with [`DashboardError::NoValidRows`] when nothing survives.
pub fn normalize(
    raw: RawTable,
    config: &DashboardConfig,
) -> Result<(CatalogTable, NormalizeReport), DashboardError> {
    let mut report = NormalizeReport {
        rows_in: raw.len(),
        ..Default::default()
    };
    let mut rows = Vec::with_capacity(raw.len());

    for (row_no, mut cells) in raw.rows.into_iter().enumerate() {
        let year_cell = cells.remove(YEAR_COLUMN).unwrap_or(CellValue::Null);
        if year_cell.is_null() {
            report.dropped_missing_year += 1;
            continue;
        }
        let Some(release_year) = year_cell.as_year() else {
            log::warn!("row {row_no}: dropping non-numeric release_year {year_cell:?}");
            report.dropped_invalid_year += 1;
            continue;
        };

        let kind = take_label(&mut cells, TYPE_COLUMN).unwrap_or_else(|| {
            report.filled_type += 1;
            config.unknown_label.clone()
        });
        let listed_in = take_label(&mut cells, GENRE_COLUMN).unwrap_or_else(|| {
            report.filled_listed_in += 1;
            config.unknown_label.clone()
        });

        rows.push(CatalogRow {
            release_year,
            kind,
            listed_in,
            extra: cells,
        });
    }

    report.rows_kept = rows.len();
    let table = CatalogTable::new(rows, raw.column_names).ok_or(DashboardError::NoValidRows)?;
    Ok((table, report))
}

fn take_label(cells: &mut BTreeMap<String, CellValue>, column: &str) -> Option<String> {
    cells.remove(column).and_then(|v| v.as_label())
}
