use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::loader::read_source;
use super::model::CatalogTable;
use super::normalize::normalize;
use super::schema::validate;
use crate::config::DashboardConfig;
use crate::error::DashboardError;

/// Loads the catalog once and hands out the same table afterwards.
///
/// Owned by the entry point and passed down; a failed load is not stored,
/// so the next call reads the file again.
pub struct CatalogCache {
    config: DashboardConfig,
    table: OnceCell<Arc<CatalogTable>>,
}

impl CatalogCache {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            table: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Read, validate and normalize the source on first use.
    pub fn load(&self) -> Result<Arc<CatalogTable>, DashboardError> {
        self.table
            .get_or_try_init(|| self.read_and_clean().map(Arc::new))
            .cloned()
    }

    fn read_and_clean(&self) -> Result<CatalogTable, DashboardError> {
        let path = &self.config.source_path;
        let raw = read_source(path, &self.config.null)?;
        log::info!(
            "Read {} rows with columns {:?} from {}",
            raw.len(),
            raw.column_names,
            path.display()
        );

        let raw = validate(raw, &self.config.required_columns)?;
        let (table, report) = normalize(raw, &self.config)?;

        let (min_year, max_year) = table.year_bounds();
        log::info!(
            "Catalog ready: {} of {} rows kept, years {min_year}..={max_year}",
            report.rows_kept,
            report.rows_in
        );
        if report.dropped_missing_year + report.dropped_invalid_year > 0 {
            log::info!(
                "Dropped {} rows without a year and {} with a non-numeric year",
                report.dropped_missing_year,
                report.dropped_invalid_year
            );
        }
        if report.filled_type + report.filled_listed_in > 0 {
            log::info!(
                "Filled {} missing types and {} missing genre lists with {:?}",
                report.filled_type,
                report.filled_listed_in,
                self.config.unknown_label
            );
        }
        Ok(table)
    }
}
