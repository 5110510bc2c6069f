use super::aggregate::{genre_top_k, type_distribution, yearly_counts, CountSeries};
use super::filter::{filter_by_year, YearRange};
use super::model::{CatalogRow, CatalogTable};
use crate::config::DashboardConfig;
use crate::error::DashboardError;

/// Everything the dashboard draws for one year range.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub range: YearRange,
    /// Number of titles inside the range.
    pub matched: usize,
    pub yearly: CountSeries<i32>,
    pub types: CountSeries<String>,
    pub genres: CountSeries<String>,
    /// Leading rows of the filtered subset for the preview table.
    pub preview: Vec<CatalogRow>,
}

/// Filter `table` to `range` and derive the four dashboard artifacts.
///
/// Returns [`DashboardError::EmptyFilterResult`] without aggregating when
/// the range matches nothing.
pub fn build_view(
    table: &CatalogTable,
    range: YearRange,
    config: &DashboardConfig,
) -> Result<DashboardView, DashboardError> {
    let rows = filter_by_year(table, range)?;

    let view = DashboardView {
        range,
        matched: rows.len(),
        yearly: yearly_counts(&rows),
        types: type_distribution(&rows),
        genres: genre_top_k(&rows, &config.genre_delimiter, config.top_genres),
        preview: rows
            .iter()
            .take(config.preview_rows)
            .map(|row| (*row).clone())
            .collect(),
    };
    log::debug!(
        "view {}..={}: {} titles, {} years, {} types",
        range.lo,
        range.hi,
        view.matched,
        view.yearly.len(),
        view.types.len()
    );
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testutil::{decade_table, row};

    #[test]
    fn full_range_produces_all_four_artifacts() {
        let table = decade_table();
        let config = DashboardConfig::default();
        let view = build_view(&table, YearRange::full(&table), &config).unwrap();

        assert_eq!(view.matched, 25);
        assert_eq!(view.yearly.len(), 10);
        assert_eq!(view.types.iter().map(|(_, n)| n).sum::<usize>(), view.matched);
        assert!(view.genres.len() <= 5);
        assert_eq!(view.genres[0], ("Korean TV Shows".to_string(), 15));
        assert_eq!(view.preview.len(), 25);
        assert_eq!(view.preview[0], table.rows()[0]);
    }

    #[test]
    fn preview_is_capped() {
        let rows: Vec<CatalogRow> = (0..120).map(|i| row(2015 + i % 10, "Movie", "Dramas")).collect();
        let table = CatalogTable::new(rows, vec![]).unwrap();
        let config = DashboardConfig::default();
        let view = build_view(&table, YearRange::full(&table), &config).unwrap();

        assert_eq!(view.matched, 120);
        assert_eq!(view.preview.len(), 50);
        assert_eq!(view.preview[..], table.rows()[..50]);
    }

    #[test]
    fn empty_range_skips_aggregation() {
        let table = decade_table();
        let err = build_view(&table, YearRange::new(1990, 1991), &DashboardConfig::default())
            .unwrap_err();
        assert!(matches!(err, DashboardError::EmptyFilterResult { .. }));
    }
}
