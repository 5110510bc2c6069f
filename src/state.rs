use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::YearRange;
use crate::data::model::CatalogTable;
use crate::data::view::{build_view, DashboardView};
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// The cleaned catalog, shared read-only.
    pub table: Arc<CatalogTable>,

    /// Currently selected years, always inside the table's bounds.
    pub range: YearRange,

    /// Charts and preview for `range`, or why there is nothing to show.
    pub view: Result<DashboardView, DashboardError>,

    /// Colour per content type.
    pub type_colors: ColorMap,
}

impl AppState {
    /// Start with the full year range selected.
    pub fn new(table: Arc<CatalogTable>, config: DashboardConfig) -> Self {
        let range = YearRange::full(&table);
        let type_colors = ColorMap::new(table.rows().iter().map(|r| r.kind.as_str()));
        let view = build_view(&table, range, &config);
        Self {
            config,
            table,
            range,
            view,
            type_colors,
        }
    }

    pub fn bounds(&self) -> (i32, i32) {
        self.table.year_bounds()
    }

    /// Select a new range; recompute only when it actually changed.
    pub fn set_range(&mut self, range: YearRange) {
        let range = range.clamped(self.bounds());
        if range == self.range {
            return;
        }
        self.range = range;
        self.refresh();
    }

    /// Move the lower end, dragging the upper end along if they cross.
    pub fn set_from(&mut self, lo: i32) {
        let hi = self.range.hi.max(lo);
        self.set_range(YearRange::new(lo, hi));
    }

    /// Move the upper end, dragging the lower end along if they cross.
    pub fn set_to(&mut self, hi: i32) {
        let lo = self.range.lo.min(hi);
        self.set_range(YearRange::new(lo, hi));
    }

    pub fn reset_range(&mut self) {
        self.set_range(YearRange::full(&self.table));
    }

    fn refresh(&mut self) {
        self.view = build_view(&self.table, self.range, &self.config);
        if let Err(e) = &self.view {
            log::warn!("{e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testutil::{decade_table, row};

    fn state() -> AppState {
        AppState::new(Arc::new(decade_table()), DashboardConfig::default())
    }

    #[test]
    fn starts_on_the_full_range() {
        let state = state();
        assert_eq!(state.range, YearRange::new(2015, 2024));
        assert_eq!(state.view.as_ref().unwrap().yearly.len(), 10);
    }

    #[test]
    fn narrowing_the_range_rebuilds_the_view() {
        let mut state = state();
        state.set_from(2020);
        let view = state.view.as_ref().unwrap();
        assert_eq!(view.range, YearRange::new(2020, 2024));
        assert_eq!(view.matched, 15);
    }

    #[test]
    fn crossing_ends_drag_each_other() {
        let mut state = state();
        state.set_to(2017);
        state.set_from(2019);
        assert_eq!(state.range, YearRange::new(2019, 2019));
        state.set_to(2016);
        assert_eq!(state.range, YearRange::new(2016, 2016));
    }

    #[test]
    fn range_is_clamped_to_the_data() {
        let mut state = state();
        state.set_range(YearRange::new(1990, 1991));
        assert_eq!(state.range, YearRange::new(2015, 2015));
        state.reset_range();
        assert_eq!(state.range, YearRange::new(2015, 2024));
    }

    #[test]
    fn gap_years_show_the_empty_notice_and_recover() {
        let rows = vec![row(2015, "Movie", "Dramas"), row(2024, "TV Show", "K-dramas")];
        let table = CatalogTable::new(rows, vec![]).unwrap();
        let mut state = AppState::new(Arc::new(table), DashboardConfig::default());

        state.set_range(YearRange::new(2017, 2020));
        assert!(matches!(
            state.view,
            Err(DashboardError::EmptyFilterResult { lo: 2017, hi: 2020 })
        ));

        state.reset_range();
        assert_eq!(state.view.as_ref().unwrap().matched, 2);
    }
}
