use super::model::{CatalogRow, CatalogTable};
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Year range: the one user-controlled predicate
// ---------------------------------------------------------------------------

/// Closed interval of release years, `lo..=hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub lo: i32,
    pub hi: i32,
}

impl YearRange {
    pub fn new(lo: i32, hi: i32) -> Self {
        YearRange { lo, hi }
    }

    /// The range covering every year in `table`.
    pub fn full(table: &CatalogTable) -> Self {
        let (lo, hi) = table.year_bounds();
        YearRange { lo, hi }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.lo <= year && year <= self.hi
    }

    /// Pull both ends into `bounds` and keep `lo <= hi`, moving `hi` up when
    /// the two cross. Used by the year control, never by the filter itself.
    pub fn clamped(self, bounds: (i32, i32)) -> Self {
        let lo = self.lo.clamp(bounds.0, bounds.1);
        let hi = self.hi.clamp(bounds.0, bounds.1).max(lo);
        YearRange { lo, hi }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Keep the rows released inside `range`, in their original order.
///
/// Takes any sequence of rows so a filtered subset can be narrowed again.
pub fn select_rows<'a, I>(rows: I, range: YearRange) -> Vec<&'a CatalogRow>
where
    I: IntoIterator<Item = &'a CatalogRow>,
{
    rows.into_iter()
        .filter(|row| range.contains(row.release_year))
        .collect()
}

/// Filter the table by `range`.
///
/// An empty result is returned as [`DashboardError::EmptyFilterResult`] so
/// the caller cannot feed an empty subset to the aggregators by accident.
pub fn filter_by_year(
    table: &CatalogTable,
    range: YearRange,
) -> Result<Vec<&CatalogRow>, DashboardError> {
    let rows = select_rows(table.rows(), range);
    if rows.is_empty() {
        return Err(DashboardError::EmptyFilterResult {
            lo: range.lo,
            hi: range.hi,
        });
    }
    Ok(rows)
}
