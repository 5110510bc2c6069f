use std::collections::BTreeMap;
use std::fmt;

use crate::config::{GENRE_COLUMN, TYPE_COLUMN, YEAR_COLUMN};

// ---------------------------------------------------------------------------
// CellValue – a single cell of the source table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the dtypes a pandas export produces.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Interpret the cell as a whole year.
    ///
    /// Floats are accepted when they carry no fraction, since a year column
    /// with gaps comes out of pandas as `float64` (`2019.0`). Returns `None`
    /// for anything else, including nulls.
    pub fn as_year(&self) -> Option<i32> {
        match self {
            CellValue::Integer(i) => i32::try_from(*i).ok(),
            CellValue::Float(v) => float_to_year(*v),
            CellValue::String(s) => {
                let s = s.trim();
                if let Ok(i) = s.parse::<i64>() {
                    i32::try_from(i).ok()
                } else {
                    s.parse::<f64>().ok().and_then(float_to_year)
                }
            }
            CellValue::Bool(_) | CellValue::Null => None,
        }
    }

    /// Text form of a categorical cell, `None` when the cell is null.
    pub fn as_label(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

fn float_to_year(v: f64) -> Option<i32> {
    if !v.is_finite() || v.fract() != 0.0 {
        return None;
    }
    if v < i32::MIN as f64 || v > i32::MAX as f64 {
        return None;
    }
    Some(v as i32)
}

// ---------------------------------------------------------------------------
// RawTable – the source as read, before validation
// ---------------------------------------------------------------------------

/// The loaded file before any schema checks or cleaning.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Column names in source order.
    pub column_names: Vec<String>,
    /// One map per record: column_name → value.
    pub rows: Vec<BTreeMap<String, CellValue>>,
}

impl RawTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

// ---------------------------------------------------------------------------
// CatalogRow / CatalogTable – the cleaned, immutable dataset
// ---------------------------------------------------------------------------

/// One content item after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub release_year: i32,
    /// The `type` column (Movie, TV Show, ...).
    pub kind: String,
    /// Comma-separated genre tags.
    pub listed_in: String,
    /// Every other source column, carried through untouched.
    pub extra: BTreeMap<String, CellValue>,
}

impl CatalogRow {
    /// Text shown for `column` in the preview table.
    pub fn display_cell(&self, column: &str) -> String {
        match column {
            YEAR_COLUMN => self.release_year.to_string(),
            TYPE_COLUMN => self.kind.clone(),
            GENRE_COLUMN => self.listed_in.clone(),
            other => self
                .extra
                .get(other)
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }
}

/// The full cleaned dataset. Built once, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CatalogTable {
    rows: Vec<CatalogRow>,
    column_names: Vec<String>,
    year_bounds: (i32, i32),
}

impl CatalogTable {
    /// Build the table and its year bounds. `None` if `rows` is empty.
    pub fn new(rows: Vec<CatalogRow>, column_names: Vec<String>) -> Option<Self> {
        let min = rows.iter().map(|r| r.release_year).min()?;
        let max = rows.iter().map(|r| r.release_year).max()?;
        Some(CatalogTable {
            rows,
            column_names,
            year_bounds: (min, max),
        })
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    /// Column names in source order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Smallest and largest `release_year` in the table.
    pub fn year_bounds(&self) -> (i32, i32) {
        self.year_bounds
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32) -> CatalogRow {
        CatalogRow {
            release_year: year,
            kind: "Movie".into(),
            listed_in: "Dramas".into(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn year_coercion() {
        assert_eq!(CellValue::Integer(2019).as_year(), Some(2019));
        assert_eq!(CellValue::Float(2019.0).as_year(), Some(2019));
        assert_eq!(CellValue::String(" 2021 ".into()).as_year(), Some(2021));
        assert_eq!(CellValue::String("2021.0".into()).as_year(), Some(2021));
        assert_eq!(CellValue::Float(2019.5).as_year(), None);
        assert_eq!(CellValue::Float(f64::NAN).as_year(), None);
        assert_eq!(CellValue::String("TBA".into()).as_year(), None);
        assert_eq!(CellValue::Integer(i64::MAX).as_year(), None);
        assert_eq!(CellValue::Bool(true).as_year(), None);
        assert_eq!(CellValue::Null.as_year(), None);
    }

    #[test]
    fn labels_stringify_non_text_cells() {
        assert_eq!(CellValue::String("Movie".into()).as_label().as_deref(), Some("Movie"));
        assert_eq!(CellValue::Integer(3).as_label().as_deref(), Some("3"));
        assert_eq!(CellValue::Null.as_label(), None);
    }

    #[test]
    fn table_tracks_year_bounds() {
        let table = CatalogTable::new(vec![row(2018), row(2015), row(2024)], vec![]).unwrap();
        assert_eq!(table.year_bounds(), (2015, 2024));
        assert_eq!(table.len(), 3);
        assert!(CatalogTable::new(vec![], vec![]).is_none());
    }

    #[test]
    fn display_cell_reads_core_and_passthrough_columns() {
        let mut r = row(2020);
        r.extra.insert("title".into(), CellValue::String("Kingdom".into()));
        r.extra.insert("rating".into(), CellValue::Null);
        assert_eq!(r.display_cell("release_year"), "2020");
        assert_eq!(r.display_cell("type"), "Movie");
        assert_eq!(r.display_cell("title"), "Kingdom");
        assert_eq!(r.display_cell("rating"), "<null>");
        assert_eq!(r.display_cell("absent"), "");
    }
}
