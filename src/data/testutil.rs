//! Table builders shared by the data-layer tests.

use std::collections::BTreeMap;

use super::model::{CatalogRow, CatalogTable, CellValue, RawTable};

pub fn text(s: &str) -> CellValue {
    CellValue::String(s.to_string())
}

/// Build a raw table from column names and positional cells.
pub fn raw_table(columns: &[&str], rows: Vec<Vec<CellValue>>) -> RawTable {
    let column_names: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    let rows = rows
        .into_iter()
        .map(|cells| column_names.iter().cloned().zip(cells).collect::<BTreeMap<_, _>>())
        .collect();
    RawTable { column_names, rows }
}

pub fn row(year: i32, kind: &str, listed_in: &str) -> CatalogRow {
    CatalogRow {
        release_year: year,
        kind: kind.to_string(),
        listed_in: listed_in.to_string(),
        extra: BTreeMap::new(),
    }
}

/// Ten years of titles, 2015–2024, two per year (a Movie and a TV Show),
/// with the 2020s skewed towards more TV.
pub fn decade_table() -> CatalogTable {
    let mut rows = Vec::new();
    for year in 2015..=2024 {
        rows.push(row(year, "Movie", "Dramas, International Movies"));
        rows.push(row(year, "TV Show", "Korean TV Shows, TV Dramas"));
        if year >= 2020 {
            rows.push(row(year, "TV Show", "Korean TV Shows, Romantic TV Shows, TV Comedies"));
        }
    }
    let columns = ["release_year", "type", "listed_in"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    CatalogTable::new(rows, columns).expect("non-empty fixture")
}
