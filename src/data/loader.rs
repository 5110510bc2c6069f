use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{
    DataType, Float32Type, Float64Type, Int16Type, Int32Type, Int64Type, Int8Type, UInt16Type,
    UInt32Type,
};
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, RawTable};
use crate::config::NullConfig;
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read the catalog source into a [`RawTable`].
///
/// Only a path with nothing at it is reported as
/// [`DashboardError::SourceNotFound`]. A dangling symlink, a permission
/// problem or a parse failure becomes [`DashboardError::Unreadable`]
/// carrying the full context chain.
pub fn read_source(path: &Path, nulls: &NullConfig) -> Result<RawTable, DashboardError> {
    let unreadable = |reason: String| DashboardError::Unreadable {
        path: path.to_path_buf(),
        reason,
    };
    match std::fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // `metadata` follows links; a link that exists but points nowhere is not "missing".
            if std::fs::symlink_metadata(path).is_ok() {
                return Err(unreadable(format!("dangling symlink: {e}")));
            }
            return Err(DashboardError::SourceNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(unreadable(e.to_string())),
    }
    load_file(path, nulls).map_err(|e| unreadable(format!("{e:#}")))
}

/// Load a catalog file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row plus one record per line (the usual export)
/// * `.json`    – `[{ "release_year": 2019, "type": "Movie", ... }, ...]`
/// * `.parquet` – flat columns as written by `df.to_parquet()`
pub fn load_file(path: &Path, nulls: &NullConfig) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path, nulls),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Cells stay text as written (`"007"` is not `7`); only null tokens are
/// interpreted here. Short records are padded with nulls like `read_csv`
/// does, records longer than the header are rejected.
fn load_csv(path: &Path, nulls: &NullConfig) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;
    let headers = dedupe_column_names(
        reader
            .headers()
            .context("reading CSV headers")?
            .iter()
            .map(|h| h.to_string()),
    );

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.len() > headers.len() {
            bail!(
                "CSV row {row_no}: expected {} fields, saw {}",
                headers.len(),
                record.len()
            );
        }
        let row: BTreeMap<String, CellValue> = headers
            .iter()
            .enumerate()
            .map(|(i, col)| (col.clone(), text_cell(record.get(i), nulls)))
            .collect();
        rows.push(row);
    }

    Ok(RawTable {
        column_names: headers,
        rows,
    })
}

fn text_cell(field: Option<&str>, nulls: &NullConfig) -> CellValue {
    match field {
        Some(s) if !nulls.is_null(s) => CellValue::String(s.to_string()),
        _ => CellValue::Null,
    }
}

/// Make repeated column names unique the way pandas does: the second `a`
/// becomes `a.1`, the third `a.2`, skipping names already taken.
fn dedupe_column_names(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for name in names {
        let mut unique = name.clone();
        let mut suffix = 1;
        while taken.contains(&unique) {
            unique = format!("{name}.{suffix}");
            suffix += 1;
        }
        taken.insert(unique.clone());
        out.push(unique);
    }
    out
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (`df.to_json(orient='records')`). Keys absent from
/// a record read as null, like the NaN pandas fills in.
fn load_json(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut column_names: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !column_names.contains(key) {
                column_names.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .filter_map(|rec| rec.as_object())
        .map(|obj| {
            column_names
                .iter()
                .map(|col| {
                    let value = obj.get(col).map(json_to_cell).unwrap_or(CellValue::Null);
                    (col.clone(), value)
                })
                .collect()
        })
        .collect();

    Ok(RawTable { column_names, rows })
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per catalog field.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`); a year column with gaps arrives as
/// nullable `Float64` and is handled by the normalizer like the CSV case.
fn load_parquet(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let column_names =
        dedupe_column_names(builder.schema().fields().iter().map(|f| f.name().clone()));
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for row in 0..batch.num_rows() {
            let cells = column_names
                .iter()
                .zip(batch.columns())
                .map(|(name, col)| {
                    let value = extract_cell(col, row)
                        .with_context(|| format!("Row {row}: failed to read '{name}'"))?;
                    Ok((name.clone(), value))
                })
                .collect::<Result<BTreeMap<_, _>>>()?;
            rows.push(cells);
        }
    }

    Ok(RawTable { column_names, rows })
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &ArrayRef, row: usize) -> Result<CellValue> {
    if col.is_null(row) {
        return Ok(CellValue::Null);
    }
    let typed = match col.data_type() {
        DataType::Utf8 => col
            .as_string_opt::<i32>()
            .map(|a| CellValue::String(a.value(row).to_string())),
        DataType::LargeUtf8 => col
            .as_string_opt::<i64>()
            .map(|a| CellValue::String(a.value(row).to_string())),
        DataType::Int8 => col
            .as_primitive_opt::<Int8Type>()
            .map(|a| CellValue::Integer(a.value(row) as i64)),
        DataType::Int16 => col
            .as_primitive_opt::<Int16Type>()
            .map(|a| CellValue::Integer(a.value(row) as i64)),
        DataType::Int32 => col
            .as_primitive_opt::<Int32Type>()
            .map(|a| CellValue::Integer(a.value(row) as i64)),
        DataType::Int64 => col
            .as_primitive_opt::<Int64Type>()
            .map(|a| CellValue::Integer(a.value(row))),
        DataType::UInt16 => col
            .as_primitive_opt::<UInt16Type>()
            .map(|a| CellValue::Integer(a.value(row) as i64)),
        DataType::UInt32 => col
            .as_primitive_opt::<UInt32Type>()
            .map(|a| CellValue::Integer(a.value(row) as i64)),
        DataType::Float32 => col
            .as_primitive_opt::<Float32Type>()
            .map(|a| CellValue::Float(a.value(row) as f64)),
        DataType::Float64 => col
            .as_primitive_opt::<Float64Type>()
            .map(|a| CellValue::Float(a.value(row))),
        DataType::Boolean => col.as_boolean_opt().map(|a| CellValue::Bool(a.value(row))),
        _ => None,
    };
    match typed {
        Some(value) => Ok(value),
        // Dictionary-encoded categoricals, dates and the like: keep their text form.
        None => Ok(CellValue::String(array_value_to_string(col.as_ref(), row)?)),
    }
}
