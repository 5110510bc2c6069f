use super::model::RawTable;
use crate::error::DashboardError;

/// Check that every required column is present.
///
/// Columns are checked in the order given; the first one missing is
/// reported. Extra columns are fine and pass through untouched.
pub fn validate(raw: RawTable, required: &[String]) -> Result<RawTable, DashboardError> {
    if let Some(missing) = required.iter().find(|col| !raw.has_column(col)) {
        return Err(DashboardError::SchemaInvalid(missing.clone()));
    }
    Ok(raw)
}
