use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the dashboard from showing data.
///
/// Most variants end the session; [`DashboardError::EmptyFilterResult`]
/// only blanks the current view until the range changes.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("data file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("could not read {}: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("required column is missing: {0}")]
    SchemaInvalid(String),

    #[error("no rows with a usable release year")]
    NoValidRows,

    #[error("no titles released between {lo} and {hi}")]
    EmptyFilterResult { lo: i32, hi: i32 },
}

impl DashboardError {
    /// Whether the process has nothing left to show after this error.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, DashboardError::EmptyFilterResult { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_filter_is_recoverable() {
        assert!(DashboardError::SourceNotFound(PathBuf::from("x.csv")).is_fatal());
        assert!(DashboardError::SchemaInvalid("listed_in".into()).is_fatal());
        assert!(DashboardError::NoValidRows.is_fatal());
        assert!(!DashboardError::EmptyFilterResult { lo: 1990, hi: 1991 }.is_fatal());
    }

    #[test]
    fn schema_message_names_the_column() {
        let err = DashboardError::SchemaInvalid("listed_in".into());
        assert_eq!(err.to_string(), "required column is missing: listed_in");
    }
}
