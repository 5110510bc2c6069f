use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Fixed settings for one dashboard process.
///
/// Built once in `main` and passed by reference; nothing here is read from
/// the command line or the environment.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Location of the catalog export, relative to the working directory.
    pub source_path: PathBuf,
    /// Columns that must be present in the source, checked in this order.
    pub required_columns: Vec<String>,
    /// Label substituted for missing `type` / `listed_in` cells.
    pub unknown_label: String,
    /// Separator between genre tags inside `listed_in`.
    pub genre_delimiter: String,
    /// Number of genres kept by the top-k aggregation.
    pub top_genres: usize,
    /// Number of filtered rows handed to the preview table.
    pub preview_rows: usize,
    /// Cell values treated as missing when reading text formats.
    pub null: NullConfig,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

pub const YEAR_COLUMN: &str = "release_year";
pub const TYPE_COLUMN: &str = "type";
pub const GENRE_COLUMN: &str = "listed_in";

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("netflix_korea_10y_trend.csv"),
            required_columns: vec![
                YEAR_COLUMN.to_string(),
                TYPE_COLUMN.to_string(),
                GENRE_COLUMN.to_string(),
            ],
            unknown_label: "Unknown".to_string(),
            genre_delimiter: ", ".to_string(),
            top_genres: 5,
            preview_rows: 50,
            null: NullConfig::default(),
            window_title: "K-Trends – Korean Content on Netflix, 10 Years".to_string(),
            window_size: [1280.0, 900.0],
            min_window_size: [720.0, 480.0],
        }
    }
}

// ---------------------------------------------------------------------------
// Null tokens
// ---------------------------------------------------------------------------

/// Which raw text cells count as missing.
///
/// The defaults follow what pandas' `read_csv` treats as NA, so a catalog
/// exported from a notebook loads with the same gaps it had there.
#[derive(Debug, Clone)]
pub struct NullConfig {
    pub patterns: Vec<String>,
    pub trim_whitespace: bool,
}

impl Default for NullConfig {
    fn default() -> Self {
        let patterns = [
            "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
            "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
        ];
        Self {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            trim_whitespace: true,
        }
    }
}

impl NullConfig {
    /// Check if a raw cell should be read as null.
    pub fn is_null(&self, value: &str) -> bool {
        let value = if self.trim_whitespace {
            value.trim()
        } else {
            value
        };
        self.patterns.iter().any(|p| p == value)
    }
}
