/// Data layer: loading, cleaning, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  schema   │  required columns present?
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  drop yearless rows, fill "Unknown" → CatalogTable
///   └───────────┘      (memoized once by `cache`)
///        │
///        ▼  per year-range change
///   ┌──────────┐     ┌───────────┐
///   │  filter   │ ──▶ │ aggregate  │  yearly / type / top-5 genre
///   └──────────┘     └───────────┘
///        │                 │
///        └──────┬──────────┘
///               ▼
///          view::DashboardView
/// ```

pub mod aggregate;
pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod schema;
pub mod view;

#[cfg(test)]
pub(crate) mod testutil;
