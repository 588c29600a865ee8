/// Data layer: core types, loading, and row masking.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Row>, ordered column names
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  boolean mask → sub-dataset
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
