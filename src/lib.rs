//! Outlier filtering for one numeric column of a table.
//!
//! ```
//! use rusty_outliers::data::model::{Dataset, Value};
//! use rusty_outliers::outliers::{find_outliers_iqr, IqrParams};
//!
//! let data = Dataset::from_columns(vec![(
//!     "price",
//!     [1, 2, 3, 4, 5, 6, 100].into_iter().map(Value::Integer).collect(),
//! )])?;
//! let (outliers, cleaned) = find_outliers_iqr(&data, "price", IqrParams::default())?.into_parts();
//! assert_eq!(outliers.indices(), vec![6]);
//! assert_eq!(cleaned.len(), 6);
//! # Ok::<(), rusty_outliers::OutlierError>(())
//! ```

pub mod data;
pub mod error;
pub mod outliers;

pub use data::model::{Dataset, Row, Value};
pub use error::{OutlierError, Result};
pub use outliers::{
    find_outliers, find_outliers_iqr, find_outliers_quantile, find_outliers_z_score,
    partition_by_bounds, BoundStrategy, Bounds, IqrParams, OutlierMethod, Partition,
    QuantileParams, Transform, ZScoreParams,
};
