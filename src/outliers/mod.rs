//! Outlier filtering over a single numeric column.
//!
//! Every method follows the same three steps:
//! ```text
//!   numeric column ──► transform (identity | ln(x+1))
//!                           │
//!                           ▼
//!                  BoundStrategy::bounds   (IQR, z-score, quantile)
//!                           │
//!                           ▼
//!                 partition_by_bounds ──► outliers / cleaned
//! ```
//!
//! A row is an outlier when its value lies strictly outside the bounds and
//! cleaned when it lies strictly inside. Rows sitting exactly on a bound,
//! and rows with a missing value, land in neither set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::filter::select;
use crate::data::model::Dataset;
use crate::error::{OutlierError, Result};

pub mod iqr;
pub mod quantile;
pub mod stats;
pub mod z_score;

pub use iqr::{find_outliers_iqr, IqrParams};
pub use quantile::{find_outliers_quantile, QuantileParams};
pub use z_score::{find_outliers_z_score, ZScoreParams};

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Lower and upper fence computed for one call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Strictly below `lower` or strictly above `upper`.
    pub fn is_outlier(&self, x: f64) -> bool {
        x < self.lower || x > self.upper
    }

    /// Strictly between the two bounds.
    pub fn is_inside(&self, x: f64) -> bool {
        x > self.lower && x < self.upper
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.lower, self.upper)
    }
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Monotonic transform applied to the feature before bounds are computed.
/// Output rows always carry the untransformed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    #[default]
    Identity,
    /// `ln(x + 1)`, defined for `x > -1`.
    Log1p,
}

impl Transform {
    pub fn from_log_scale(log_scale: bool) -> Self {
        if log_scale {
            Transform::Log1p
        } else {
            Transform::Identity
        }
    }

    pub fn accepts(self, x: f64) -> bool {
        match self {
            Transform::Identity => true,
            Transform::Log1p => x > -1.0,
        }
    }

    pub fn apply(self, x: f64) -> f64 {
        match self {
            Transform::Identity => x,
            Transform::Log1p => x.ln_1p(),
        }
    }
}

// ---------------------------------------------------------------------------
// Strategy seam
// ---------------------------------------------------------------------------

/// How a method turns a sample into [`Bounds`].
pub trait BoundStrategy {
    /// Method name used in log output.
    fn name(&self) -> &'static str;

    /// Transform applied to the feature column before [`bounds`](Self::bounds).
    fn transform(&self) -> Transform {
        Transform::Identity
    }

    /// Parameter guard, run before any data is touched.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Compute the fences from the transformed, non-missing sample.
    fn bounds(&self, sample: &[f64]) -> Bounds;
}

// ---------------------------------------------------------------------------
// Partition
// ---------------------------------------------------------------------------

/// Result of one filtering call.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Rows strictly outside the bounds.
    pub outliers: Dataset,
    /// Rows strictly inside the bounds.
    pub cleaned: Dataset,
    /// Bounds in the transformed space.
    pub bounds: Bounds,
    /// Indices of rows in neither set: missing values and exact bound hits.
    pub excluded: Vec<usize>,
}

impl Partition {
    /// `(outliers, cleaned)`.
    pub fn into_parts(self) -> (Dataset, Dataset) {
        (self.outliers, self.cleaned)
    }
}

/// Split `data` by where each row's `feature` value falls relative to the
/// bounds chosen by `strategy`.
///
/// Fails without a partial result when the parameters are rejected, the
/// column is absent or non-numeric, or the transform's domain is violated.
pub fn partition_by_bounds<S>(data: &Dataset, feature: &str, strategy: &S) -> Result<Partition>
where
    S: BoundStrategy + ?Sized,
{
    strategy.validate()?;
    let transform = strategy.transform();

    let x: Vec<Option<f64>> = data
        .numeric_column(feature)?
        .into_iter()
        .zip(&data.rows)
        .map(|(value, row)| match value {
            Some(v) if !transform.accepts(v) => Err(OutlierError::InvalidLogDomain {
                column: feature.to_string(),
                row: row.index,
                value: v,
            }),
            v => Ok(v.map(|v| transform.apply(v))),
        })
        .collect::<Result<_>>()?;

    let sample: Vec<f64> = x.iter().flatten().copied().collect();
    let bounds = strategy.bounds(&sample);
    log::debug!(
        "{} bounds for '{}' ({} of {} values present): {bounds}",
        strategy.name(),
        feature,
        sample.len(),
        x.len()
    );

    let outlier_mask: Vec<bool> = x
        .iter()
        .map(|v| v.is_some_and(|v| bounds.is_outlier(v)))
        .collect();
    let inside_mask: Vec<bool> = x
        .iter()
        .map(|v| v.is_some_and(|v| bounds.is_inside(v)))
        .collect();
    let excluded: Vec<usize> = data
        .rows
        .iter()
        .zip(outlier_mask.iter().zip(&inside_mask))
        .filter(|(_, (out, inside))| !**out && !**inside)
        .map(|(row, _)| row.index)
        .collect();

    let outliers = select(data, &outlier_mask)?;
    let cleaned = select(data, &inside_mask)?;
    log::debug!(
        "{}: {} outliers, {} cleaned, {} excluded",
        strategy.name(),
        outliers.len(),
        cleaned.len(),
        excluded.len()
    );

    Ok(Partition {
        outliers,
        cleaned,
        bounds,
        excluded,
    })
}

// ---------------------------------------------------------------------------
// Method selection
// ---------------------------------------------------------------------------

/// A method together with its parameters, e.g. `{"method": "z_score", "left": 2.5}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum OutlierMethod {
    Iqr(IqrParams),
    ZScore(ZScoreParams),
    Quantile(QuantileParams),
}

impl Default for OutlierMethod {
    fn default() -> Self {
        OutlierMethod::Iqr(IqrParams::default())
    }
}

impl BoundStrategy for OutlierMethod {
    fn name(&self) -> &'static str {
        match self {
            OutlierMethod::Iqr(p) => p.name(),
            OutlierMethod::ZScore(p) => p.name(),
            OutlierMethod::Quantile(p) => p.name(),
        }
    }

    fn transform(&self) -> Transform {
        match self {
            OutlierMethod::Iqr(p) => p.transform(),
            OutlierMethod::ZScore(p) => p.transform(),
            OutlierMethod::Quantile(p) => p.transform(),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            OutlierMethod::Iqr(p) => p.validate(),
            OutlierMethod::ZScore(p) => p.validate(),
            OutlierMethod::Quantile(p) => p.validate(),
        }
    }

    fn bounds(&self, sample: &[f64]) -> Bounds {
        match self {
            OutlierMethod::Iqr(p) => p.bounds(sample),
            OutlierMethod::ZScore(p) => p.bounds(sample),
            OutlierMethod::Quantile(p) => p.bounds(sample),
        }
    }
}

/// Filter `data` on `feature` with whichever method `method` selects.
pub fn find_outliers(data: &Dataset, feature: &str, method: &OutlierMethod) -> Result<Partition> {
    partition_by_bounds(data, feature, method)
}

/// Shared guard for spread multipliers: finite or infinite, never negative or NaN.
pub(crate) fn check_multiplier(name: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(OutlierError::InvalidParameter {
            name,
            value,
            reason: "multiplier must be non-negative",
        })
    }
}
