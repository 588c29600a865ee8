use serde::{Deserialize, Serialize};

use crate::data::model::Dataset;
use crate::error::{OutlierError, Result};

use super::stats::{quantile, sorted};
use super::{partition_by_bounds, BoundStrategy, Bounds, Partition};

/// Fences at two quantiles of the raw feature. No log-scale option.
///
/// `left > right` is accepted and yields inverted bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantileParams {
    /// Probability of the lower fence.
    pub left: f64,
    /// Probability of the upper fence.
    pub right: f64,
}

impl Default for QuantileParams {
    fn default() -> Self {
        Self {
            left: 0.01,
            right: 0.99,
        }
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(OutlierError::InvalidParameter {
            name,
            value,
            reason: "quantile probability must lie in [0, 1]",
        })
    }
}

impl BoundStrategy for QuantileParams {
    fn name(&self) -> &'static str {
        "quantile"
    }

    fn validate(&self) -> Result<()> {
        check_probability("left", self.left)?;
        check_probability("right", self.right)
    }

    fn bounds(&self, sample: &[f64]) -> Bounds {
        let sorted = sorted(sample);
        Bounds::new(quantile(&sorted, self.left), quantile(&sorted, self.right))
    }
}

/// Find outliers in `feature` outside the `left`/`right` quantiles.
pub fn find_outliers_quantile(
    data: &Dataset,
    feature: &str,
    params: QuantileParams,
) -> Result<Partition> {
    partition_by_bounds(data, feature, &params)
}
