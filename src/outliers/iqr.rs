use serde::{Deserialize, Serialize};

use crate::data::model::Dataset;
use crate::error::Result;

use super::stats::{quantile, sorted};
use super::{check_multiplier, partition_by_bounds, BoundStrategy, Bounds, Partition, Transform};

/// Interquartile-range fences with independently tunable sides.
///
/// `lower = Q1 - left * IQR`, `upper = Q3 + right * IQR`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IqrParams {
    /// IQRs below Q1.
    pub left: f64,
    /// IQRs above Q3.
    pub right: f64,
    /// Compute quartiles on `ln(x + 1)` instead of `x`.
    pub log_scale: bool,
}

impl Default for IqrParams {
    fn default() -> Self {
        Self {
            left: 1.5,
            right: 1.5,
            log_scale: false,
        }
    }
}

impl BoundStrategy for IqrParams {
    fn name(&self) -> &'static str {
        "iqr"
    }

    fn transform(&self) -> Transform {
        Transform::from_log_scale(self.log_scale)
    }

    fn validate(&self) -> Result<()> {
        check_multiplier("left", self.left)?;
        check_multiplier("right", self.right)
    }

    fn bounds(&self, sample: &[f64]) -> Bounds {
        let sorted = sorted(sample);
        let q1 = quantile(&sorted, 0.25);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        log::trace!("q1={q1} q3={q3} iqr={iqr}");
        Bounds::new(q1 - iqr * self.left, q3 + iqr * self.right)
    }
}

/// Find outliers in `feature` with the interquartile-range method.
pub fn find_outliers_iqr(data: &Dataset, feature: &str, params: IqrParams) -> Result<Partition> {
    partition_by_bounds(data, feature, &params)
}
