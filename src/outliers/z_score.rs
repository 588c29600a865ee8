use serde::{Deserialize, Serialize};

use crate::data::model::Dataset;
use crate::error::Result;

use super::stats::{mean, sample_std};
use super::{check_multiplier, partition_by_bounds, BoundStrategy, Bounds, Partition, Transform};

/// Standard-deviation fences around the mean (the "3-sigma" rule by default).
///
/// With zero variance both bounds collapse onto the mean: every value
/// different from it is an outlier and values equal to it land in neither set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZScoreParams {
    /// Standard deviations below the mean.
    pub left: f64,
    /// Standard deviations above the mean.
    pub right: f64,
    /// Compute mean and deviation on `ln(x + 1)` instead of `x`.
    pub log_scale: bool,
}

impl Default for ZScoreParams {
    fn default() -> Self {
        Self {
            left: 3.0,
            right: 3.0,
            log_scale: false,
        }
    }
}

impl BoundStrategy for ZScoreParams {
    fn name(&self) -> &'static str {
        "z_score"
    }

    fn transform(&self) -> Transform {
        Transform::from_log_scale(self.log_scale)
    }

    fn validate(&self) -> Result<()> {
        check_multiplier("left", self.left)?;
        check_multiplier("right", self.right)
    }

    fn bounds(&self, sample: &[f64]) -> Bounds {
        let mu = mean(sample);
        let sigma = sample_std(sample);
        log::trace!("mu={mu} sigma={sigma}");
        Bounds::new(mu - self.left * sigma, mu + self.right * sigma)
    }
}

/// Find outliers in `feature` with the z-score method.
pub fn find_outliers_z_score(
    data: &Dataset,
    feature: &str,
    params: ZScoreParams,
) -> Result<Partition> {
    partition_by_bounds(data, feature, &params)
}
