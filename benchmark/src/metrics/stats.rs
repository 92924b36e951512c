//! @ai:module:intent Descriptive statistics over operation durations
//! @ai:module:layer domain
//! @ai:module:public_api mean, sample_std_dev, confidence_interval, ConfidenceInterval, Z_95
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// Two-sided z score for a 95% confidence level.
pub const Z_95: f64 = 1.96;

/// @ai:intent Arithmetic mean of durations in nanoseconds
/// @ai:example ([100, 200, 300]) -> 200.0
/// @ai:example ([]) -> 0.0
/// @ai:effects pure
pub fn mean(durations: &[u64]) -> f64 {
    if durations.is_empty() {
        return 0.0;
    }

    let sum: f64 = durations.iter().map(|&d| d as f64).sum();
    sum / durations.len() as f64
}

/// @ai:intent Sample (n - 1) standard deviation
/// @ai:post returns 0 when fewer than two samples exist
/// @ai:effects pure
pub fn sample_std_dev(durations: &[u64]) -> f64 {
    if durations.len() < 2 {
        return 0.0;
    }

    let mean = mean(durations);
    let squared: f64 = durations
        .iter()
        .map(|&d| {
            let delta = d as f64 - mean;
            delta * delta
        })
        .sum();

    (squared / (durations.len() - 1) as f64).sqrt()
}

/// @ai:intent Half-width of the confidence interval around the mean
/// @ai:post returns 0 when fewer than two samples exist
/// @ai:example ([100, 200, 300], 1.96) -> 113.16
/// @ai:effects pure
pub fn confidence_interval(durations: &[u64], z: f64) -> f64 {
    if durations.len() < 2 {
        return 0.0;
    }

    z * sample_std_dev(durations) / (durations.len() as f64).sqrt()
}

/// @ai:intent Mean with lower and upper confidence bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub mean: f64,
    pub margin: f64,
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// @ai:intent Compute the interval [mean - ci, mean + ci]
    /// @ai:effects pure
    pub fn from_durations(durations: &[u64], z: f64) -> Self {
        let mean = mean(durations);
        let margin = confidence_interval(durations, z);

        Self {
            mean,
            margin,
            lower: mean - margin,
            upper: mean + margin,
        }
    }

    /// @ai:intent 95% interval
    /// @ai:effects pure
    pub fn at_95(durations: &[u64]) -> Self {
        Self::from_durations(durations, Z_95)
    }
}
