//! @ai:module:intent Turn raw per-container timings into reported statistics
//! @ai:module:layer application
//! @ai:module:public_api MetricsAggregator, MetricsAggregatorTrait, RunInfo
//! @ai:module:stateless true

use crate::metrics::stats::Z_95;
use crate::metrics::types::{BenchmarkResults, ContainerStats, OperationKind, OperationSummary};

/// @ai:intent Run parameters echoed into the results
#[derive(Debug, Clone, Copy, Default)]
pub struct RunInfo {
    pub seed: Option<u64>,
    pub seeded_lexemes: usize,
    pub workload_calls: u64,
}

/// @ai:intent Trait for metrics aggregation
pub trait MetricsAggregatorTrait {
    /// @ai:intent Aggregate container timings into benchmark results
    fn aggregate(&self, stats: &[ContainerStats], info: RunInfo) -> BenchmarkResults;
}

/// @ai:intent Aggregates container timings into mean and confidence summaries
pub struct MetricsAggregator {
    z: f64,
}

impl MetricsAggregator {
    /// @ai:intent Create an aggregator reporting 95% intervals
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::with_z(Z_95)
    }

    pub fn with_z(z: f64) -> Self {
        Self { z }
    }

    /// @ai:intent Summarize every container/operation pair
    /// @ai:post result has exactly 3 entries per container, ordered container-major
    /// @ai:effects pure
    pub fn summarize(&self, stats: &[ContainerStats]) -> Vec<OperationSummary> {
        stats
            .iter()
            .flat_map(|container| {
                OperationKind::ALL
                    .into_iter()
                    .map(move |operation| self.summarize_one(container, operation))
            })
            .collect()
    }

    fn summarize_one(
        &self,
        container: &ContainerStats,
        operation: OperationKind,
    ) -> OperationSummary {
        let bucket = container.bucket(operation);
        let interval = bucket.confidence(self.z);
        let mean_ns = bucket.average_ns();

        OperationSummary {
            container: container.kind.clone(),
            operation,
            count: bucket.count,
            misses: bucket.misses,
            total_ns: bucket.total_ns,
            mean_ns,
            ci_margin_ns: interval.margin,
            ci_lower_ns: mean_ns - interval.margin,
            ci_upper_ns: mean_ns + interval.margin,
        }
    }
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsAggregatorTrait for MetricsAggregator {
    /// @ai:intent Aggregate timings into benchmark results
    /// @ai:effects time
    fn aggregate(&self, stats: &[ContainerStats], info: RunInfo) -> BenchmarkResults {
        BenchmarkResults {
            timestamp: chrono::Utc::now().to_rfc3339(),
            seed: info.seed,
            seeded_lexemes: info.seeded_lexemes,
            workload_calls: info.workload_calls,
            containers: stats.iter().map(|s| s.kind.clone()).collect(),
            summaries: self.summarize(stats),
        }
    }
}
