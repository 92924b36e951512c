//! @ai:module:intent Metrics collection, statistics and aggregation
//! @ai:module:layer application
//! @ai:module:public_api OperationKind, OperationStats, ContainerStats, BenchmarkResults, MetricsAggregator, ConfidenceInterval

pub mod aggregator;
pub mod stats;
pub mod types;

pub use aggregator::{MetricsAggregator, MetricsAggregatorTrait, RunInfo};
pub use stats::{confidence_interval, mean, sample_std_dev, ConfidenceInterval, Z_95};
pub use types::{BenchmarkResults, ContainerStats, OperationKind, OperationStats, OperationSummary};
