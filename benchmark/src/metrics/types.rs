//! @ai:module:intent Metric types for benchmark results
//! @ai:module:layer domain
//! @ai:module:public_api OperationKind, OperationStats, ContainerStats, OperationSummary, BenchmarkResults

use crate::container::ContainerKind;
use crate::error::Error;
use crate::metrics::stats::ConfidenceInterval;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// @ai:intent Primitive operation applied to every container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Add,
    Search,
    Remove,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] =
        [OperationKind::Add, OperationKind::Search, OperationKind::Remove];

    /// @ai:intent Get string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Search => "search",
            OperationKind::Remove => "remove",
        }
    }

    /// @ai:intent Human-readable series label used in reports
    /// @ai:effects pure
    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::Add => "Addition",
            OperationKind::Search => "Search",
            OperationKind::Remove => "Removal",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(OperationKind::Add),
            "search" => Ok(OperationKind::Search),
            "remove" => Ok(OperationKind::Remove),
            _ => Err(Error::UnknownOperationKind(s.to_string())),
        }
    }
}

/// @ai:intent Raw timings of one operation kind on one container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationStats {
    pub total_ns: u64,
    pub count: u64,
    /// Calls that returned false: skipped duplicates, search misses, removals of absent lexemes.
    pub misses: u64,
    pub durations: Vec<u64>,
}

impl OperationStats {
    /// @ai:intent Record one timed call
    /// @ai:post count == durations.len()
    pub fn record(&mut self, duration_ns: u64, hit: bool) {
        self.total_ns = self.total_ns.saturating_add(duration_ns);
        self.count += 1;
        if !hit {
            self.misses += 1;
        }
        self.durations.push(duration_ns);
    }

    /// @ai:intent Mean latency, 0 when nothing was recorded
    /// @ai:effects pure
    pub fn average_ns(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_ns as f64 / self.count as f64
        }
    }

    /// @ai:intent Confidence interval over the recorded durations
    /// @ai:effects pure
    pub fn confidence(&self, z: f64) -> ConfidenceInterval {
        ConfidenceInterval::from_durations(&self.durations, z)
    }
}

/// @ai:intent The three operation buckets of one container
/// @ai:invariant every bucket exists from construction, so lookup never fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerStats {
    pub kind: ContainerKind,
    pub add: OperationStats,
    pub search: OperationStats,
    pub remove: OperationStats,
}

impl ContainerStats {
    pub fn new(kind: ContainerKind) -> Self {
        Self {
            kind,
            add: OperationStats::default(),
            search: OperationStats::default(),
            remove: OperationStats::default(),
        }
    }

    pub fn bucket(&self, operation: OperationKind) -> &OperationStats {
        match operation {
            OperationKind::Add => &self.add,
            OperationKind::Search => &self.search,
            OperationKind::Remove => &self.remove,
        }
    }

    pub fn bucket_mut(&mut self, operation: OperationKind) -> &mut OperationStats {
        match operation {
            OperationKind::Add => &mut self.add,
            OperationKind::Search => &mut self.search,
            OperationKind::Remove => &mut self.remove,
        }
    }
}

/// @ai:intent Reported statistics for one container/operation pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSummary {
    pub container: ContainerKind,
    pub operation: OperationKind,
    pub count: u64,
    pub misses: u64,
    pub total_ns: u64,
    pub mean_ns: f64,
    pub ci_margin_ns: f64,
    pub ci_lower_ns: f64,
    pub ci_upper_ns: f64,
}

/// @ai:intent Complete benchmark results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResults {
    pub timestamp: String,
    #[serde(default)]
    pub seed: Option<u64>,
    pub seeded_lexemes: usize,
    /// Add/search/remove calls issued by the workload, each applied to every container.
    pub workload_calls: u64,
    pub containers: Vec<ContainerKind>,
    pub summaries: Vec<OperationSummary>,
}

impl BenchmarkResults {
    /// @ai:intent Find the summary of one container/operation pair
    /// @ai:effects pure
    pub fn summary(
        &self,
        container: &ContainerKind,
        operation: OperationKind,
    ) -> Option<&OperationSummary> {
        self.summaries
            .iter()
            .find(|s| &s.container == container && s.operation == operation)
    }

    /// @ai:intent Summaries of one operation, in container order
    /// @ai:effects pure
    pub fn by_operation(&self, operation: OperationKind) -> Vec<&OperationSummary> {
        self.containers
            .iter()
            .filter_map(|container| self.summary(container, operation))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operation_kind() {
        assert_eq!("Search".parse::<OperationKind>().unwrap(), OperationKind::Search);
        assert!(matches!(
            "update".parse::<OperationKind>(),
            Err(Error::UnknownOperationKind(name)) if name == "update"
        ));
    }

    #[test]
    fn test_record_tracks_misses() {
        let mut stats = OperationStats::default();
        stats.record(100, true);
        stats.record(300, false);

        assert_eq!(stats.count, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_ns, 400);
        assert_eq!(stats.durations, vec![100, 300]);
        assert!((stats.average_ns() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_bucket_average_is_zero() {
        let stats = ContainerStats::new(ContainerKind::DEQUE);
        for operation in OperationKind::ALL {
            assert_eq!(stats.bucket(operation).count, 0);
            assert_eq!(stats.bucket(operation).average_ns(), 0.0);
        }
    }

    #[test]
    fn test_bucket_mut_targets_requested_operation() {
        let mut stats = ContainerStats::new(ContainerKind::STACK);
        stats.bucket_mut(OperationKind::Remove).record(10, true);
        assert_eq!(stats.remove.count, 1);
        assert_eq!(stats.add.count, 0);
        assert_eq!(stats.search.count, 0);
    }
}
