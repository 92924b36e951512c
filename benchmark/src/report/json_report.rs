//! @ai:module:intent JSON report generation and loading
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter
//! @ai:module:stateless true

use crate::metrics::BenchmarkResults;
use crate::report::ReportSink;
use anyhow::{Context, Result};
use std::path::Path;

pub const RESULTS_JSON: &str = "results.json";

/// @ai:intent Writes results as pretty JSON
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Read results written by a previous run, for re-rendering only
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<BenchmarkResults> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read results {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse results {}", path.display()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    /// @ai:effects fs:write
    fn emit(&self, results: &BenchmarkResults, output_dir: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(output_dir.join(RESULTS_JSON), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_results;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_emit_and_load() {
        let temp = TempDir::new().unwrap();
        let results = sample_results();

        JsonReporter::new().emit(&results, temp.path()).unwrap();

        let path = temp.path().join(RESULTS_JSON);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"container\": \"deque\""));
        assert!(content.contains("\"operation\": \"search\""));

        let loaded = JsonReporter::load(&path).unwrap();
        assert_eq!(loaded.containers, results.containers);
        assert_eq!(loaded.seed, Some(42));
        assert_eq!(loaded.summaries.len(), results.summaries.len());
        for (a, b) in loaded.summaries.iter().zip(&results.summaries) {
            assert_eq!((a.count, a.misses), (b.count, b.misses));
            assert!((a.ci_upper_ns - b.ci_upper_ns).abs() < 1e-9);
        }
    }

    #[test]
    fn test_load_rejects_garbage() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(RESULTS_JSON);
        std::fs::write(&path, "not json").unwrap();

        let err = JsonReporter::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse results"));
    }
}
