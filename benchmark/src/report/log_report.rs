//! @ai:module:intent Log every summary line through tracing
//! @ai:module:layer infrastructure
//! @ai:module:public_api LogReporter
//! @ai:module:stateless true

use crate::metrics::{BenchmarkResults, OperationSummary};
use crate::report::ReportSink;
use anyhow::Result;
use std::path::Path;

/// @ai:intent Writes average and confidence interval per container/operation to the log
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Two log lines for one summary: average, then confidence interval
    /// @ai:effects pure
    pub fn render(summary: &OperationSummary) -> [String; 2] {
        let prefix = format!("{} -> {}", summary.container, summary.operation.label());
        [
            format!(
                "{}: {} operations, average time: {:.2} ns",
                prefix, summary.count, summary.mean_ns
            ),
            format!(
                "{} 95% confidence interval: [{:.2} ns, {:.2} ns] (mean: {:.2} ns)",
                prefix, summary.ci_lower_ns, summary.ci_upper_ns, summary.mean_ns
            ),
        ]
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for LogReporter {
    fn name(&self) -> &'static str {
        "log"
    }

    /// @ai:effects io
    fn emit(&self, results: &BenchmarkResults, _output_dir: &Path) -> Result<()> {
        for summary in &results.summaries {
            for line in Self::render(summary) {
                tracing::info!("{}", line);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerKind;
    use crate::metrics::OperationKind;
    use crate::report::tests::sample_results;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_lines() {
        let results = sample_results();
        let add = results.summary(&ContainerKind::DEQUE, OperationKind::Add).unwrap();

        let [average, interval] = LogReporter::render(add);
        assert_eq!(average, "deque -> Addition: 3 operations, average time: 200.00 ns");
        assert_eq!(
            interval,
            "deque -> Addition 95% confidence interval: [86.84 ns, 313.16 ns] (mean: 200.00 ns)"
        );
    }

    #[test]
    fn test_emit_writes_no_files() {
        let temp = tempfile::TempDir::new().unwrap();
        LogReporter::new().emit(&sample_results(), temp.path()).unwrap();
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }
}
