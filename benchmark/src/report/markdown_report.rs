//! @ai:module:intent Markdown report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api MarkdownReporter
//! @ai:module:stateless true

use crate::metrics::{BenchmarkResults, OperationKind};
use crate::report::ReportSink;
use anyhow::Result;
use std::fmt::Write as FmtWrite;
use std::path::Path;

pub const RESULTS_MARKDOWN: &str = "results.md";

/// @ai:intent Generates Markdown reports from benchmark results
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// @ai:intent Create a new Markdown reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Generate run summary section
    /// @ai:effects pure
    fn generate_summary(results: &BenchmarkResults) -> String {
        let mut output = String::new();

        writeln!(output, "# Container Benchmark Results").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Date:** {}", results.timestamp).unwrap();
        match results.seed {
            Some(seed) => writeln!(output, "**Seed:** {}", seed).unwrap(),
            None => writeln!(output, "**Seed:** random").unwrap(),
        }
        writeln!(output, "**Seeded lexemes:** {}", results.seeded_lexemes).unwrap();
        writeln!(output, "**Workload calls:** {}", results.workload_calls).unwrap();
        writeln!(output).unwrap();

        output
    }

    /// @ai:intent Generate the full container/operation table
    /// @ai:effects pure
    fn generate_table(results: &BenchmarkResults) -> String {
        let mut output = String::new();

        writeln!(output, "## Operation Timings").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "| Container | Operation | Count | Misses | Mean (ns) | 95% CI (ns) |"
        )
        .unwrap();
        writeln!(
            output,
            "|-----------|-----------|-------|--------|-----------|-------------|"
        )
        .unwrap();

        for summary in &results.summaries {
            writeln!(
                output,
                "| {} | {} | {} | {} | {:.2} | [{:.2}, {:.2}] |",
                summary.container,
                summary.operation.label(),
                summary.count,
                summary.misses,
                summary.mean_ns,
                summary.ci_lower_ns,
                summary.ci_upper_ns
            )
            .unwrap();
        }

        writeln!(output).unwrap();
        output
    }

    /// @ai:intent Generate the fastest container per operation
    /// @ai:post operations without any recorded call are omitted
    /// @ai:effects pure
    fn generate_fastest_section(results: &BenchmarkResults) -> String {
        let mut output = String::new();

        writeln!(output, "## Fastest Container per Operation").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Operation | Container | Mean (ns) |").unwrap();
        writeln!(output, "|-----------|-----------|-----------|").unwrap();

        for operation in OperationKind::ALL {
            let fastest = results
                .by_operation(operation)
                .into_iter()
                .filter(|s| s.count > 0)
                .min_by(|a, b| a.mean_ns.total_cmp(&b.mean_ns));

            if let Some(summary) = fastest {
                writeln!(
                    output,
                    "| {} | {} | {:.2} |",
                    operation.label(),
                    summary.container,
                    summary.mean_ns
                )
                .unwrap();
            }
        }

        writeln!(output).unwrap();
        output
    }

    /// @ai:intent Render the whole report
    /// @ai:effects pure
    pub fn render(results: &BenchmarkResults) -> String {
        let mut content = String::new();
        content.push_str(&Self::generate_summary(results));
        content.push_str(&Self::generate_table(results));
        content.push_str(&Self::generate_fastest_section(results));
        content
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for MarkdownReporter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    /// @ai:intent Generate Markdown report to file
    /// @ai:effects fs:write
    fn emit(&self, results: &BenchmarkResults, output_dir: &Path) -> Result<()> {
        std::fs::write(output_dir.join(RESULTS_MARKDOWN), Self::render(results))?;
        Ok(())
    }
}
