//! @ai:module:intent Report generation for benchmark results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportSink, ReportGenerator, LogReporter, JsonReporter, MarkdownReporter, ChartGenerator

pub mod charts;
pub mod json_report;
pub mod log_report;
pub mod markdown_report;

pub use charts::ChartGenerator;
pub use json_report::JsonReporter;
pub use log_report::LogReporter;
pub use markdown_report::MarkdownReporter;

use crate::config::ReportConfig;
use crate::metrics::BenchmarkResults;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// @ai:intent Consumer of a finished results table
pub trait ReportSink {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// @ai:intent Render the results, writing any files into output_dir
    fn emit(&self, results: &BenchmarkResults, output_dir: &Path) -> Result<()>;
}

/// @ai:intent Combined report generator running every enabled sink in order
pub struct ReportGenerator {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl ReportGenerator {
    /// @ai:intent Create a generator with every sink enabled
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::from_config(&ReportConfig::default())
    }

    /// @ai:intent Create a generator with the sinks enabled in the config
    /// @ai:post the log sink is always present
    /// @ai:effects pure
    pub fn from_config(config: &ReportConfig) -> Self {
        let mut sinks: Vec<Box<dyn ReportSink>> = vec![Box::new(LogReporter::new())];
        if config.json {
            sinks.push(Box::new(JsonReporter::new()));
        }
        if config.markdown {
            sinks.push(Box::new(MarkdownReporter::new()));
        }
        if config.charts {
            sinks.push(Box::new(ChartGenerator::new()));
        }
        Self { sinks }
    }

    pub fn empty() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sink(mut self, sink: Box<dyn ReportSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn sink_names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    /// @ai:intent Directory for one run: results_dir/YYYY-MM-DD_HH-MM-SS
    /// @ai:effects time
    pub fn timestamped_dir(results_dir: &Path) -> PathBuf {
        let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
        results_dir.join(timestamp.to_string())
    }

    /// @ai:intent Generate all reports
    /// @ai:effects fs:write
    pub fn generate_all(&self, results: &BenchmarkResults, output_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;

        for sink in &self.sinks {
            sink.emit(results, output_dir)
                .with_context(|| format!("{} report failed", sink.name()))?;
            tracing::debug!(sink = sink.name(), "Report emitted");
        }

        tracing::info!("Reports generated in {}", output_dir.display());
        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
