//! @ai:module:intent Chart generation for benchmark results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartGenerator
//! @ai:module:stateless true

use crate::metrics::{BenchmarkResults, OperationKind, OperationSummary};
use crate::report::ReportSink;
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

pub const AVERAGE_CHART: &str = "average_performance.png";
pub const CONFIDENCE_CHART: &str = "confidence_performance.png";

const GROUP_WIDTH: f64 = 0.8;

/// @ai:intent Generates grouped bar charts, one group per container and one bar per operation
pub struct ChartGenerator;

impl ChartGenerator {
    /// @ai:intent Create a new chart generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    fn series_color(operation: OperationKind) -> RGBColor {
        match operation {
            OperationKind::Add => BLUE,
            OperationKind::Search => GREEN,
            OperationKind::Remove => RED,
        }
    }

    /// @ai:intent Horizontal extent of one bar inside its container group
    /// @ai:example (2, 0) -> (1.6, 1.8666)
    /// @ai:effects pure
    fn bar_span(container_index: usize, operation: OperationKind) -> (f64, f64) {
        let width = GROUP_WIDTH / OperationKind::ALL.len() as f64;
        let left = container_index as f64 - GROUP_WIDTH / 2.0 + operation as usize as f64 * width;
        (left, left + width)
    }

    /// @ai:intent Upper bound of the y axis with some headroom
    /// @ai:effects pure
    fn y_max(results: &BenchmarkResults, with_intervals: bool) -> f64 {
        let max = results
            .summaries
            .iter()
            .map(|s| if with_intervals { s.ci_upper_ns } else { s.mean_ns })
            .fold(0.0, f64::max);
        (max * 1.15).max(1.0)
    }

    /// @ai:intent Draw mean bars, optionally with confidence interval error bars
    /// @ai:effects fs:write
    fn generate_chart(
        &self,
        results: &BenchmarkResults,
        output_path: &Path,
        caption: &str,
        with_intervals: bool,
    ) -> Result<()> {
        let root = BitMapBackend::new(output_path, (1000, 600)).into_drawing_area();
        root.fill(&WHITE)?;

        let names: Vec<String> = results.containers.iter().map(|c| c.to_string()).collect();
        let groups = names.len().max(1) as f64;

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 30))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5f64..groups - 0.5, 0f64..Self::y_max(results, with_intervals))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(names.len().max(1))
            .y_desc("Time (ns)")
            .x_desc("Container")
            .x_label_formatter(&|x| {
                let index = x.round();
                if (x - index).abs() > 1e-6 || index < 0.0 {
                    return String::new();
                }
                names.get(index as usize).cloned().unwrap_or_default()
            })
            .draw()?;

        for operation in OperationKind::ALL {
            let color = Self::series_color(operation);
            let summaries: Vec<(usize, &OperationSummary)> =
                results.by_operation(operation).into_iter().enumerate().collect();

            chart
                .draw_series(summaries.iter().map(|(i, summary)| {
                    let (left, right) = Self::bar_span(*i, operation);
                    Rectangle::new([(left, 0.0), (right, summary.mean_ns)], color.mix(0.7).filled())
                }))?
                .label(operation.label())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.mix(0.7).filled())
                });

            if with_intervals {
                chart.draw_series(summaries.iter().map(|(i, summary)| {
                    let (left, right) = Self::bar_span(*i, operation);
                    ErrorBar::new_vertical(
                        (left + right) / 2.0,
                        summary.ci_lower_ns.max(0.0),
                        summary.mean_ns,
                        summary.ci_upper_ns,
                        BLACK.stroke_width(1),
                        8,
                    )
                }))?;
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }

    /// @ai:intent Generate both charts
    /// @ai:effects fs:write
    pub fn generate_all(
        &self,
        results: &BenchmarkResults,
        output_dir: &Path,
    ) -> Result<Vec<String>> {
        std::fs::create_dir_all(output_dir)?;

        self.generate_chart(
            results,
            &output_dir.join(AVERAGE_CHART),
            "Average Operation Time",
            false,
        )?;
        self.generate_chart(
            results,
            &output_dir.join(CONFIDENCE_CHART),
            "Average Operation Time with 95% Confidence Interval",
            true,
        )?;

        Ok(vec![AVERAGE_CHART.to_string(), CONFIDENCE_CHART.to_string()])
    }
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for ChartGenerator {
    fn name(&self) -> &'static str {
        "charts"
    }

    fn emit(&self, results: &BenchmarkResults, output_dir: &Path) -> Result<()> {
        let generated = self.generate_all(results, output_dir)?;
        tracing::debug!(files = ?generated, "Charts written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_results;
    use tempfile::TempDir;

    #[test]
    fn test_bar_spans_stay_inside_group() {
        let (first_left, _) = ChartGenerator::bar_span(1, OperationKind::Add);
        let (_, last_right) = ChartGenerator::bar_span(1, OperationKind::Remove);
        assert!((first_left - 0.6).abs() < 1e-9);
        assert!((last_right - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_y_max_covers_intervals() {
        let results = sample_results();
        assert!(ChartGenerator::y_max(&results, true) > 313.16);
        assert!(ChartGenerator::y_max(&results, false) >= 300.0);
    }

    #[test]
    fn test_generate_all_charts() {
        let generator = ChartGenerator::new();
        let temp = TempDir::new().unwrap();

        let files = generator.generate_all(&sample_results(), temp.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(temp.path().join(AVERAGE_CHART).exists());
        assert!(temp.path().join(CONFIDENCE_CHART).exists());
    }
}
