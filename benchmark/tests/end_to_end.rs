use lexbench::config::{BenchmarkConfig, ReportConfig};
use lexbench::container::{ContainerKind, ContainerRegistry};
use lexbench::metrics::OperationKind;
use lexbench::report::{JsonReporter, ReportGenerator};
use lexbench::run_benchmark;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_config() -> BenchmarkConfig {
    let mut config = BenchmarkConfig::default();
    config.paths.source_file = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("sample_code.txt");
    config.run.seed = Some(2024);
    config.run.repeat_count = 10;
    config
}

#[test]
fn test_sample_run_reports_every_pair() {
    let config = sample_config();
    let results = run_benchmark(&config, &ContainerRegistry::with_builtins()).unwrap();

    assert_eq!(results.containers.len(), 6);
    assert_eq!(results.summaries.len(), 18);
    assert_eq!(results.workload_calls, 30);

    for kind in &results.containers {
        let add = results.summary(kind, OperationKind::Add).unwrap();
        assert_eq!(add.count, results.seeded_lexemes as u64 + 10);
        assert!(add.ci_lower_ns <= add.mean_ns && add.mean_ns <= add.ci_upper_ns);

        let search = results.summary(kind, OperationKind::Search).unwrap();
        assert_eq!(search.count, 10);
    }

    let reference = results.summary(&ContainerKind::LINKED_LIST, OperationKind::Search).unwrap();
    assert_eq!(reference.misses, 0);
}

#[test]
fn test_reports_written_and_reloaded() {
    let temp = TempDir::new().unwrap();
    let config = sample_config();
    let results = run_benchmark(&config, &ContainerRegistry::with_builtins()).unwrap();

    let report_config = ReportConfig {
        charts: false,
        ..ReportConfig::default()
    };
    ReportGenerator::from_config(&report_config)
        .generate_all(&results, temp.path())
        .unwrap();

    assert!(temp.path().join("results.md").exists());
    assert!(!temp.path().join("average_performance.png").exists());

    let reloaded = JsonReporter::load(&temp.path().join("results.json")).unwrap();
    assert_eq!(reloaded.containers, results.containers);
    assert_eq!(reloaded.seeded_lexemes, results.seeded_lexemes);
}

#[test]
fn test_same_seed_same_workload_shape() {
    let config = sample_config();
    let registry = ContainerRegistry::with_builtins();

    let first = run_benchmark(&config, &registry).unwrap();
    let second = run_benchmark(&config, &registry).unwrap();

    let shape = |r: &lexbench::BenchmarkResults| -> Vec<(u64, u64)> {
        r.summaries.iter().map(|s| (s.count, s.misses)).collect()
    };
    assert_eq!(first.seeded_lexemes, second.seeded_lexemes);
    assert_eq!(shape(&first), shape(&second));
}
