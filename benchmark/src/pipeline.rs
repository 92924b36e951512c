//! @ai:module:intent Wire source loading, containers, engine and workload into one run
//! @ai:module:layer application
//! @ai:module:public_api run_benchmark, run_on_tokens

use crate::config::BenchmarkConfig;
use crate::container::ContainerRegistry;
use crate::engine::{BenchmarkEngine, RandomWorkload};
use crate::metrics::BenchmarkResults;
use crate::source::{SourceLoader, SourceLoaderTrait};
use anyhow::{Context, Result};
use lexbench_lexeme::{CategorySelection, TokenSet};

/// @ai:intent Load and classify the configured source, then benchmark every configured container
/// @ai:effects fs:read, time, rng
pub fn run_benchmark(
    config: &BenchmarkConfig,
    registry: &ContainerRegistry,
) -> Result<BenchmarkResults> {
    let source = SourceLoader::new().load(&config.paths.source_file)?;
    tracing::info!(
        "Loaded {} source file(s) from {}",
        source.files.len(),
        config.paths.source_file.display()
    );

    let selection = CategorySelection::from(config.run.category);
    let tokens = source.classify(selection).context("Failed to classify source")?;
    for (category, lexemes) in tokens.iter() {
        tracing::info!("{}: {} lexemes", category, lexemes.len());
    }

    run_on_tokens(config, registry, &tokens)
}

/// @ai:intent Benchmark the configured containers against an already classified token set
/// @ai:pre tokens holds at least one lexeme
/// @ai:effects time, rng
pub fn run_on_tokens(
    config: &BenchmarkConfig,
    registry: &ContainerRegistry,
    tokens: &TokenSet,
) -> Result<BenchmarkResults> {
    let containers = config
        .build_containers(registry)
        .context("Failed to build containers")?;

    let mut engine = match config.run.seed {
        Some(seed) => BenchmarkEngine::with_seed(containers, seed),
        None => BenchmarkEngine::new(containers),
    };

    let workload = RandomWorkload::new(config.run.repeat_count, config.run.operations.clone());
    tracing::info!(
        "Running {} repetitions of [{}]",
        workload.repeat_count(),
        workload
            .operations()
            .iter()
            .map(|op| op.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let results = engine.run(tokens, |session| workload.execute(session))?;
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{ContainerKind, ContainerSpec, DuplicatePolicy};
    use crate::error::Error;
    use crate::metrics::OperationKind;
    use lexbench_lexeme::LexemeCategory;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir, source: &str) -> BenchmarkConfig {
        let path = dir.path().join("Sample.java");
        std::fs::write(&path, source).unwrap();

        let mut config = BenchmarkConfig::default();
        config.paths.source_file = path;
        config.run.seed = Some(17);
        config.run.repeat_count = 4;
        config
    }

    #[test]
    fn test_run_benchmark_covers_configured_containers() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, "public class A { int x = 1; }");

        let results = run_benchmark(&config, &ContainerRegistry::with_builtins()).unwrap();

        assert_eq!(results.containers.len(), config.containers.len());
        assert_eq!(results.seed, Some(17));
        assert_eq!(results.workload_calls, 12);
        for kind in &results.containers {
            assert_eq!(results.summary(kind, OperationKind::Search).unwrap().count, 4);
        }
    }

    #[test]
    fn test_category_filter_without_matches_fails() {
        let dir = TempDir::new().unwrap();
        let mut config = config_for(&dir, "int x = 1;");
        config.run.category = Some(LexemeCategory::Comment);

        let err = run_benchmark(&config, &ContainerRegistry::with_builtins()).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::NoLexemesAvailable)));
    }

    #[test]
    fn test_unsupported_policy_is_reported() {
        let mut config = BenchmarkConfig::default();
        config.containers =
            vec![ContainerSpec::new(ContainerKind::HASH_SET, DuplicatePolicy::Allow)];

        let tokens: TokenSet = [(LexemeCategory::Keyword, "if".to_string())].into_iter().collect();
        let err = run_on_tokens(&config, &ContainerRegistry::with_builtins(), &tokens).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnsupportedPolicy { .. })
        ));
    }
}
