//! @ai:module:intent Configuration structs for the benchmark harness
//! @ai:module:layer infrastructure
//! @ai:module:public_api BenchmarkConfig, RunConfig, PathConfig, ReportConfig, parse_operations
//! @ai:module:stateless true

use crate::container::{
    ContainerKind, ContainerRegistry, ContainerSpec, DuplicatePolicy, LexemeContainer,
};
use crate::error::{Error, Result};
use crate::metrics::OperationKind;
use anyhow::Context;
use lexbench_lexeme::LexemeCategory;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "lexbench.toml";

/// @ai:intent Main configuration for the benchmark harness
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default = "default_containers")]
    pub containers: Vec<ContainerSpec>,
}

/// @ai:intent Workload parameters of a run
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_repeat_count")]
    pub repeat_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Restrict the seeding token set to one lexeme category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<LexemeCategory>,
    #[serde(default = "default_operations")]
    pub operations: Vec<OperationKind>,
}

/// @ai:intent Input and output locations
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_source_file")]
    pub source_file: PathBuf,
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
}

/// @ai:intent Which report sinks run after a benchmark
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_true")]
    pub charts: bool,
    #[serde(default = "default_true")]
    pub json: bool,
    #[serde(default = "default_true")]
    pub markdown: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
            paths: PathConfig::default(),
            report: ReportConfig::default(),
            containers: default_containers(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            repeat_count: default_repeat_count(),
            seed: None,
            category: None,
            operations: default_operations(),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            source_file: default_source_file(),
            results_dir: default_results_dir(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            charts: true,
            json: true,
            markdown: true,
        }
    }
}

fn default_repeat_count() -> u32 {
    10
}

fn default_operations() -> Vec<OperationKind> {
    OperationKind::ALL.to_vec()
}

fn default_source_file() -> PathBuf {
    PathBuf::from("sample_code.txt")
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_true() -> bool {
    true
}

fn default_containers() -> Vec<ContainerSpec> {
    [
        ContainerKind::LINKED_LIST,
        ContainerKind::DEQUE,
        ContainerKind::QUEUE,
        ContainerKind::STACK,
        ContainerKind::HASH_SET,
        ContainerKind::BTREE_SET,
    ]
    .into_iter()
    .map(|kind| ContainerSpec::new(kind, DuplicatePolicy::Skip))
    .collect()
}

impl BenchmarkConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// @ai:intent Load the explicit file, else lexbench.toml if present, else defaults
    /// @ai:effects fs:read
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// @ai:intent Reject configurations no run could use
    /// @ai:effects pure
    pub fn validate(&self) -> Result<()> {
        if self.containers.is_empty() {
            return Err(Error::InvalidConfig("at least one container is required".to_string()));
        }
        Ok(())
    }

    /// @ai:intent Instantiate the configured containers in configuration order
    /// @ai:effects pure
    pub fn build_containers(
        &self,
        registry: &ContainerRegistry,
    ) -> Result<Vec<Box<dyn LexemeContainer>>> {
        self.validate()?;
        registry.build(&self.containers)
    }
}

/// @ai:intent Parse a comma-separated operation list such as "add,search,remove"
/// @ai:example ("add, remove") -> [Add, Remove]
/// @ai:effects pure
pub fn parse_operations(list: &str) -> Result<Vec<OperationKind>> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.run.repeat_count, 10);
        assert_eq!(config.run.operations, OperationKind::ALL.to_vec());
        assert_eq!(config.paths.source_file, PathBuf::from("sample_code.txt"));
        assert_eq!(config.containers.len(), 6);
        assert!(config.containers.iter().all(|c| c.duplicate_policy == DuplicatePolicy::Skip));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lexbench.toml");

        let mut config = BenchmarkConfig::default();
        config.run.seed = Some(99);
        config.run.category = Some(LexemeCategory::Operator);
        config.containers[0].duplicate_policy = DuplicatePolicy::Allow;
        config.save(&path).unwrap();

        let loaded = BenchmarkConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(
            &path,
            r#"
[run]
repeat_count = 3
operations = ["search", "add"]

[[containers]]
kind = "stack"
duplicate_policy = "allow"

[[containers]]
kind = "hash_set"
"#,
        )
        .unwrap();

        let config = BenchmarkConfig::load(&path).unwrap();
        assert_eq!(config.run.repeat_count, 3);
        assert_eq!(config.run.operations, vec![OperationKind::Search, OperationKind::Add]);
        assert_eq!(config.report, ReportConfig::default());
        assert_eq!(
            config.containers,
            vec![
                ContainerSpec::new(ContainerKind::STACK, DuplicatePolicy::Allow),
                ContainerSpec::new(ContainerKind::HASH_SET, DuplicatePolicy::Skip),
            ]
        );
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = BenchmarkConfig::load(Path::new("/nonexistent/lexbench.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_build_containers_keeps_order() {
        let config = BenchmarkConfig::default();
        let containers = config.build_containers(&ContainerRegistry::with_builtins()).unwrap();
        let kinds: Vec<_> = containers.iter().map(|c| c.kind()).collect();
        let expected: Vec<_> = config.containers.iter().map(|c| c.kind.clone()).collect();
        assert_eq!(kinds, expected);
    }

    #[test]
    fn test_empty_container_list_is_invalid() {
        let config = BenchmarkConfig {
            containers: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_parse_operations() {
        assert_eq!(
            parse_operations("add, remove").unwrap(),
            vec![OperationKind::Add, OperationKind::Remove]
        );
        assert!(matches!(
            parse_operations("add,insert"),
            Err(Error::UnknownOperationKind(name)) if name == "insert"
        ));
    }
}
