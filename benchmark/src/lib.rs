//! @ai:module:intent Container micro-benchmark library
//! @ai:module:layer application
//! @ai:module:public_api config, container, engine, error, host, metrics, pipeline, report, source

pub mod config;
pub mod container;
pub mod engine;
pub mod error;
pub mod host;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod source;

pub use config::BenchmarkConfig;
pub use container::{ContainerKind, ContainerRegistry, DuplicatePolicy, LexemeContainer};
pub use engine::{BenchmarkEngine, RandomWorkload, Session};
pub use error::{Error, Result};
pub use host::HostInfo;
pub use metrics::{BenchmarkResults, MetricsAggregator, OperationKind};
pub use pipeline::{run_benchmark, run_on_tokens};
pub use report::{ReportGenerator, ReportSink};
pub use source::{SourceLoader, SourceLoaderTrait};
