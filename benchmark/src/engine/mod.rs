//! @ai:module:intent Benchmark engine: seeding, workload sessions and timing
//! @ai:module:layer application
//! @ai:module:public_api BenchmarkEngine, Session, RandomWorkload, measure

pub mod runner;
pub mod session;
pub mod timer;
pub mod workload;

pub use runner::BenchmarkEngine;
pub use session::Session;
pub use timer::measure;
pub use workload::RandomWorkload;
