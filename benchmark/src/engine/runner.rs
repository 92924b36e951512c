//! @ai:module:intent Seed containers, run a workload and collect per-operation timings
//! @ai:module:layer application
//! @ai:module:public_api BenchmarkEngine
//! @ai:module:stateless false
//! @ai:module:thread_safe false

use crate::container::LexemeContainer;
use crate::engine::session::{apply_to_all, Session};
use crate::error::{Error, Result};
use crate::metrics::{
    BenchmarkResults, ContainerStats, MetricsAggregator, MetricsAggregatorTrait, OperationKind,
    RunInfo,
};
use lexbench_lexeme::TokenSet;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// @ai:intent Drives identical workloads against a fixed set of containers
/// @ai:invariant stats[i] always describes containers[i]
pub struct BenchmarkEngine<R: Rng = StdRng> {
    containers: Vec<Box<dyn LexemeContainer>>,
    stats: Vec<ContainerStats>,
    rng: R,
    seed: Option<u64>,
    aggregator: MetricsAggregator,
}

impl BenchmarkEngine<StdRng> {
    /// @ai:intent Create an engine with an OS-seeded random source
    /// @ai:effects rng
    pub fn new(containers: Vec<Box<dyn LexemeContainer>>) -> Self {
        Self::from_rng(containers, StdRng::from_os_rng())
    }

    /// @ai:intent Create a reproducible engine
    /// @ai:effects pure
    pub fn with_seed(containers: Vec<Box<dyn LexemeContainer>>, seed: u64) -> Self {
        let mut engine = Self::from_rng(containers, StdRng::seed_from_u64(seed));
        engine.seed = Some(seed);
        engine
    }
}

impl<R: Rng> BenchmarkEngine<R> {
    pub fn from_rng(containers: Vec<Box<dyn LexemeContainer>>, rng: R) -> Self {
        let stats = containers.iter().map(|c| ContainerStats::new(c.kind())).collect();

        Self {
            containers,
            stats,
            rng,
            seed: None,
            aggregator: MetricsAggregator::new(),
        }
    }

    pub fn containers(&self) -> &[Box<dyn LexemeContainer>] {
        &self.containers
    }

    /// Raw timings of the current or last run, in container order.
    pub fn stats(&self) -> &[ContainerStats] {
        &self.stats
    }

    /// @ai:intent Empty every container and zero every bucket
    /// @ai:post all three buckets exist and are empty for every container
    /// @ai:effects mutation
    pub fn reset(&mut self) {
        for container in self.containers.iter_mut() {
            container.clear();
        }
        self.stats = self
            .containers
            .iter()
            .map(|c| ContainerStats::new(c.kind()))
            .collect();
    }

    /// @ai:intent Choose the initial lexemes: a random-length prefix of the shuffled token set
    /// @ai:pre tokens holds at least one lexeme
    /// @ai:post 1 <= result.len() <= tokens.total()
    /// @ai:effects rng
    pub fn select_initial(&mut self, tokens: &TokenSet) -> Result<Vec<String>> {
        let mut lexemes = tokens.flatten();
        if lexemes.is_empty() {
            return Err(Error::NoLexemesAvailable);
        }

        lexemes.shuffle(&mut self.rng);
        let count = self.rng.random_range(1..=lexemes.len());
        lexemes.truncate(count);

        Ok(lexemes)
    }

    /// @ai:intent Insert every lexeme into every container, timing each insert as Add
    /// @ai:effects time, mutation
    pub fn seed(&mut self, lexemes: &[String]) {
        for lexeme in lexemes {
            tracing::debug!(lexeme = %lexeme, "Seeding lexeme");
            apply_to_all(&mut self.containers, &mut self.stats, OperationKind::Add, lexeme);
        }
    }

    /// @ai:intent Run one complete benchmark and summarize it
    /// @ai:pre tokens holds at least one lexeme
    /// @ai:post results hold one summary per container and operation
    /// @ai:effects time, rng, mutation
    pub fn run<F>(&mut self, tokens: &TokenSet, workload: F) -> Result<BenchmarkResults>
    where
        F: FnOnce(&mut Session<'_, R>),
    {
        self.reset();

        let initial = self.select_initial(tokens)?;
        tracing::info!(
            selected = initial.len(),
            available = tokens.total(),
            containers = self.containers.len(),
            "Seeding containers"
        );
        self.seed(&initial);

        let mut session = Session::new(&mut self.containers, &mut self.stats, &mut self.rng);
        workload(&mut session);
        let workload_calls = session.calls();

        let info = RunInfo {
            seed: self.seed,
            seeded_lexemes: initial.len(),
            workload_calls,
        };

        Ok(self.aggregator.aggregate(&self.stats, info))
    }
}
