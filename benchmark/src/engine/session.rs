//! @ai:module:intent Handle given to a workload for driving every container at once
//! @ai:module:layer application
//! @ai:module:public_api Session
//! @ai:module:stateless false
//! @ai:module:thread_safe false

use crate::container::LexemeContainer;
use crate::engine::timer::measure;
use crate::metrics::{ContainerStats, OperationKind};
use rand::Rng;

/// @ai:intent Apply one operation to every container in order, timing and recording each call
/// @ai:pre containers.len() == stats.len()
/// @ai:effects time, mutation
pub(crate) fn apply_to_all(
    containers: &mut [Box<dyn LexemeContainer>],
    stats: &mut [ContainerStats],
    operation: OperationKind,
    lexeme: &str,
) {
    for (container, container_stats) in containers.iter_mut().zip(stats.iter_mut()) {
        let (hit, elapsed_ns) = match operation {
            OperationKind::Add => measure(|| container.insert(lexeme)),
            OperationKind::Search => measure(|| container.contains(lexeme)),
            OperationKind::Remove => measure(|| container.remove(lexeme)),
        };

        container_stats.bucket_mut(operation).record(elapsed_ns, hit);

        tracing::trace!(
            container = %container_stats.kind,
            operation = %operation,
            lexeme,
            hit,
            elapsed_ns,
            "Recorded operation"
        );
    }
}

/// @ai:intent Borrowed view of a running benchmark exposed to the workload
/// @ai:invariant lives only for the single workload invocation of one run
pub struct Session<'a, R> {
    containers: &'a mut [Box<dyn LexemeContainer>],
    stats: &'a mut [ContainerStats],
    rng: &'a mut R,
    calls: u64,
}

impl<'a, R: Rng> Session<'a, R> {
    pub(crate) fn new(
        containers: &'a mut [Box<dyn LexemeContainer>],
        stats: &'a mut [ContainerStats],
        rng: &'a mut R,
    ) -> Self {
        Self {
            containers,
            stats,
            rng,
            calls: 0,
        }
    }

    /// @ai:intent Insert the lexeme into every container
    /// @ai:effects time, mutation
    pub fn add_lexeme(&mut self, lexeme: &str) {
        self.apply(OperationKind::Add, lexeme);
    }

    /// @ai:intent Look the lexeme up in every container
    /// @ai:effects time
    pub fn search_lexeme(&mut self, lexeme: &str) {
        self.apply(OperationKind::Search, lexeme);
    }

    /// @ai:intent Remove one occurrence of the lexeme from every container
    /// @ai:effects time, mutation
    pub fn remove_lexeme(&mut self, lexeme: &str) {
        self.apply(OperationKind::Remove, lexeme);
    }

    /// @ai:intent Pick a stored lexeme uniformly at random from the reference container
    /// @ai:post None when the reference container is empty or no container is configured
    /// @ai:effects rng
    pub fn sample_stored(&mut self) -> Option<String> {
        let reference = self.containers.first()?;
        if reference.is_empty() {
            return None;
        }

        let index = self.rng.random_range(0..reference.len());
        reference.get(index).map(str::to_string)
    }

    /// Number of lexemes held by the reference container.
    pub fn stored_count(&self) -> usize {
        self.containers.first().map_or(0, |c| c.len())
    }

    pub fn rng(&mut self) -> &mut R {
        &mut *self.rng
    }

    /// Calls issued through this session so far.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    fn apply(&mut self, operation: OperationKind, lexeme: &str) {
        apply_to_all(self.containers, self.stats, operation, lexeme);
        self.calls += 1;
    }
}
