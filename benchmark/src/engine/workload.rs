//! @ai:module:intent Default add/search/remove workload
//! @ai:module:layer application
//! @ai:module:public_api RandomWorkload
//! @ai:module:stateless true

use crate::engine::session::Session;
use crate::metrics::OperationKind;
use lexbench_lexeme::LexemeGenerator;
use rand::Rng;

/// @ai:intent Repeats a fixed cycle of operations on generated and sampled lexemes
/// @ai:context additions use freshly generated lexemes; searches and removals sample a stored one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomWorkload {
    repeat_count: u32,
    operations: Vec<OperationKind>,
}

impl RandomWorkload {
    pub fn new(repeat_count: u32, operations: Vec<OperationKind>) -> Self {
        Self {
            repeat_count,
            operations,
        }
    }

    /// @ai:intent Add, search then remove on every repetition
    /// @ai:effects pure
    pub fn standard(repeat_count: u32) -> Self {
        Self::new(repeat_count, OperationKind::ALL.to_vec())
    }

    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    pub fn operations(&self) -> &[OperationKind] {
        &self.operations
    }

    /// @ai:intent Drive the session through every repetition
    /// @ai:post searches and removals are skipped while nothing is stored
    /// @ai:effects time, rng, mutation
    pub fn execute<R: Rng>(&self, session: &mut Session<'_, R>) {
        for repetition in 1..=self.repeat_count {
            tracing::debug!(repetition, total = self.repeat_count, "Workload repetition");

            for &operation in &self.operations {
                match operation {
                    OperationKind::Add => {
                        let lexeme = LexemeGenerator::from_rng(session.rng()).generate_one();
                        tracing::debug!(lexeme, "Adding lexeme");
                        session.add_lexeme(lexeme);
                    }
                    OperationKind::Search => match session.sample_stored() {
                        Some(lexeme) => {
                            tracing::debug!(lexeme = %lexeme, "Searching lexeme");
                            session.search_lexeme(&lexeme);
                        }
                        None => tracing::debug!("Nothing stored to search"),
                    },
                    OperationKind::Remove => match session.sample_stored() {
                        Some(lexeme) => {
                            tracing::debug!(lexeme = %lexeme, "Removing lexeme");
                            session.remove_lexeme(&lexeme);
                        }
                        None => tracing::debug!("Nothing stored to remove"),
                    },
                }
            }
        }
    }
}
