//! @ai:module:intent Uniform insert/contains/remove surface over benchmarked containers
//! @ai:module:layer domain
//! @ai:module:public_api LexemeContainer, ContainerKind, DuplicatePolicy, ContainerRegistry, ContainerSpec
//! @ai:module:thread_safe false

pub mod kind;
pub mod list;
pub mod registry;
pub mod set;

pub use kind::{ContainerKind, DuplicatePolicy};
pub use list::{DequeContainer, LinkedListContainer, QueueContainer, StackContainer};
pub use registry::{ContainerFactory, ContainerRegistry, ContainerSpec};
pub use set::{BTreeSetContainer, HashSetContainer};

/// @ai:intent Calling convention shared by every benchmarked container
/// @ai:invariant the duplicate policy of an instance never changes
/// @ai:assumes single-threaded access; adapters perform no synchronization
pub trait LexemeContainer {
    /// @ai:intent Name of the container variant
    fn kind(&self) -> ContainerKind;

    /// @ai:intent Duplicate handling applied by insert
    fn policy(&self) -> DuplicatePolicy;

    /// @ai:intent Store a lexeme
    /// @ai:post returns false, leaving the container unchanged, when the policy skips a duplicate
    fn insert(&mut self, lexeme: &str) -> bool;

    /// @ai:intent Check whether a lexeme is stored
    fn contains(&self, lexeme: &str) -> bool;

    /// @ai:intent Remove one stored occurrence of a lexeme
    /// @ai:post returns false when the lexeme is absent
    fn remove(&mut self, lexeme: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// @ai:intent Get the lexeme at a position of the container's natural iteration order
    fn get(&self, index: usize) -> Option<&str>;

    fn clear(&mut self);
}
