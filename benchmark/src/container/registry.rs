//! @ai:module:intent Build container adapters by kind name
//! @ai:module:layer application
//! @ai:module:public_api ContainerRegistry, ContainerSpec, ContainerFactory
//! @ai:module:stateless true

use crate::container::kind::{ContainerKind, DuplicatePolicy};
use crate::container::list::{DequeContainer, LinkedListContainer, QueueContainer, StackContainer};
use crate::container::set::{BTreeSetContainer, HashSetContainer};
use crate::container::LexemeContainer;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// @ai:intent Constructor for one container kind
pub type ContainerFactory = fn(DuplicatePolicy) -> Result<Box<dyn LexemeContainer>>;

/// @ai:intent A configured container: which kind and how it treats duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub kind: ContainerKind,
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

impl ContainerSpec {
    pub fn new(kind: ContainerKind, duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            kind,
            duplicate_policy,
        }
    }
}

/// @ai:intent Maps kind names to factories so new kinds need no engine changes
pub struct ContainerRegistry {
    factories: BTreeMap<ContainerKind, ContainerFactory>,
}

impl ContainerRegistry {
    /// @ai:intent Create an empty registry
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// @ai:intent Create a registry holding every built-in container kind
    /// @ai:effects pure
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(ContainerKind::LINKED_LIST, |policy| {
            Ok(Box::new(LinkedListContainer::new(policy)))
        });
        registry.register(ContainerKind::DEQUE, |policy| {
            Ok(Box::new(DequeContainer::new(policy)))
        });
        registry.register(ContainerKind::QUEUE, |policy| {
            Ok(Box::new(QueueContainer::new(policy)))
        });
        registry.register(ContainerKind::STACK, |policy| {
            Ok(Box::new(StackContainer::new(policy)))
        });
        registry.register(ContainerKind::HASH_SET, |policy| {
            require_skip(ContainerKind::HASH_SET, policy)?;
            Ok(Box::new(HashSetContainer::new()))
        });
        registry.register(ContainerKind::BTREE_SET, |policy| {
            require_skip(ContainerKind::BTREE_SET, policy)?;
            Ok(Box::new(BTreeSetContainer::new()))
        });
        registry
    }

    /// @ai:intent Add or replace the factory for a kind
    pub fn register(&mut self, kind: ContainerKind, factory: ContainerFactory) {
        self.factories.insert(kind, factory);
    }

    /// Registered kinds in name order.
    pub fn kinds(&self) -> impl Iterator<Item = &ContainerKind> {
        self.factories.keys()
    }

    /// @ai:intent Instantiate one container
    /// @ai:post Err(UnknownContainerKind) when the kind was never registered
    pub fn create(&self, spec: &ContainerSpec) -> Result<Box<dyn LexemeContainer>> {
        let factory = self
            .factories
            .get(&spec.kind)
            .ok_or_else(|| Error::UnknownContainerKind(spec.kind.to_string()))?;

        factory(spec.duplicate_policy)
    }

    /// @ai:intent Instantiate every configured container, preserving order
    /// @ai:pre specs name each kind at most once
    pub fn build(&self, specs: &[ContainerSpec]) -> Result<Vec<Box<dyn LexemeContainer>>> {
        for (i, spec) in specs.iter().enumerate() {
            if specs[..i].iter().any(|earlier| earlier.kind == spec.kind) {
                return Err(Error::InvalidConfig(format!(
                    "container kind '{}' is configured more than once",
                    spec.kind
                )));
            }
        }

        specs.iter().map(|spec| self.create(spec)).collect()
    }
}

impl Default for ContainerRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// @ai:intent Reject the allow policy for set kinds, which cannot hold duplicates
/// @ai:effects pure
fn require_skip(kind: ContainerKind, policy: DuplicatePolicy) -> Result<()> {
    match policy {
        DuplicatePolicy::Skip => Ok(()),
        DuplicatePolicy::Allow => Err(Error::UnsupportedPolicy {
            kind: kind.to_string(),
            policy: policy.to_string(),
        }),
    }
}
