//! @ai:module:intent Set-backed container adapters
//! @ai:module:layer infrastructure
//! @ai:module:public_api HashSetContainer, BTreeSetContainer
//! @ai:module:stateless false
//! @ai:module:thread_safe false

use crate::container::kind::{ContainerKind, DuplicatePolicy};
use crate::container::LexemeContainer;
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasherDefault;

/// Unkeyed hasher so iteration order depends only on the stored lexemes.
type FixedState = BuildHasherDefault<DefaultHasher>;

/// @ai:intent Hash set adapter; duplicates are always skipped
#[derive(Debug, Default)]
pub struct HashSetContainer {
    items: HashSet<String, FixedState>,
}

impl HashSetContainer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LexemeContainer for HashSetContainer {
    fn kind(&self) -> ContainerKind {
        ContainerKind::HASH_SET
    }

    fn policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::Skip
    }

    fn insert(&mut self, lexeme: &str) -> bool {
        self.items.insert(lexeme.to_string())
    }

    fn contains(&self, lexeme: &str) -> bool {
        self.items.contains(lexeme)
    }

    fn remove(&mut self, lexeme: &str) -> bool {
        self.items.remove(lexeme)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    /// Order follows the fixed hasher, so equal histories give equal indices.
    fn get(&self, index: usize) -> Option<&str> {
        self.items.iter().nth(index).map(String::as_str)
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// @ai:intent Ordered set adapter; duplicates are always skipped
#[derive(Debug, Default)]
pub struct BTreeSetContainer {
    items: BTreeSet<String>,
}

impl BTreeSetContainer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LexemeContainer for BTreeSetContainer {
    fn kind(&self) -> ContainerKind {
        ContainerKind::BTREE_SET
    }

    fn policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::Skip
    }

    fn insert(&mut self, lexeme: &str) -> bool {
        self.items.insert(lexeme.to_string())
    }

    fn contains(&self, lexeme: &str) -> bool {
        self.items.contains(lexeme)
    }

    fn remove(&mut self, lexeme: &str) -> bool {
        self.items.remove(lexeme)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.items.iter().nth(index).map(String::as_str)
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
