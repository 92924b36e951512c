//! @ai:module:intent Sequence-backed container adapters (linked list, deque, queue, stack)
//! @ai:module:layer infrastructure
//! @ai:module:public_api LinkedListContainer, DequeContainer, QueueContainer, StackContainer
//! @ai:module:stateless false
//! @ai:module:thread_safe false

use crate::container::kind::{ContainerKind, DuplicatePolicy};
use crate::container::LexemeContainer;
use std::collections::{LinkedList, VecDeque};

/// @ai:intent Doubly linked list adapter
#[derive(Debug, Default)]
pub struct LinkedListContainer {
    policy: DuplicatePolicy,
    items: LinkedList<String>,
}

impl LinkedListContainer {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            items: LinkedList::new(),
        }
    }
}

impl LexemeContainer for LinkedListContainer {
    fn kind(&self) -> ContainerKind {
        ContainerKind::LINKED_LIST
    }

    fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    fn insert(&mut self, lexeme: &str) -> bool {
        if self.policy == DuplicatePolicy::Skip && self.contains(lexeme) {
            return false;
        }
        self.items.push_back(lexeme.to_string());
        true
    }

    fn contains(&self, lexeme: &str) -> bool {
        self.items.iter().any(|item| item == lexeme)
    }

    /// @ai:intent Unlink the first node holding the lexeme
    /// @ai:complexity O(n)
    fn remove(&mut self, lexeme: &str) -> bool {
        let Some(position) = self.items.iter().position(|item| item == lexeme) else {
            return false;
        };

        let mut tail = self.items.split_off(position);
        tail.pop_front();
        self.items.append(&mut tail);
        true
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

/// @ai:intent Double-ended queue adapter with removal by index
#[derive(Debug, Default)]
pub struct DequeContainer {
    policy: DuplicatePolicy,
    items: VecDeque<String>,
}

impl DequeContainer {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            items: VecDeque::new(),
        }
    }
}

impl LexemeContainer for DequeContainer {
    fn kind(&self) -> ContainerKind {
        ContainerKind::DEQUE
    }

    fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    fn insert(&mut self, lexeme: &str) -> bool {
        if self.policy == DuplicatePolicy::Skip && self.contains(lexeme) {
            return false;
        }
        self.items.push_back(lexeme.to_string());
        true
    }

    fn contains(&self, lexeme: &str) -> bool {
        self.items.iter().any(|item| item == lexeme)
    }

    fn remove(&mut self, lexeme: &str) -> bool {
        let position = self.items.iter().position(|item| item == lexeme);
        position
            .and_then(|position| self.items.remove(position))
            .is_some()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// @ai:intent FIFO queue adapter restricted to enqueue/dequeue
/// @ai:context removal by value cycles the whole queue once, the only way a queue
/// can reach an inner element
#[derive(Debug, Default)]
pub struct QueueContainer {
    policy: DuplicatePolicy,
    items: VecDeque<String>,
}

impl QueueContainer {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            items: VecDeque::new(),
        }
    }
}

impl LexemeContainer for QueueContainer {
    fn kind(&self) -> ContainerKind {
        ContainerKind::QUEUE
    }

    fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    fn insert(&mut self, lexeme: &str) -> bool {
        if self.policy == DuplicatePolicy::Skip && self.contains(lexeme) {
            return false;
        }
        self.items.push_back(lexeme.to_string());
        true
    }

    fn contains(&self, lexeme: &str) -> bool {
        self.items.iter().any(|item| item == lexeme)
    }

    /// @ai:intent Dequeue every element, re-enqueueing all but the first match
    /// @ai:post relative order of the remaining elements is unchanged
    fn remove(&mut self, lexeme: &str) -> bool {
        let mut removed = false;

        for _ in 0..self.items.len() {
            let Some(front) = self.items.pop_front() else {
                break;
            };

            if !removed && front == lexeme {
                removed = true;
                continue;
            }
            self.items.push_back(front);
        }

        removed
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// @ai:intent LIFO stack adapter; search and removal start from the top
#[derive(Debug, Default)]
pub struct StackContainer {
    policy: DuplicatePolicy,
    items: Vec<String>,
}

impl StackContainer {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            items: Vec::new(),
        }
    }
}

impl LexemeContainer for StackContainer {
    fn kind(&self) -> ContainerKind {
        ContainerKind::STACK
    }

    fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    fn insert(&mut self, lexeme: &str) -> bool {
        if self.policy == DuplicatePolicy::Skip && self.contains(lexeme) {
            return false;
        }
        self.items.push(lexeme.to_string());
        true
    }

    fn contains(&self, lexeme: &str) -> bool {
        self.items.iter().rev().any(|item| item == lexeme)
    }

    fn remove(&mut self, lexeme: &str) -> bool {
        match self.items.iter().rposition(|item| item == lexeme) {
            Some(position) => {
                self.items.remove(position);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_lists(policy: DuplicatePolicy) -> Vec<Box<dyn LexemeContainer>> {
        vec![
            Box::new(LinkedListContainer::new(policy)),
            Box::new(DequeContainer::new(policy)),
            Box::new(QueueContainer::new(policy)),
            Box::new(StackContainer::new(policy)),
        ]
    }

    fn stored(container: &dyn LexemeContainer) -> Vec<&str> {
        (0..container.len()).filter_map(|i| container.get(i)).collect()
    }

    #[test]
    fn test_skip_policy_rejects_duplicates() {
        for mut container in all_lists(DuplicatePolicy::Skip) {
            assert!(container.insert("a"));
            assert!(container.insert("b"));
            assert!(!container.insert("a"), "{}", container.kind());
            assert_eq!(container.len(), 2, "{}", container.kind());
        }
    }

    #[test]
    fn test_allow_policy_keeps_duplicates() {
        for mut container in all_lists(DuplicatePolicy::Allow) {
            assert!(container.insert("a"));
            assert!(container.insert("a"));
            assert_eq!(container.len(), 2);

            assert!(container.remove("a"));
            assert!(container.contains("a"), "{} removed both copies", container.kind());
            assert!(container.remove("a"));
            assert!(!container.contains("a"));
        }
    }

    #[test]
    fn test_remove_absent_returns_false() {
        for mut container in all_lists(DuplicatePolicy::Skip) {
            container.insert("x");
            assert!(!container.remove("y"));
            assert_eq!(container.len(), 1);
        }
    }

    #[test]
    fn test_remove_keeps_order_of_remaining() {
        for mut container in all_lists(DuplicatePolicy::Skip) {
            for lexeme in ["a", "b", "c", "d"] {
                container.insert(lexeme);
            }
            assert!(container.remove("b"));
            assert_eq!(stored(container.as_ref()), vec!["a", "c", "d"], "{}", container.kind());
        }
    }

    #[test]
    fn test_stack_removes_topmost_duplicate() {
        let mut stack = StackContainer::new(DuplicatePolicy::Allow);
        for lexeme in ["x", "y", "x"] {
            stack.insert(lexeme);
        }
        stack.remove("x");
        assert_eq!(stored(&stack), vec!["x", "y"]);
    }

    #[test]
    fn test_clear_empties_container() {
        for mut container in all_lists(DuplicatePolicy::Skip) {
            container.insert("a");
            container.clear();
            assert!(container.is_empty());
            assert_eq!(container.get(0), None);
        }
    }
}
