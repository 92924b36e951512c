//! @ai:module:intent Ordered per-category collection of distinct tokens
//! @ai:module:layer domain
//! @ai:module:public_api TokenSet
//! @ai:module:stateless true

use crate::category::LexemeCategory;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// @ai:intent Mapping from category to its distinct tokens in first-seen order
/// @ai:invariant a token appears at most once per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet {
    categories: IndexMap<LexemeCategory, IndexSet<String>>,
}

impl TokenSet {
    /// @ai:intent Create an empty token set
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Make sure a category is present, even if no token matched
    pub fn ensure_category(&mut self, category: LexemeCategory) {
        self.categories.entry(category).or_default();
    }

    /// @ai:intent Record a token under a category
    /// @ai:post returns false when the token was already recorded for the category
    pub fn insert(&mut self, category: LexemeCategory, token: impl Into<String>) -> bool {
        self.categories
            .entry(category)
            .or_default()
            .insert(token.into())
    }

    /// @ai:intent Get the tokens recorded for a category
    /// @ai:effects pure
    pub fn get(&self, category: LexemeCategory) -> Option<&IndexSet<String>> {
        self.categories.get(&category)
    }

    /// @ai:intent Check whether a category holds a token
    /// @ai:effects pure
    pub fn contains(&self, category: LexemeCategory, token: &str) -> bool {
        self.categories
            .get(&category)
            .is_some_and(|tokens| tokens.contains(token))
    }

    /// @ai:intent Iterate over categories and their tokens in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (LexemeCategory, &IndexSet<String>)> {
        self.categories.iter().map(|(category, tokens)| (*category, tokens))
    }

    /// Categories present, in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = LexemeCategory> + '_ {
        self.categories.keys().copied()
    }

    /// @ai:intent Flatten every category into a single ordered sequence
    /// @ai:post a token recorded under two categories appears twice
    /// @ai:effects pure
    pub fn flatten(&self) -> Vec<String> {
        self.categories
            .values()
            .flat_map(|tokens| tokens.iter().cloned())
            .collect()
    }

    /// @ai:intent Count tokens across all categories
    /// @ai:effects pure
    pub fn total(&self) -> usize {
        self.categories.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl FromIterator<(LexemeCategory, String)> for TokenSet {
    fn from_iter<I: IntoIterator<Item = (LexemeCategory, String)>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for (category, token) in iter {
            set.insert(category, token);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates_within_category() {
        let mut set = TokenSet::new();
        assert!(set.insert(LexemeCategory::Identifier, "x"));
        assert!(!set.insert(LexemeCategory::Identifier, "x"));
        assert!(set.insert(LexemeCategory::Keyword, "x"));
        assert_eq!(set.total(), 2);
    }

    #[test]
    fn test_flatten_keeps_order_and_cross_category_repeats() {
        let set: TokenSet = [
            (LexemeCategory::Keyword, "if".to_string()),
            (LexemeCategory::Identifier, "x".to_string()),
            (LexemeCategory::Keyword, "return".to_string()),
            (LexemeCategory::Identifier, "if".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.flatten(), vec!["if", "return", "x", "if"]);
    }

    #[test]
    fn test_empty_category_is_kept() {
        let mut set = TokenSet::new();
        set.ensure_category(LexemeCategory::Comment);
        assert!(set.is_empty());
        assert_eq!(set.categories().collect::<Vec<_>>(), vec![LexemeCategory::Comment]);
        assert_eq!(set.get(LexemeCategory::Comment).map(IndexSet::len), Some(0));
    }
}
