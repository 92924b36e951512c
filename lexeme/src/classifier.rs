//! @ai:module:intent Classify source text into lexical categories
//! @ai:module:layer application
//! @ai:module:public_api classify, classify_file
//! @ai:module:depends_on category, token_set, error
//! @ai:module:stateless true

use crate::category::{CategorySelection, LexemeCategory};
use crate::error::{Error, Result};
use crate::token_set::TokenSet;
use std::path::Path;

/// @ai:intent Collect every distinct match of each selected category
/// @ai:pre source is not empty
/// @ai:post every selected category is present in the result, possibly with no tokens
/// @ai:example ("if (x)", Only(Keyword)) -> {keyword: ["if"]}
/// @ai:effects pure
/// @ai:idempotent true
pub fn classify(source: &str, selection: impl Into<CategorySelection>) -> Result<TokenSet> {
    if source.is_empty() {
        return Err(Error::InvalidInput("source text cannot be empty"));
    }

    let mut tokens = TokenSet::new();

    for category in selection.into().categories() {
        tokens.ensure_category(category);
        extract_category(source, category, &mut tokens);
    }

    Ok(tokens)
}

/// @ai:intent Read a file and classify its contents
/// @ai:pre path exists and is readable as UTF-8
/// @ai:effects fs:read
pub fn classify_file(path: &Path, selection: impl Into<CategorySelection>) -> Result<TokenSet> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    classify(&content, selection)
}

/// @ai:intent Run one category pattern over the whole text
/// @ai:effects pure
fn extract_category(source: &str, category: LexemeCategory, tokens: &mut TokenSet) {
    for found in category.pattern().find_iter(source) {
        tokens.insert(category, found.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SNIPPET: &str = "if (x > 5) { return x; } // note";

    fn tokens_of(source: &str, category: LexemeCategory) -> Vec<String> {
        let set = classify(source, category).unwrap();
        set.get(category).unwrap().iter().cloned().collect()
    }

    #[test]
    fn test_empty_source_is_rejected() {
        assert!(matches!(
            classify("", CategorySelection::All),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_snippet_keywords() {
        assert_eq!(tokens_of(SNIPPET, LexemeCategory::Keyword), vec!["if", "return"]);
    }

    #[test]
    fn test_snippet_delimiters_recorded_once() {
        assert_eq!(
            tokens_of(SNIPPET, LexemeCategory::Delimiter),
            vec!["(", ")", "{", ";", "}"]
        );
    }

    #[test]
    fn test_snippet_comment() {
        assert_eq!(tokens_of(SNIPPET, LexemeCategory::Comment), vec!["// note"]);
    }

    #[test]
    fn test_identifier_overlaps_keywords() {
        let ids = tokens_of(SNIPPET, LexemeCategory::Identifier);
        assert_eq!(ids, vec!["if", "x", "return", "note"]);
    }

    #[test]
    fn test_literals_are_lazy_strings_and_digit_runs() {
        let literals = tokens_of(r#"s = "a" + "b"; n = 42 + 7;"#, LexemeCategory::Literal);
        assert_eq!(literals, vec!["\"a\"", "\"b\"", "42", "7"]);
    }

    #[test]
    fn test_block_comment_stops_at_first_terminator() {
        let comments = tokens_of("/* one */ x /* two\n lines */", LexemeCategory::Comment);
        assert_eq!(comments, vec!["/* one */", "/* two\n lines */"]);
    }

    #[test]
    fn test_single_category_selection_only_contains_that_category() {
        let set = classify(SNIPPET, LexemeCategory::Operator).unwrap();
        assert_eq!(set.categories().collect::<Vec<_>>(), vec![LexemeCategory::Operator]);
        // "//" of the comment is an operator run too
        assert_eq!(
            set.get(LexemeCategory::Operator).unwrap().iter().collect::<Vec<_>>(),
            vec![">", "//"]
        );
    }

    #[test]
    fn test_all_categories_match_their_own_pattern() {
        let source = "public int sum(int a, int b) { /* add */ return a + b; } // done \"s\"";
        let set = classify(source, CategorySelection::All).unwrap();

        assert_eq!(set.categories().collect::<Vec<_>>(), LexemeCategory::ALL.to_vec());
        for (category, tokens) in set.iter() {
            for token in tokens {
                let whole = category
                    .pattern()
                    .find(token)
                    .is_some_and(|m| m.start() == 0 && m.end() == token.len());
                assert!(whole, "{token:?} does not fully match {category}");
            }
        }
    }

    #[test]
    fn test_classification_is_idempotent() {
        let source = "while (i < 10) { i = i + 1; }";
        let first = classify(source, CategorySelection::All).unwrap();
        let second = classify(source, CategorySelection::All).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "class A {{ int b = 1; }}").unwrap();

        let set = classify_file(file.path(), LexemeCategory::Keyword).unwrap();
        assert!(set.contains(LexemeCategory::Keyword, "class"));
        assert!(set.contains(LexemeCategory::Keyword, "int"));
    }

    #[test]
    fn test_classify_missing_file() {
        let result = classify_file(Path::new("/definitely/not/here.java"), CategorySelection::All);
        assert!(matches!(result, Err(Error::FileRead { .. })));
    }
}
