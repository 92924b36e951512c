//! @ai:module:intent Define lexeme categories and their matching patterns
//! @ai:module:layer domain
//! @ai:module:public_api LexemeCategory, CategorySelection
//! @ai:module:stateless true

use crate::error::Error;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// @ai:intent Lexical category of a token, each owning exactly one pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexemeCategory {
    Keyword,
    Identifier,
    Operator,
    Delimiter,
    Literal,
    Comment,
}

const KEYWORD_PATTERN: &str = r"\b(abstract|continue|for|new|switch|assert|default|if|package|synchronized|boolean|do|goto|private|this|break|double|implements|protected|throw|byte|else|import|public|throws|case|enum|instanceof|return|transient|catch|extends|int|short|try|char|final|interface|static|void|class|finally|long|strictfp|volatile|const|float|native|super|while)\b";
const IDENTIFIER_PATTERN: &str = r"\b[a-zA-Z_][a-zA-Z0-9_]*\b";
const OPERATOR_PATTERN: &str = r"[+\-*/%=<>!&|]+";
const DELIMITER_PATTERN: &str = r"[{}();,]";
const LITERAL_PATTERN: &str = r#"".*?"|[0-9]+"#;
// The `s` flag lets block comments span lines, which a plain `/\*.*?\*/` would not.
// Nesting is not recognised.
const COMMENT_PATTERN: &str = r"//.*|(?s:/\*.*?\*/)";

// Indexed by `LexemeCategory as usize`, so the order must follow `LexemeCategory::ALL`.
static PATTERNS: LazyLock<[Regex; 6]> = LazyLock::new(|| {
    LexemeCategory::ALL.map(|category| {
        Regex::new(category.pattern_source()).expect("Invalid lexeme pattern")
    })
});

impl LexemeCategory {
    /// All categories in declaration order.
    pub const ALL: [LexemeCategory; 6] = [
        LexemeCategory::Keyword,
        LexemeCategory::Identifier,
        LexemeCategory::Operator,
        LexemeCategory::Delimiter,
        LexemeCategory::Literal,
        LexemeCategory::Comment,
    ];

    /// @ai:intent Get the regex source for this category
    /// @ai:effects pure
    pub fn pattern_source(&self) -> &'static str {
        match self {
            LexemeCategory::Keyword => KEYWORD_PATTERN,
            LexemeCategory::Identifier => IDENTIFIER_PATTERN,
            LexemeCategory::Operator => OPERATOR_PATTERN,
            LexemeCategory::Delimiter => DELIMITER_PATTERN,
            LexemeCategory::Literal => LITERAL_PATTERN,
            LexemeCategory::Comment => COMMENT_PATTERN,
        }
    }

    /// @ai:intent Get the compiled matcher for this category
    /// @ai:post the same Regex instance is returned for the process lifetime
    /// @ai:effects pure
    pub fn pattern(&self) -> &'static Regex {
        &PATTERNS[*self as usize]
    }

    /// @ai:intent Get category name as string
    /// @ai:effects pure
    pub fn name(&self) -> &'static str {
        match self {
            LexemeCategory::Keyword => "keyword",
            LexemeCategory::Identifier => "identifier",
            LexemeCategory::Operator => "operator",
            LexemeCategory::Delimiter => "delimiter",
            LexemeCategory::Literal => "literal",
            LexemeCategory::Comment => "comment",
        }
    }
}

impl fmt::Display for LexemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LexemeCategory {
    type Err = Error;

    /// @ai:intent Parse a category name, ignoring case
    /// @ai:example ("keyword") -> Ok(Keyword)
    /// @ai:example ("COMMENT") -> Ok(Comment)
    /// @ai:example ("macro") -> Err(UnknownCategory)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();

        LexemeCategory::ALL
            .into_iter()
            .find(|category| category.name() == wanted)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// @ai:intent Which categories a classification pass should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(LexemeCategory),
}

impl CategorySelection {
    /// @ai:intent List the categories covered by this selection
    /// @ai:effects pure
    pub fn categories(&self) -> Vec<LexemeCategory> {
        match self {
            CategorySelection::All => LexemeCategory::ALL.to_vec(),
            CategorySelection::Only(category) => vec![*category],
        }
    }
}

impl From<Option<LexemeCategory>> for CategorySelection {
    fn from(category: Option<LexemeCategory>) -> Self {
        category.map_or(CategorySelection::All, CategorySelection::Only)
    }
}

impl From<LexemeCategory> for CategorySelection {
    fn from(category: LexemeCategory) -> Self {
        CategorySelection::Only(category)
    }
}
