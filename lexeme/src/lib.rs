//! @ai:module:intent Lexeme classification library for benchmark workloads
//! @ai:module:layer infrastructure
//! @ai:module:public_api category, classifier, generator, token_set, output, error
//! @ai:module:stateless true
//!
//! # Lexeme Classifier
//!
//! Splits source text into flat lexical categories (keywords, identifiers,
//! operators, delimiters, literals and comments) with one regular expression
//! per category, and generates synthetic lexemes for benchmark workloads.
//!
//! ## Example
//!
//! ```rust
//! use lexbench_lexeme::{classify, LexemeCategory};
//!
//! let tokens = classify("if (x > 5) { return x; } // note", LexemeCategory::Keyword).unwrap();
//! let keywords: Vec<_> = tokens.get(LexemeCategory::Keyword).unwrap().iter().collect();
//! assert_eq!(keywords, ["if", "return"]);
//! ```

pub mod category;
pub mod classifier;
pub mod error;
pub mod generator;
pub mod output;
pub mod token_set;

pub use category::{CategorySelection, LexemeCategory};
pub use classifier::{classify, classify_file};
pub use error::{Error, Result};
pub use generator::LexemeGenerator;
pub use output::{format_lexemes, format_token_set, OutputFormat};
pub use token_set::TokenSet;
