//! @ai:module:intent Generate synthetic lexemes for workload augmentation
//! @ai:module:layer domain
//! @ai:module:public_api LexemeGenerator, KEYWORDS, OPERATORS, DELIMITERS
//! @ai:module:stateless false

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

pub const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while",
];

pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "++", "--", "==", "!=", "<", ">", "<=", ">=", "&&", "||", "!", "&",
    "|", "^", "~", "<<", ">>", ">>>", "=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=",
    ">>=", ">>>=",
];

pub const DELIMITERS: &[&str] = &[";", ",", "(", ")", "{", "}", "[", "]"];

const POOLS: [&[&str]; 3] = [KEYWORDS, OPERATORS, DELIMITERS];

/// @ai:intent Picks random keywords, operators and delimiters
/// @ai:assumes pools are non-empty
pub struct LexemeGenerator<R = StdRng> {
    rng: R,
}

impl LexemeGenerator<StdRng> {
    /// @ai:intent Create a generator seeded from the operating system
    /// @ai:effects random
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// @ai:intent Create a reproducible generator
    /// @ai:effects pure
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for LexemeGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> LexemeGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// @ai:intent Pick a pool uniformly, then a lexeme uniformly within it
    /// @ai:post result is a member of KEYWORDS, OPERATORS or DELIMITERS
    pub fn generate_one(&mut self) -> &'static str {
        let pool = POOLS[self.rng.random_range(0..POOLS.len())];
        pool.choose(&mut self.rng).copied().unwrap_or_default()
    }

    /// @ai:intent Generate a sequence of random lexemes
    /// @ai:post result.len() == count
    pub fn generate_many(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate_one().to_string()).collect()
    }
}
