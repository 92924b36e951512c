//! @ai:module:intent Error types for the benchmark engine
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use thiserror::Error;

/// @ai:intent Failures that abort a benchmark run before or during timing
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Lexeme(#[from] lexbench_lexeme::Error),

    #[error("No lexemes available for performance analysis")]
    NoLexemesAvailable,

    #[error("Unknown operation kind: {0}")]
    UnknownOperationKind(String),

    #[error("Unknown container kind: {0}")]
    UnknownContainerKind(String),

    #[error("Container {kind} does not support duplicate policy '{policy}'")]
    UnsupportedPolicy { kind: String, policy: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
