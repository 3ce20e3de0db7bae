//! Error types for unit parsing

use thiserror::Error;

/// Errors raised while parsing a symbolic unit expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitParseError {
    /// The symbol (or one of its factors) is not in the registry
    #[error("unrecognized unit symbol '{0}'")]
    UnknownSymbol(String),

    /// The expression is structurally broken (dangling separator, bad exponent, ...)
    #[error("malformed unit expression '{input}': {reason}")]
    Malformed {
        /// The full expression that failed to parse
        input: String,
        /// What exactly went wrong
        reason: String,
    },

    /// The expression was empty or whitespace-only
    #[error("empty unit expression")]
    Empty,
}

/// Result type for unit parsing operations
pub type Result<T> = std::result::Result<T, UnitParseError>;
