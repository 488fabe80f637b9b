//! Error types for lexing, parsing, path resolution, and mutation.

use thiserror::Error;

/// Errors produced by the document engine.
///
/// Every operation returns a definite outcome through these variants; no
/// core code path panics or terminates the process. Lex and parse errors
/// carry the 1-based line and column where the input went wrong.
#[derive(Error, Debug)]
pub enum JedError {
    /// Unexpected character, unterminated string, or invalid keyword.
    #[error("lex error at line {line}, column {column}: {message}")]
    Lex {
        line: usize,
        column: usize,
        message: String,
    },

    /// Grammar mismatch while building or checking a tree.
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// A path segment failed to resolve.
    #[error("path '{path}': {reason}")]
    Path { path: String, reason: String },

    /// A resolvable path that the requested mutation cannot be applied to.
    #[error("cannot modify '{path}': {reason}")]
    Mutation { path: String, reason: String },

    /// Document file handling (open/save).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout jed-core.
pub type Result<T> = std::result::Result<T, JedError>;
