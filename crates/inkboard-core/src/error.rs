//! Error types for board operations.

use thiserror::Error;

/// Errors raised while building or querying elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A tool kind with no element geometry reached the factory, or a tool
    /// name could not be parsed.
    #[error("Invalid tool kind: {0}")]
    InvalidToolKind(String),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
