//! Error types shared by the common utilities

/// Generic error type for assist common utilities
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic error
    #[error("Error: {0}")]
    Generic(String),
    /// An IO error occurred
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    /// A string could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),
}
