//! Error types for the properties module

/// Generic error type for properties operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic error with a message
    #[error("Error: {0}")]
    Generic(String),
    /// An IO error occurred
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    /// The properties text is malformed
    #[error("Parse error on line {line}: {message}")]
    ParseError {
        /// 1-based line where the faulty entry starts
        line: usize,
        /// Description of the problem
        message: String,
    },
    /// Generic internal error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
