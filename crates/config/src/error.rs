//! Error types for the configuration module

/// Errors that can occur during configuration operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic error with a message
    #[error("Error: {0}")]
    Generic(String),

    /// An error that occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The key does not name a configuration field
    #[error("invalid key: '{key}' is not a valid configuration key.{}", suggestion_hint(.suggestion))]
    InvalidKey {
        /// The key that was given
        key: String,
        /// The closest valid key, if any is close enough
        suggestion: Option<String>,
    },
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    suggestion.as_ref().map(|key| format!(" did you mean '{key}'?")).unwrap_or_default()
}
