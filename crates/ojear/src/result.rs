//! Result and error types for Ojear.

use thiserror::Error;

/// Result type for Ojear operations
pub type OjearResult<T> = Result<T, OjearError>;

/// Errors that can occur in Ojear
#[derive(Debug, Error)]
pub enum OjearError {
    /// Component description could not be mounted
    #[error("Render failed: {message}")]
    Render {
        /// What was malformed about the description
        message: String,
    },

    /// Required text was not found in the render tree
    #[error("Unable to find text matching {pattern:?}. Available text: {available:?}")]
    TextNotFound {
        /// The pattern that was searched for
        pattern: String,
        /// Text content of every text node in the tree, document order
        available: Vec<String>,
    },

    /// A strict single-match query matched more than one node
    #[error("Found {} nodes matching {pattern:?}: {matches:?}", matches.len())]
    AmbiguousText {
        /// The pattern that was searched for
        pattern: String,
        /// Text content of every matching node, document order
        matches: Vec<String>,
    },

    /// Regex pattern failed to compile
    #[error("Invalid pattern {pattern:?}: {message}")]
    InvalidPattern {
        /// The offending pattern source
        pattern: String,
        /// Compiler error message
        message: String,
    },

    /// Assertion referenced a matcher not present in the registry
    #[error("Unknown matcher {name:?}. Register it before asserting")]
    UnknownMatcher {
        /// The requested matcher name
        name: String,
    },

    /// Assertion failed
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Diagnostic message
        message: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OjearError {
    /// Create a render error
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create an assertion failure
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            message: message.into(),
        }
    }
}
