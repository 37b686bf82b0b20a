//! Load Error Types
//!
//! Every way the appointment feed can fail. The variants only matter for
//! diagnostics: all of them surface to the user as the same message.

use thiserror::Error;

/// Message shown to the user whenever the feed cannot be loaded
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load appointments. Please try again later.";

/// Errors produced while loading the appointment feed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The request could not complete (DNS, refused connection, timeout, abort)
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a status outside 200..=299
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// The body was not a JSON array of appointment records
    #[error("Parse error: {0}")]
    Parse(String),
}

impl LoadError {
    /// Short stable code for logs and error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Network(_) => "network",
            LoadError::Http { .. } => "http",
            LoadError::Parse(_) => "parse",
        }
    }

    /// The user-facing message, identical for every kind
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e.to_string())
    }
}
