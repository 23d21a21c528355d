//! Error types for the top stories client.
//!
//! Every failure the client can surface has its own variant so callers can
//! branch on the kind of error instead of inspecting messages.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TopStoriesError>;

/// Errors that can occur while fetching or persisting top stories.
#[derive(Error, Debug)]
pub enum TopStoriesError {
    /// No API key was supplied, or the supplied key was blank.
    #[error("Missing API key")]
    MissingCredential,

    /// The section is not one of the sections served by the API.
    /// Raised before any request is sent.
    #[error("Invalid section: {0}")]
    InvalidSection(String),

    /// The response format is neither `json` nor `jsonp`.
    /// Raised before any request is sent.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The service rejected the API key.
    #[error("Invalid authentication credentials")]
    InvalidAuthentication,

    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// The HTTP status code
        status: u16,
        /// The raw response body
        body: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered successfully but the body was not a stories payload.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// What was wrong with the body
        message: String,
    },

    /// The output file could not be opened or written.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Records could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TopStoriesError {
    /// Returns true for errors raised by argument validation, before any
    /// network activity.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential | Self::InvalidSection(_) | Self::InvalidFormat(_)
        )
    }

    /// Returns true when the service rejected the API key.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::InvalidAuthentication)
    }

    /// Returns the HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
