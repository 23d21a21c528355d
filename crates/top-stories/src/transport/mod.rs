//! HTTP transport seam.
//!
//! [`StoriesClient`](crate::StoriesClient) talks to the network only through the
//! [`Transport`] trait, so the request/response primitive can be swapped out
//! (e.g. for a canned transport in tests).

mod http;

pub use http::HttpTransport;

use serde::de::DeserializeOwned;

use crate::errors::{Result, TopStoriesError};

/// A blocking `GET` primitive.
///
/// Implementations return `Err` only when no response was obtained. Responses
/// with a non-success status are returned as-is; callers decide when to call
/// [`TransportResponse::error_for_status`].
pub trait Transport: Send + Sync {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<TransportResponse>;
}

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    status: u16,
    body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn into_text(self) -> String {
        self.body
    }

    /// Parses the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }

    /// Fails with [`TopStoriesError::Http`] unless the status is 2xx.
    pub fn error_for_status(&self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(TopStoriesError::Http {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_for_status() {
        assert!(TransportResponse::new(200, "{}").error_for_status().is_ok());
        assert!(TransportResponse::new(204, "").error_for_status().is_ok());

        let err = TransportResponse::new(404, "Not Found")
            .error_for_status()
            .unwrap_err();
        assert!(matches!(
            err,
            TopStoriesError::Http { status: 404, ref body } if body == "Not Found"
        ));
    }

    #[test]
    fn test_json() {
        let response = TransportResponse::new(200, r#"{"status":"OK"}"#);
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["status"], "OK");

        let response = TransportResponse::new(200, "homeTopStoriesCallback({})");
        assert!(response.json::<serde_json::Value>().is_err());
    }
}
