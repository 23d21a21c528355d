use std::fmt;

use crate::errors::{Result, TopStoriesError};

/// API key attached to every request as the `api-key` query parameter.
///
/// Never empty. The value is otherwise opaque and kept verbatim. `Debug`
/// output is redacted so the key cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(TopStoriesError::MissingCredential);
        }
        Ok(Self(key))
    }

    /// Builds a key from an optional value, treating `None` as missing.
    pub fn from_option(key: Option<String>) -> Result<Self> {
        key.map_or(Err(TopStoriesError::MissingCredential), Self::new)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
