//! Top Stories API client.
//!
//! The client validates the section and format against their closed sets,
//! performs exactly one request per call through a [`Transport`], and
//! classifies the outcome:
//!
//! 1. invalid section / format: rejected before any request
//! 2. body reporting invalid credentials: [`TopStoriesError::InvalidAuthentication`]
//! 3. any other non-2xx status: [`TopStoriesError::Http`]
//! 4. `json`: the `results` array, `jsonp`: the raw body
//!
//! API documentation: https://developer.nytimes.com/docs/top-stories-product/1/overview

use std::fmt;
use std::path::Path;

use log::{debug, warn};

use crate::config::{ClientConfig, API_KEY_ENV};
use crate::errors::{Result, TopStoriesError};
use crate::models::{
    ApiKey, ErrorResponse, FormatType, Section, StoriesResult, StoryRecord, TopStoriesResponse,
};
use crate::storage;
use crate::transport::{HttpTransport, Transport, TransportResponse};

const API_KEY_PARAM: &str = "api-key";
const INVALID_CREDENTIALS_MESSAGE: &str = "invalid authentication credentials";

/// Client for the Top Stories API.
///
/// Holds only immutable state; every call is an independent request.
///
/// # Example
///
/// ```ignore
/// let client = StoriesClient::new("your-api-key")?;
/// let stories = client.fetch("science", None, false)?;
/// ```
pub struct StoriesClient<T: Transport = HttpTransport> {
    api_key: ApiKey,
    config: ClientConfig,
    transport: T,
}

impl StoriesClient<HttpTransport> {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TopStoriesError::MissingCredential`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Creates a client with an explicit configuration.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let api_key = ApiKey::new(api_key)?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            api_key,
            config,
            transport,
        })
    }

    /// Creates a client from `TOPSTORIES_API_KEY` and [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env();
        let api_key = ApiKey::from_option(std::env::var(API_KEY_ENV).ok())?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            api_key,
            config,
            transport,
        })
    }
}

impl<T: Transport> StoriesClient<T> {
    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(api_key: impl Into<String>, transport: T) -> Result<Self> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            config: ClientConfig::default(),
            transport,
        })
    }

    /// Replaces the configuration. Only `base_url` is used by the client
    /// itself; timeouts belong to the transport.
    pub fn configure(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the top stories for `section`.
    ///
    /// # Arguments
    ///
    /// * `section` - A section identifier such as `"home"` or `"science"`
    /// * `format` - `"json"` (default when `None`) or `"jsonp"`
    /// * `as_json_string` - Return `json` results as a JSON string instead of
    ///   parsed records. Ignored for `jsonp`, which is already text.
    ///
    /// # Errors
    ///
    /// Validation errors are returned before any request is sent. See the
    /// module docs for the order in which response errors are classified.
    pub fn fetch(
        &self,
        section: &str,
        format: Option<&str>,
        as_json_string: bool,
    ) -> Result<StoriesResult> {
        let section: Section = section.parse()?;
        let format = match format {
            Some(format) => format.parse()?,
            None => FormatType::default(),
        };
        self.fetch_section(section, format, as_json_string)
    }

    /// Typed variant of [`fetch`](Self::fetch).
    pub fn fetch_section(
        &self,
        section: Section,
        format: FormatType,
        as_json_string: bool,
    ) -> Result<StoriesResult> {
        let url = self.config.endpoint(section.as_str(), format.as_str());
        debug!("Top stories request: section={} format={}", section, format);

        let response = self
            .transport
            .get(&url, &[(API_KEY_PARAM, self.api_key.expose())])?;

        if is_invalid_credentials(&response) {
            warn!(
                "Top stories request for {} rejected: invalid credentials (HTTP {})",
                section,
                response.status()
            );
            return Err(TopStoriesError::InvalidAuthentication);
        }

        if let Err(e) = response.error_for_status() {
            warn!(
                "Top stories request for {} failed: HTTP {}",
                section,
                response.status()
            );
            return Err(e);
        }

        match format {
            FormatType::Jsonp => {
                let body = response.into_text();
                if !body.starts_with(&section.callback_name()) {
                    debug!(
                        "Top stories jsonp body for {} does not start with {}",
                        section,
                        section.callback_name()
                    );
                }
                Ok(StoriesResult::Callback(body))
            }
            FormatType::Json => {
                let parsed: TopStoriesResponse = response.json().map_err(|e| {
                    TopStoriesError::UnexpectedResponse {
                        message: format!("Failed to parse stories response: {}", e),
                    }
                })?;

                debug!(
                    "Top stories for {}: {} results (status {:?}, section {:?})",
                    section,
                    parsed.results.len(),
                    parsed.status,
                    parsed.section
                );

                if as_json_string {
                    let text = serde_json::to_string(&parsed.results)?;
                    Ok(StoriesResult::JsonString(text))
                } else {
                    Ok(StoriesResult::Records(parsed.results))
                }
            }
        }
    }

    /// Writes `records` to `path` as a JSON array. See [`storage::write_records`].
    pub fn persist(&self, path: impl AsRef<Path>, records: &[StoryRecord]) -> Result<()> {
        storage::write_records(path, records)
    }
}

impl<T: Transport> fmt::Debug for StoriesClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoriesClient")
            .field("api_key", &self.api_key)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Whether the body carries the gateway's invalid-credentials message,
/// regardless of status.
fn is_invalid_credentials(response: &TransportResponse) -> bool {
    response
        .json::<ErrorResponse>()
        .ok()
        .and_then(|error| error.message().map(str::to_lowercase))
        .is_some_and(|message| message.contains(INVALID_CREDENTIALS_MESSAGE))
}
