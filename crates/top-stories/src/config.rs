use std::time::Duration;

/// Default base URL of the Top Stories API.
pub const DEFAULT_BASE_URL: &str = "https://api.nytimes.com/svc/topstories/v2";

/// Default timeout for a single request.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "TOPSTORIES_API_KEY";
const BASE_URL_ENV: &str = "TOPSTORIES_BASE_URL";
const TIMEOUT_ENV: &str = "TOPSTORIES_TIMEOUT_MS";

/// HTTP settings for [`StoriesClient`](crate::StoriesClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            user_agent: concat!("topstories/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads overrides from the environment (and a `.env` file, if present).
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let base_url = lookup(BASE_URL_ENV)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);
        let timeout_ms: u64 = lookup(TIMEOUT_ENV)
            .and_then(|ms| ms.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
            user_agent: defaults.user_agent,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the request URL for a section and format,
    /// e.g. `https://api.nytimes.com/svc/topstories/v2/home.json`.
    pub fn endpoint(&self, section: &str, format: &str) -> String {
        format!(
            "{}/{}.{}",
            self.base_url.trim_end_matches('/'),
            section,
            format
        )
    }
}
