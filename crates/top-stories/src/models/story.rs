use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One story entry as returned by the service.
///
/// Fields are service-defined and passed through untouched.
pub type StoryRecord = Map<String, Value>;

/// Outcome of a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum StoriesResult {
    /// Parsed `results` array of a `json` response.
    Records(Vec<StoryRecord>),
    /// `results` array of a `json` response, serialized back to a JSON string.
    JsonString(String),
    /// Raw `jsonp` body, e.g. `homeTopStoriesCallback({...})`.
    Callback(String),
}

impl StoriesResult {
    /// Returns the records if this is a parsed result.
    pub fn records(&self) -> Option<&[StoryRecord]> {
        match self {
            Self::Records(records) => Some(records),
            _ => None,
        }
    }

    /// Consumes the result, returning the records if this is a parsed result.
    pub fn into_records(self) -> Option<Vec<StoryRecord>> {
        match self {
            Self::Records(records) => Some(records),
            _ => None,
        }
    }

    /// Returns the textual form for string-shaped results.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::JsonString(text) | Self::Callback(text) => Some(text),
            Self::Records(_) => None,
        }
    }
}

/// Body of a `json` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TopStoriesResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    pub results: Vec<StoryRecord>,
}

/// Error body returned by the API gateway, e.g. on a rejected key.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub fault: Option<FaultResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FaultResponse {
    #[serde(default)]
    pub faultstring: Option<String>,
}

impl ErrorResponse {
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or_else(|| self.fault.as_ref().and_then(|f| f.faultstring.as_deref()))
    }
}
