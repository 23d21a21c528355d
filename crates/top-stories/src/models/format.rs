use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TopStoriesError;

/// Response encoding requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    /// Plain JSON, parsed into records.
    #[default]
    Json,
    /// JSON wrapped in a `<section>TopStoriesCallback(...)` call, returned as text.
    Jsonp,
}

impl FormatType {
    pub const ALL: [FormatType; 2] = [FormatType::Json, FormatType::Jsonp];

    /// Returns the identifier used as the request path extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatType::Json => "json",
            FormatType::Jsonp => "jsonp",
        }
    }

    /// Whether the response body is parsed rather than passed through.
    pub fn is_structured(&self) -> bool {
        matches!(self, FormatType::Json)
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatType {
    type Err = TopStoriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(FormatType::Json),
            "jsonp" => Ok(FormatType::Jsonp),
            other => Err(TopStoriesError::InvalidFormat(other.to_string())),
        }
    }
}
