//! Top Stories Client Crate
//!
//! A blocking client for the New York Times Top Stories API.
//!
//! # Overview
//!
//! - Sections and formats are closed enums ([`Section`], [`FormatType`]);
//!   unknown identifiers are rejected before any request is sent
//! - `json` responses are parsed into [`StoryRecord`]s, `jsonp` responses are
//!   returned as text ([`StoriesResult`])
//! - Rejected API keys surface as [`TopStoriesError::InvalidAuthentication`],
//!   distinct from other HTTP failures
//! - Fetched records can be written to a JSON file
//!
//! One call performs exactly one request: no retries, no caching.
//!
//! # Core Types
//!
//! - [`StoriesClient`] - The API client
//! - [`ClientConfig`] - Base URL, timeout and user agent
//! - [`Transport`] - The HTTP primitive the client sends requests through
//! - [`TopStoriesError`] - Every failure the client can report

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod storage;
pub mod transport;

pub use client::StoriesClient;
pub use config::{ClientConfig, API_KEY_ENV, DEFAULT_BASE_URL};
pub use errors::{Result, TopStoriesError};
pub use models::{ApiKey, FormatType, Section, StoriesResult, StoryRecord};
pub use transport::{HttpTransport, Transport, TransportResponse};
