//! Shared test helpers: a transport that replays a canned response and
//! records every request it receives.

#![allow(dead_code)]

use std::sync::Mutex;

use topstories::{Result, StoriesClient, Transport, TransportResponse};

pub const API_KEY: &str = "test";

pub const SCIENCE_BODY: &str = concat!(
    r#"{"status":"OK", "section":"science", "#,
    r#""results":[{"section":"Science", "title":"test_title"}]}"#
);

pub const HOME_JSONP_BODY: &str = concat!(
    r#"homeTopStoriesCallback({"status": "OK", "section": "home", "#,
    r#""results": [{"section": "home", "title": "test_title"}]})"#
);

pub const INVALID_AUTH_BODY: &str = r#"{"message": "Invalid authentication credentials"}"#;

/// A request as seen by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

pub struct MockTransport {
    response: TransportResponse,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            response: TransportResponse::new(status, body),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        Ok(self.response.clone())
    }
}

pub fn client(status: u16, body: &str) -> StoriesClient<MockTransport> {
    StoriesClient::with_transport(API_KEY, MockTransport::new(status, body)).unwrap()
}
