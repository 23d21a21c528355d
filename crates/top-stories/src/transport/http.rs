use log::debug;
use reqwest::blocking::Client;

use super::{Transport, TransportResponse};
use crate::config::ClientConfig;
use crate::errors::Result;

/// [`Transport`] backed by a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the underlying client with the configured timeout and user agent.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<TransportResponse> {
        let response = self.client.get(url).query(query).send()?;
        let status = response.status();
        let body = response.text()?;

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(TransportResponse::new(status.as_u16(), body))
    }
}
