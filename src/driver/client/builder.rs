use std::time::Duration;
use url::Url;

use super::SyncLiteDBClient;
use crate::config::ClientConfig;
use crate::error::{DriverError, DriverResult};

pub struct SyncLiteDBClientBuilder {
    addr: String,
    timeout_ms: Option<u64>,
}

impl SyncLiteDBClientBuilder {
    /// Create a new builder for the gateway at `addr`
    pub fn new(addr: &str) -> Self {
        Self {
            addr: addr.trim().to_string(),
            timeout_ms: None,
        }
    }

    /// Create a builder from address and timeout settings
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            addr: config.address.trim().to_string(),
            timeout_ms: config.timeout_ms,
        }
    }

    /// Set request timeout in milliseconds
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = Some(ms);
        self
    }

    /// Build the client
    pub fn build(self) -> DriverResult<SyncLiteDBClient> {
        let address = Url::parse(&self.addr)
            .map_err(|_| DriverError::InvalidAddress(self.addr.clone()))?;
        if !matches!(address.scheme(), "http" | "https") || address.host_str().is_none() {
            return Err(DriverError::InvalidAddress(self.addr));
        }

        // 3xx replies are errors, never followed
        let mut http = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
        if let Some(ms) = self.timeout_ms {
            http = http.timeout(Duration::from_millis(ms));
        }
        let http = http
            .build()
            .map_err(|e| DriverError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(SyncLiteDBClient::from_parts(address, http))
    }
}
