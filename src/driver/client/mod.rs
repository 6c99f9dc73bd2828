mod builder;
mod database;
mod query;
mod transaction;

pub use builder::SyncLiteDBClientBuilder;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::path::Path;
use tracing::debug;
use url::Url;

use super::protocol::{Command, SyncLiteResult};
use crate::error::{DriverError, DriverResult};

/// HTTP client for a SyncLiteDB gateway.
///
/// Holds only the address and a pooled `reqwest::Client`; transaction
/// handles are carried by the caller between calls.
#[derive(Debug, Clone)]
pub struct SyncLiteDBClient {
    address: Url,
    http: reqwest::Client,
}

impl SyncLiteDBClient {
    pub(crate) fn from_parts(address: Url, http: reqwest::Client) -> Self {
        Self { address, http }
    }

    pub fn address(&self) -> &Url {
        &self.address
    }

    /// POST one command to the gateway and parse its reply.
    ///
    /// Only status 200 is parsed; any other status is `HttpStatus`.
    /// A `result: false` reply is returned as-is.
    pub async fn send_command(&self, command: &Command) -> DriverResult<SyncLiteResult> {
        let body = serde_json::to_vec(command)?;
        debug!(
            operation = command.operation(),
            db_path = command.db_path(),
            "Request JSON: {}",
            String::from_utf8_lossy(&body)
        );

        let response = self
            .http
            .post(self.address.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                DriverError::Connection(format!("HTTP request to {} failed: {}", self.address, e))
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Response code");

        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DriverError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| DriverError::Connection(format!("Failed to read response: {}", e)))?;
        debug!("Response JSON: {}", text);

        serde_json::from_str(&text).map_err(|e| {
            DriverError::Serialization(format!("Failed to parse response: {} - Text: {}", e, text))
        })
    }
}

pub(crate) fn path_to_string(path: &Path) -> DriverResult<String> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| DriverError::InvalidPath(path.to_path_buf()))
}
