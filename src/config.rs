//! Client configuration
//!
//! The gateway address and request timeout come from explicit values or
//! from the environment (`SYNCLITE_DB_ADDRESS`, `SYNCLITE_DB_TIMEOUT_MS`).

use crate::error::{DriverError, DriverResult};

pub const DEFAULT_ADDRESS: &str = "http://localhost:5555";
pub const ADDRESS_ENV: &str = "SYNCLITE_DB_ADDRESS";
pub const TIMEOUT_ENV: &str = "SYNCLITE_DB_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub address: String,
    /// Per-request timeout; `None` keeps the HTTP client default.
    pub timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            timeout_ms: None,
        }
    }
}

impl ClientConfig {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            timeout_ms: None,
        }
    }

    pub fn from_env() -> DriverResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> DriverResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(address) = lookup(ADDRESS_ENV).filter(|a| !a.trim().is_empty()) {
            config.address = address.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|t| !t.trim().is_empty()) {
            let ms = raw.trim().parse::<u64>().map_err(|e| {
                DriverError::Config(format!("{} must be milliseconds, got '{}': {}", TIMEOUT_ENV, raw, e))
            })?;
            config.timeout_ms = Some(ms);
        }

        Ok(config)
    }
}
