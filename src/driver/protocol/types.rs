use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Database/device types a SyncLiteDB gateway can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DbType {
    #[default]
    Sqlite,
    Duckdb,
    Derby,
    H2,
    Hypersql,
    SqliteAppender,
    DuckdbAppender,
    DerbyAppender,
    H2Appender,
    HypersqlAppender,
    Streaming,
}

impl DbType {
    pub const ALL: [DbType; 11] = [
        DbType::Sqlite,
        DbType::Duckdb,
        DbType::Derby,
        DbType::H2,
        DbType::Hypersql,
        DbType::SqliteAppender,
        DbType::DuckdbAppender,
        DbType::DerbyAppender,
        DbType::H2Appender,
        DbType::HypersqlAppender,
        DbType::Streaming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DbType::Sqlite => "SQLITE",
            DbType::Duckdb => "DUCKDB",
            DbType::Derby => "DERBY",
            DbType::H2 => "H2",
            DbType::Hypersql => "HYPERSQL",
            DbType::SqliteAppender => "SQLITE_APPENDER",
            DbType::DuckdbAppender => "DUCKDB_APPENDER",
            DbType::DerbyAppender => "DERBY_APPENDER",
            DbType::H2Appender => "H2_APPENDER",
            DbType::HypersqlAppender => "HYPERSQL_APPENDER",
            DbType::Streaming => "STREAMING",
        }
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace('-', "_");
        DbType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| format!("unknown database type '{}'", s))
    }
}

/// Opaque token the server issues on `begin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxnHandle(String);

impl TxnHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TxnHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TxnHandle {
    fn from(handle: String) -> Self {
        Self(handle)
    }
}

impl From<&str> for TxnHandle {
    fn from(handle: &str) -> Self {
        Self(handle.to_string())
    }
}
