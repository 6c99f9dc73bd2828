use super::types::TxnHandle;
use crate::error::DriverError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One result-set row: column name to column value, in select order.
pub type Record = Map<String, Value>;

/// Reply to any gateway command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncLiteResult {
    pub result: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resultset: Option<Vec<Record>>,
    #[serde(rename = "txn-handle", default, skip_serializing_if = "Option::is_none")]
    pub txn_handle: Option<TxnHandle>,
}

impl SyncLiteResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            result: true,
            message: message.into(),
            resultset: None,
            txn_handle: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            result: false,
            message: message.into(),
            resultset: None,
            txn_handle: None,
        }
    }

    pub fn with_resultset(mut self, rows: Vec<Record>) -> Self {
        self.resultset = Some(rows);
        self
    }

    pub fn with_txn_handle(mut self, handle: TxnHandle) -> Self {
        self.txn_handle = Some(handle);
        self
    }

    pub fn is_success(&self) -> bool {
        self.result
    }

    /// Rows of a row-returning statement; empty when the server sent none.
    pub fn rows(&self) -> &[Record] {
        self.resultset.as_deref().unwrap_or(&[])
    }

    pub fn txn_handle(&self) -> Option<&TxnHandle> {
        self.txn_handle.as_ref().filter(|h| !h.is_empty())
    }

    /// Turns a logical failure into `DriverError::Rejected`.
    pub fn into_success(self, operation: &str) -> Result<Self, DriverError> {
        if self.result {
            Ok(self)
        } else {
            Err(DriverError::Rejected {
                operation: operation.to_string(),
                message: self.message,
            })
        }
    }
}
