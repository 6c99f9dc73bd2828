use super::{path_to_string, SyncLiteDBClient};
use crate::driver::protocol::{Command, SyncLiteResult, TxnHandle};
use crate::error::DriverResult;
use std::path::Path;

impl SyncLiteDBClient {
    /// Begin a transaction; a successful reply carries the handle
    pub async fn begin_transaction(
        &self,
        db_path: impl AsRef<Path>,
    ) -> DriverResult<SyncLiteResult> {
        self.send_command(&Command::Begin {
            db_path: path_to_string(db_path.as_ref())?,
        })
        .await
    }

    /// Commit the transaction identified by `txn_handle`
    pub async fn commit_transaction(
        &self,
        db_path: impl AsRef<Path>,
        txn_handle: &TxnHandle,
    ) -> DriverResult<SyncLiteResult> {
        self.send_command(&Command::Commit {
            db_path: path_to_string(db_path.as_ref())?,
            txn_handle: txn_handle.clone(),
        })
        .await
    }

    /// Rollback the transaction identified by `txn_handle`
    pub async fn rollback_transaction(
        &self,
        db_path: impl AsRef<Path>,
        txn_handle: &TxnHandle,
    ) -> DriverResult<SyncLiteResult> {
        self.send_command(&Command::Rollback {
            db_path: path_to_string(db_path.as_ref())?,
            txn_handle: txn_handle.clone(),
        })
        .await
    }
}
