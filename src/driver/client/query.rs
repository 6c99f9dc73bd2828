use super::{path_to_string, SyncLiteDBClient};
use crate::driver::protocol::{ArgumentRow, Command, SyncLiteResult, TxnHandle};
use crate::error::DriverResult;
use std::path::Path;

impl SyncLiteDBClient {
    /// Execute `sql`, inside the transaction when a handle is given.
    ///
    /// `arguments` runs the statement once per row, binding each row's
    /// values to the `?` placeholders in order.
    pub async fn execute_sql(
        &self,
        db_path: impl AsRef<Path>,
        txn_handle: Option<&TxnHandle>,
        sql: &str,
        arguments: Option<Vec<ArgumentRow>>,
    ) -> DriverResult<SyncLiteResult> {
        self.send_command(&Command::Execute {
            db_path: path_to_string(db_path.as_ref())?,
            txn_handle: txn_handle.cloned(),
            sql: sql.to_string(),
            arguments,
        })
        .await
    }
}
