use super::{path_to_string, SyncLiteDBClient};
use crate::driver::protocol::{Command, DbType, SyncLiteResult};
use crate::error::DriverResult;
use std::path::Path;

impl SyncLiteDBClient {
    /// Initialize (open or create) a database of `db_type` at `db_path`
    pub async fn initialize(
        &self,
        db_path: impl AsRef<Path>,
        db_type: DbType,
        db_name: &str,
        logger_config: Option<&Path>,
    ) -> DriverResult<SyncLiteResult> {
        let logger_config = logger_config.map(path_to_string).transpose()?;
        self.send_command(&Command::Initialize {
            db_path: path_to_string(db_path.as_ref())?,
            db_type,
            db_name: db_name.to_string(),
            logger_config,
        })
        .await
    }

    /// Close the database at `db_path`
    pub async fn close(&self, db_path: impl AsRef<Path>) -> DriverResult<SyncLiteResult> {
        self.send_command(&Command::Close {
            db_path: path_to_string(db_path.as_ref())?,
        })
        .await
    }
}
