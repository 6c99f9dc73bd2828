use super::types::{DbType, TxnHandle};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One tuple of positional bind values for a `?`-parameterized statement.
pub type ArgumentRow = Vec<Value>;

pub const SQL_INITIALIZE: &str = "initialize";
pub const SQL_CLOSE: &str = "close";
pub const SQL_BEGIN: &str = "begin";
pub const SQL_COMMIT: &str = "commit";
pub const SQL_ROLLBACK: &str = "rollback";

/// A single gateway request.
///
/// On the wire every variant flattens into the same JSON object; the
/// control operations are told apart by the keyword in `sql`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireCommand", try_from = "WireCommand")]
pub enum Command {
    Initialize {
        db_path: String,
        db_type: DbType,
        db_name: String,
        logger_config: Option<String>,
    },
    Close {
        db_path: String,
    },
    Begin {
        db_path: String,
    },
    Commit {
        db_path: String,
        txn_handle: TxnHandle,
    },
    Rollback {
        db_path: String,
        txn_handle: TxnHandle,
    },
    Execute {
        db_path: String,
        txn_handle: Option<TxnHandle>,
        sql: String,
        arguments: Option<Vec<ArgumentRow>>,
    },
}

impl Command {
    pub fn db_path(&self) -> &str {
        match self {
            Command::Initialize { db_path, .. }
            | Command::Close { db_path }
            | Command::Begin { db_path }
            | Command::Commit { db_path, .. }
            | Command::Rollback { db_path, .. }
            | Command::Execute { db_path, .. } => db_path,
        }
    }

    /// Short operation name, used in logs and `Rejected` errors.
    pub fn operation(&self) -> &'static str {
        match self {
            Command::Initialize { .. } => SQL_INITIALIZE,
            Command::Close { .. } => SQL_CLOSE,
            Command::Begin { .. } => SQL_BEGIN,
            Command::Commit { .. } => SQL_COMMIT,
            Command::Rollback { .. } => SQL_ROLLBACK,
            Command::Execute { .. } => "execute",
        }
    }

    pub fn txn_handle(&self) -> Option<&TxnHandle> {
        match self {
            Command::Commit { txn_handle, .. } | Command::Rollback { txn_handle, .. } => {
                Some(txn_handle)
            }
            Command::Execute { txn_handle, .. } => txn_handle.as_ref(),
            _ => None,
        }
    }
}

/// Flat JSON shape the gateway reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireCommand {
    #[serde(rename = "db-path")]
    pub db_path: String,
    #[serde(rename = "db-type", default, skip_serializing_if = "Option::is_none")]
    pub db_type: Option<DbType>,
    #[serde(rename = "db-name", default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    #[serde(
        rename = "synclite-logger-config",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub logger_config: Option<String>,
    pub sql: String,
    #[serde(rename = "txn-handle", default, skip_serializing_if = "Option::is_none")]
    pub txn_handle: Option<TxnHandle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<ArgumentRow>>,
}

impl From<Command> for WireCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Initialize {
                db_path,
                db_type,
                db_name,
                logger_config,
            } => WireCommand {
                db_path,
                db_type: Some(db_type),
                db_name: Some(db_name),
                logger_config,
                sql: SQL_INITIALIZE.to_string(),
                ..Default::default()
            },
            Command::Close { db_path } => WireCommand {
                db_path,
                sql: SQL_CLOSE.to_string(),
                ..Default::default()
            },
            Command::Begin { db_path } => WireCommand {
                db_path,
                sql: SQL_BEGIN.to_string(),
                ..Default::default()
            },
            Command::Commit {
                db_path,
                txn_handle,
            } => WireCommand {
                db_path,
                sql: SQL_COMMIT.to_string(),
                txn_handle: Some(txn_handle),
                ..Default::default()
            },
            Command::Rollback {
                db_path,
                txn_handle,
            } => WireCommand {
                db_path,
                sql: SQL_ROLLBACK.to_string(),
                txn_handle: Some(txn_handle),
                ..Default::default()
            },
            Command::Execute {
                db_path,
                txn_handle,
                sql,
                arguments,
            } => WireCommand {
                db_path,
                sql,
                txn_handle,
                arguments,
                ..Default::default()
            },
        }
    }
}

impl TryFrom<WireCommand> for Command {
    type Error = String;

    fn try_from(wire: WireCommand) -> Result<Self, Self::Error> {
        let WireCommand {
            db_path,
            db_type,
            db_name,
            logger_config,
            sql,
            txn_handle,
            arguments,
        } = wire;

        let command = match sql.as_str() {
            SQL_INITIALIZE => Command::Initialize {
                db_type: db_type.ok_or("initialize requires db-type")?,
                db_name: db_name.ok_or("initialize requires db-name")?,
                db_path,
                logger_config,
            },
            SQL_CLOSE => Command::Close { db_path },
            SQL_BEGIN => Command::Begin { db_path },
            SQL_COMMIT => Command::Commit {
                txn_handle: txn_handle.ok_or("commit requires txn-handle")?,
                db_path,
            },
            SQL_ROLLBACK => Command::Rollback {
                txn_handle: txn_handle.ok_or("rollback requires txn-handle")?,
                db_path,
            },
            _ => Command::Execute {
                db_path,
                txn_handle,
                sql,
                arguments,
            },
        };
        Ok(command)
    }
}
