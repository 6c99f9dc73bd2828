//! SyncLiteDB Rust Client
//!
//! Async client for the SyncLiteDB JSON/HTTP gateway: initialize a database,
//! run transactions, execute SQL (optionally as a prepared-statement batch),
//! and close the database.
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use synclitedb::{DbType, SyncLiteDBClientBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), synclitedb::DriverError> {
//!     let client = SyncLiteDBClientBuilder::new("http://localhost:5555").build()?;
//!     let db = "/var/synclite/job1/db/app.db";
//!
//!     client.initialize(db, DbType::Sqlite, "app", None).await?;
//!     let begin = client.begin_transaction(db).await?;
//!     if let Some(txn) = begin.txn_handle() {
//!         client
//!             .execute_sql(db, Some(txn), "insert into t1 (a, b) values(?, ?)",
//!                 Some(vec![vec![json!(1), json!("one")]]))
//!             .await?;
//!         client.commit_transaction(db, txn).await?;
//!     }
//!     client.close(db).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod demo;
pub mod driver;
pub mod error;

pub use config::ClientConfig;
pub use driver::{
    ArgumentRow, Command, DbType, Record, SyncLiteDBClient, SyncLiteDBClientBuilder,
    SyncLiteResult, TxnHandle,
};
pub use error::{DriverError, DriverResult};
