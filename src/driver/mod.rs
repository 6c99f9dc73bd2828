//! Gateway driver for SyncLiteDB
//!
//! # Protocol Overview
//!
//! All operations share one endpoint:
//! - **Request**: `POST <address>` with `Content-Type: application/json` and a
//!   flat command object (`db-path`, `sql`, optional `txn-handle`, ...)
//! - **Response**: status 200 with `{"result": bool, "message": string, ...}`
//!
//! Control operations (`initialize`, `close`, `begin`, `commit`, `rollback`)
//! are sent as keywords in the `sql` field; anything else is executed as SQL.

pub mod client;
pub mod protocol;

pub use client::{SyncLiteDBClient, SyncLiteDBClientBuilder};
pub use protocol::{ArgumentRow, Command, DbType, Record, SyncLiteResult, TxnHandle};
