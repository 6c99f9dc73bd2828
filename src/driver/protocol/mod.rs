//! Wire protocol definitions for the SyncLiteDB gateway
//!
//! Every request is one flat JSON object POSTed to the gateway address;
//! every reply is one JSON object with a `result` flag.

pub mod command;
pub mod response;
pub mod types;

pub use crate::error::DriverError;
pub use command::{ArgumentRow, Command, WireCommand};
pub use response::{Record, SyncLiteResult};
pub use types::{DbType, TxnHandle};
