//! Common test utilities for gateway client tests
//!
//! Provides:
//! - A stand-in SyncLiteDB gateway backed by in-memory SQLite
//! - Rejection of chosen statements, for abort-path tests
//! - Fixed-reply and redirecting routers for status and malformed-body cases
//! - An address nothing listens on

#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::Redirect,
    routing::post,
    Json, Router,
};
use rusqlite::types::Value as SqlValue;
use rusqlite::Connection;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use synclitedb::{
    ArgumentRow, Command, Record, SyncLiteDBClient, SyncLiteDBClientBuilder, SyncLiteResult,
    TxnHandle,
};

struct OpenDb {
    conn: Connection,
    txn: Option<TxnHandle>,
}

#[derive(Default)]
pub struct GatewayState {
    dbs: HashMap<String, OpenDb>,
    /// Raw request bodies, in arrival order
    pub requests: Vec<Value>,
    pub content_types: Vec<String>,
    /// Statements starting with this text get a `result: false` reply
    pub fail_sql_prefix: Option<String>,
}

pub type SharedState = Arc<Mutex<GatewayState>>;

pub struct TestGateway {
    pub address: String,
    pub client: SyncLiteDBClient,
    pub state: SharedState,
}

impl TestGateway {
    pub fn requests(&self) -> Vec<Value> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Value {
        self.requests().pop().expect("no request received")
    }

    pub fn content_types(&self) -> Vec<String> {
        self.state.lock().unwrap().content_types.clone()
    }
}

pub async fn spawn_gateway() -> TestGateway {
    spawn_gateway_with(GatewayState::default()).await
}

/// Gateway that rejects every statement beginning with `prefix`.
pub async fn spawn_failing_gateway(prefix: &str) -> TestGateway {
    spawn_gateway_with(GatewayState {
        fail_sql_prefix: Some(prefix.to_string()),
        ..Default::default()
    })
    .await
}

async fn spawn_gateway_with(state: GatewayState) -> TestGateway {
    let state: SharedState = Arc::new(Mutex::new(state));
    let router = Router::new()
        .route("/", post(handle_request))
        .with_state(state.clone());
    let address = serve(router).await;
    let client = client_for(&address);
    TestGateway {
        address,
        client,
        state,
    }
}

/// Gateway that answers every POST with `status` and `body`.
pub async fn spawn_fixed_reply(status: StatusCode, body: &'static str) -> SyncLiteDBClient {
    let router = Router::new().route("/", post(move || async move { (status, body) }));
    client_for(&serve(router).await)
}

/// Gateway whose only endpoint redirects to a route answering 200.
pub async fn spawn_redirecting_gateway() -> SyncLiteDBClient {
    let router = Router::new()
        .route("/", post(|| async { Redirect::temporary("/ok") }))
        .route(
            "/ok",
            post(|| async { (StatusCode::OK, r#"{"result": true, "message": "via redirect"}"#) }),
        );
    client_for(&serve(router).await)
}

/// Address of a port that was bound and released again.
pub fn unreachable_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn client_for(address: &str) -> SyncLiteDBClient {
    SyncLiteDBClientBuilder::new(address)
        .timeout_ms(5000)
        .build()
        .expect("Failed to build client")
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn handle_request(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<SyncLiteResult>, (StatusCode, String)> {
    let raw: Value =
        serde_json::from_str(&body).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let command: Command = serde_json::from_value(raw.clone())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut state = state.lock().unwrap();
    state.requests.push(raw);
    state.content_types.push(
        headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string(),
    );
    let rejected = state
        .fail_sql_prefix
        .as_deref()
        .is_some_and(|prefix| raw_sql_starts_with(&state.requests, prefix));
    if rejected {
        return Ok(Json(SyncLiteResult::failure("rejected by test gateway")));
    }
    Ok(Json(state.apply(command)))
}

fn raw_sql_starts_with(requests: &[Value], prefix: &str) -> bool {
    requests
        .last()
        .and_then(|req| req["sql"].as_str())
        .is_some_and(|sql| sql.starts_with(prefix))
}

impl GatewayState {
    fn apply(&mut self, command: Command) -> SyncLiteResult {
        match command {
            Command::Initialize { db_path, .. } => {
                if self.dbs.contains_key(&db_path) {
                    return SyncLiteResult::success("Database already initialized");
                }
                match Connection::open_in_memory() {
                    Ok(conn) => {
                        self.dbs.insert(db_path, OpenDb { conn, txn: None });
                        SyncLiteResult::success("Database initialized successfully")
                    }
                    Err(e) => SyncLiteResult::failure(e.to_string()),
                }
            }
            Command::Close { db_path } => match self.dbs.remove(&db_path) {
                Some(_) => SyncLiteResult::success("Database closed successfully"),
                None => SyncLiteResult::failure(format!("Database {} is not initialized", db_path)),
            },
            Command::Begin { db_path } => self.with_db(&db_path, |db| {
                if db.txn.is_some() {
                    return SyncLiteResult::failure("A transaction is already in progress");
                }
                if let Err(e) = db.conn.execute_batch("BEGIN") {
                    return SyncLiteResult::failure(e.to_string());
                }
                let handle = TxnHandle::new(uuid::Uuid::new_v4().to_string());
                db.txn = Some(handle.clone());
                SyncLiteResult::success("Transaction started").with_txn_handle(handle)
            }),
            Command::Commit {
                db_path,
                txn_handle,
            } => self.with_db(&db_path, |db| db.finish(&txn_handle, "COMMIT")),
            Command::Rollback {
                db_path,
                txn_handle,
            } => self.with_db(&db_path, |db| db.finish(&txn_handle, "ROLLBACK")),
            Command::Execute {
                db_path,
                txn_handle,
                sql,
                arguments,
            } => self.with_db(&db_path, |db| {
                if let Some(handle) = &txn_handle {
                    if db.txn.as_ref() != Some(handle) {
                        return SyncLiteResult::failure(format!("Invalid txn-handle {}", handle));
                    }
                }
                match run_sql(&db.conn, &sql, arguments.as_deref()) {
                    Ok(Some(rows)) => SyncLiteResult::success("Query executed successfully")
                        .with_resultset(rows),
                    Ok(None) => SyncLiteResult::success("Update executed successfully"),
                    Err(e) => SyncLiteResult::failure(e.to_string()),
                }
            }),
        }
    }

    fn with_db<F>(&mut self, db_path: &str, f: F) -> SyncLiteResult
    where
        F: FnOnce(&mut OpenDb) -> SyncLiteResult,
    {
        match self.dbs.get_mut(db_path) {
            Some(db) => f(db),
            None => SyncLiteResult::failure(format!("Database {} is not initialized", db_path)),
        }
    }
}

impl OpenDb {
    fn finish(&mut self, handle: &TxnHandle, statement: &str) -> SyncLiteResult {
        if handle.is_empty() || self.txn.as_ref() != Some(handle) {
            return SyncLiteResult::failure(format!("Invalid txn-handle '{}'", handle));
        }
        self.txn = None;
        match self.conn.execute_batch(statement) {
            Ok(()) => SyncLiteResult::success(format!("{} successful", statement.to_lowercase())),
            Err(e) => SyncLiteResult::failure(e.to_string()),
        }
    }
}

fn run_sql(
    conn: &Connection,
    sql: &str,
    arguments: Option<&[ArgumentRow]>,
) -> rusqlite::Result<Option<Vec<Record>>> {
    let mut stmt = conn.prepare(sql)?;

    if stmt.column_count() > 0 {
        let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let params: Vec<SqlValue> = arguments
            .and_then(|rows| rows.first())
            .map(|row| row.iter().map(to_sql_value).collect())
            .unwrap_or_default();
        let mut rows = stmt.query(rusqlite::params_from_iter(params))?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record = Map::new();
            for (i, name) in names.iter().enumerate() {
                let value: SqlValue = row.get(i)?;
                record.insert(name.clone(), to_json_value(value));
            }
            records.push(record);
        }
        return Ok(Some(records));
    }

    match arguments {
        Some(rows) => {
            for row in rows {
                let params: Vec<SqlValue> = row.iter().map(to_sql_value).collect();
                stmt.execute(rusqlite::params_from_iter(params))?;
            }
        }
        None => {
            stmt.execute([])?;
        }
    }
    Ok(None)
}

fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(*b as i64),
        Value::Number(n) => match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => SqlValue::Real(n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => SqlValue::Text(s.clone()),
        other => SqlValue::Text(other.to_string()),
    }
}

fn to_json_value(value: SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(i) => json!(i),
        SqlValue::Real(f) => json!(f),
        SqlValue::Text(s) => json!(s),
        SqlValue::Blob(b) => json!(b),
    }
}
