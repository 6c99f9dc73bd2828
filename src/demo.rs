//! Sample gateway session
//!
//! Creates a table inside a transaction, batch-inserts two rows with a
//! prepared statement, commits, reads the rows back outside the
//! transaction, then drops the table and closes the database.

use serde_json::json;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::driver::{ArgumentRow, DbType, Record, SyncLiteDBClient, SyncLiteResult};
use crate::error::{DriverError, DriverResult};

pub const CREATE_TABLE_SQL: &str = "create table if not exists t1(a int, b text)";
pub const INSERT_SQL: &str = "insert into t1 (a, b) values(?, ?)";
pub const SELECT_SQL: &str = "select a, b from t1";
pub const DROP_TABLE_SQL: &str = "drop table t1";

#[derive(Debug, Clone)]
pub struct DemoPlan {
    pub db_path: PathBuf,
    pub db_type: DbType,
    pub db_name: String,
    pub logger_config: Option<PathBuf>,
}

impl DemoPlan {
    pub fn new(db_path: impl Into<PathBuf>, db_type: DbType, db_name: &str) -> Self {
        Self {
            db_path: db_path.into(),
            db_type,
            db_name: db_name.to_string(),
            logger_config: None,
        }
    }

    pub fn with_logger_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.logger_config = Some(path.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct DemoStep {
    pub name: &'static str,
    pub result: SyncLiteResult,
}

#[derive(Debug, Clone, Default)]
pub struct DemoReport {
    pub steps: Vec<DemoStep>,
    pub selected: Vec<Record>,
}

impl DemoReport {
    pub fn step(&self, name: &str) -> Option<&SyncLiteResult> {
        self.steps.iter().find(|s| s.name == name).map(|s| &s.result)
    }

    pub fn all_succeeded(&self) -> bool {
        self.steps.iter().all(|s| s.result.result)
    }

    /// Keep a step's reply. A failed `required` step aborts the session;
    /// `on_step` sees every reply, including the one that aborts.
    fn record(
        &mut self,
        name: &'static str,
        result: SyncLiteResult,
        required: bool,
        on_step: &mut (dyn FnMut(&DemoStep) + Send),
    ) -> DriverResult<&SyncLiteResult> {
        info!(step = name, result = result.result, message = %result.message, "Step finished");
        let step = DemoStep { name, result };
        on_step(&step);
        if !step.result.result {
            if required {
                return Err(DriverError::Rejected {
                    operation: name.to_string(),
                    message: step.result.message,
                });
            }
            warn!(step = name, message = %step.result.message, "Step reported failure");
        }
        self.steps.push(step);
        Ok(&self.steps[self.steps.len() - 1].result)
    }
}

pub fn sample_rows() -> Vec<ArgumentRow> {
    vec![vec![json!(1), json!("one")], vec![json!(2), json!("two")]]
}

/// Run the sample session against `client`.
///
/// Transport, status and serialization errors abort immediately, as does
/// a logical failure of any step up to and including the commit.
pub async fn run(client: &SyncLiteDBClient, plan: &DemoPlan) -> DriverResult<DemoReport> {
    run_with(client, plan, |_| {}).await
}

/// Like [`run`], calling `on_step` as soon as each reply arrives.
pub async fn run_with<F>(
    client: &SyncLiteDBClient,
    plan: &DemoPlan,
    mut on_step: F,
) -> DriverResult<DemoReport>
where
    F: FnMut(&DemoStep) + Send,
{
    let on_step: &mut (dyn FnMut(&DemoStep) + Send) = &mut on_step;
    let db = plan.db_path.as_path();
    let mut report = DemoReport::default();

    info!(db_path = %db.display(), db_type = %plan.db_type, "Executing initialize DB");
    let r = client
        .initialize(db, plan.db_type, &plan.db_name, plan.logger_config.as_deref())
        .await?;
    report.record("initialize", r, true, on_step)?;

    info!("Executing begin transaction");
    let r = client.begin_transaction(db).await?;
    let txn = report
        .record("begin", r, true, on_step)?
        .txn_handle()
        .cloned()
        .ok_or_else(|| DriverError::Rejected {
            operation: "begin".to_string(),
            message: "reply carried no txn-handle".to_string(),
        })?;
    info!(txn_handle = %txn, "Transaction started");

    info!("Executing create table");
    let r = client
        .execute_sql(db, Some(&txn), CREATE_TABLE_SQL, None)
        .await?;
    report.record("create table", r, true, on_step)?;

    info!("Executing insert into table");
    let r = client
        .execute_sql(db, Some(&txn), INSERT_SQL, Some(sample_rows()))
        .await?;
    report.record("insert", r, true, on_step)?;

    info!("Executing commit transaction");
    let r = client.commit_transaction(db, &txn).await?;
    report.record("commit", r, true, on_step)?;

    info!("Executing select from table");
    let r = client.execute_sql(db, None, SELECT_SQL, None).await?;
    let rows = report.record("select", r, false, on_step)?.rows().to_vec();
    report.selected = rows;

    info!("Executing drop table");
    let r = client.execute_sql(db, None, DROP_TABLE_SQL, None).await?;
    report.record("drop table", r, false, on_step)?;

    info!("Executing close DB");
    let r = client.close(db).await?;
    report.record("close", r, false, on_step)?;

    Ok(report)
}
