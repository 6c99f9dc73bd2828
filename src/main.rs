use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use synclitedb::config::{ADDRESS_ENV, DEFAULT_ADDRESS, TIMEOUT_ENV};
use synclitedb::demo::{self, DemoPlan};
use synclitedb::{ClientConfig, DbType, SyncLiteDBClientBuilder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "synclitedb-demo")]
#[command(about = "Run a sample session against a SyncLiteDB gateway", long_about = None)]
struct Args {
    /// Gateway address
    #[arg(short, long, env = ADDRESS_ENV, default_value = DEFAULT_ADDRESS)]
    address: String,

    /// Per-request timeout in milliseconds (HTTP client default when unset)
    #[arg(long, env = TIMEOUT_ENV)]
    timeout_ms: Option<u64>,

    /// Directory holding the database (default: ~/synclite/job1/db)
    #[arg(long)]
    db_dir: Option<PathBuf>,

    /// Database name
    #[arg(long, default_value = "testRust")]
    db_name: String,

    /// Database type (SQLITE, DUCKDB, H2, ..., STREAMING)
    #[arg(long, default_value = "SQLITE")]
    db_type: DbType,

    /// SyncLite logger configuration file passed on initialize
    #[arg(long)]
    logger_config: Option<PathBuf>,
}

fn default_db_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine the home directory")?;
    Ok(home.join("synclite").join("job1").join("db"))
}

fn banner(title: &str) {
    println!("========================================================");
    println!("{}", title);
    println!("========================================================");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "synclitedb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig {
        address: args.address,
        timeout_ms: args.timeout_ms,
    };
    let client = SyncLiteDBClientBuilder::from_config(&config).build()?;
    tracing::info!("Using SyncLiteDB gateway at {}", client.address());

    let db_dir = match args.db_dir {
        Some(dir) => dir,
        None => default_db_dir()?,
    };
    std::fs::create_dir_all(&db_dir)
        .with_context(|| format!("Failed to create directory {}", db_dir.display()))?;

    let mut plan = DemoPlan::new(db_dir.join(&args.db_name), args.db_type, &args.db_name);
    if let Some(path) = args.logger_config {
        plan = plan.with_logger_config(path);
    }

    let report = demo::run_with(&client, &plan, |step| {
        banner(&format!("Executed {}", step.name));
        println!("result : {}", step.result.result);
        println!("message : {}", step.result.message);
        if let Some(handle) = step.result.txn_handle() {
            println!("txn-handle : {}", handle);
        }
    })
    .await?;

    banner("Selected Records");
    if report.selected.is_empty() {
        println!("No records found.");
    }
    for record in &report.selected {
        let a = record.get("a").cloned().unwrap_or_default();
        let b = record.get("b").cloned().unwrap_or_default();
        println!("a = {}, b = {}", a, b);
    }

    if !report.all_succeeded() {
        anyhow::bail!("One or more steps reported failure");
    }
    Ok(())
}
