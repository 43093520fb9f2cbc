//! `personnel-service` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — ensure the schema exists, then start the API server.
//! - `migrate` — create any missing tables and exit.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "personnel-service",
    about = "HTTP service for jobs, employees and job history",
    version
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
        bind: String,

        #[command(flatten)]
        database: DatabaseArgs,
    },
    /// Create the jobs, employees and job_history tables if missing.
    Migrate {
        #[command(flatten)]
        database: DatabaseArgs,
    },
}

#[derive(Args)]
struct DatabaseArgs {
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    max_connections: u32,

    /// Seconds a request may wait for a pooled connection.
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 5)]
    acquire_timeout_secs: u64,
}

impl DatabaseArgs {
    async fn connect(&self) -> Result<db::DbPool> {
        db::pool::create_pool(
            &self.database_url,
            self.max_connections,
            Duration::from_secs(self.acquire_timeout_secs),
        )
        .await
        .context("failed to connect to database")
    }
}

fn init_tracing(debug: bool) -> Result<()> {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    match cli.command {
        Command::Serve { bind, database } => {
            let pool = database.connect().await?;
            db::pool::ensure_schema(&pool)
                .await
                .context("failed to create schema")?;
            info!("Starting API server on {bind}");
            api::serve(&bind, pool).await.context("server error")?;
            info!("Server stopped");
        }
        Command::Migrate { database } => {
            let pool = database.connect().await?;
            db::pool::ensure_schema(&pool)
                .await
                .context("failed to create schema")?;
            info!("Schema is up to date");
        }
    }

    Ok(())
}
