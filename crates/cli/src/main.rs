//! # Corral
//!
//! Main entry point for the zoo management API: resilient cached reads over
//! a SQLite document store, with an optional Redis cache tier.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use corral_application::use_cases::PurgeExpiredKeysUseCase;
use corral_domain::CliOverrides;
use corral_jobs::{IdempotencyRetentionJob, JobRunner};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "corral")]
#[command(version)]
#[command(about = "Zoo management API with two-tier caching and circuit breaking")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// API port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// SQLite database path
    #[arg(long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            port: cli.port,
            bind_address: cli.bind,
            database_path: cli.database,
        },
    )?;

    bootstrap::init_logging(&config);
    info!("Corral starting");

    let pool = bootstrap::init_database(&config.database.path).await?;

    let repos = di::Repositories::build(pool, &config);
    let state = di::build_app_state(&repos);

    let shutdown = CancellationToken::new();

    let purge = Arc::new(PurgeExpiredKeysUseCase::new(
        repos.idempotency.clone(),
        config.idempotency.ttl_secs,
    ));
    JobRunner::new()
        .with_idempotency_retention(
            IdempotencyRetentionJob::new(purge)
                .with_interval(config.idempotency.purge_interval_secs)
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let server_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            server_shutdown.cancel();
        }
    });

    server::start_web_server(state, &config, shutdown).await?;

    info!("Corral stopped");
    Ok(())
}
