//! mcat-api - Music catalog REST service
//!
//! Serves CRUD endpoints for tracks, labels and users over a SQLite
//! database. Configuration comes from the command line (with environment
//! fallbacks), then an optional TOML file, then compiled defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mcat_api::{build_router, AppState};
use mcat_common::config::{default_config_path, load_toml_config, Overrides, ServiceConfig};
use mcat_common::db::init_database;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for mcat-api
#[derive(Parser, Debug)]
#[command(name = "mcat-api")]
#[command(about = "Music catalog REST API")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, env = "MCAT_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "MCAT_PORT")]
    port: Option<u16>,

    /// SQLite database file
    #[arg(short, long, env = "MCAT_DATABASE")]
    database: Option<PathBuf>,

    /// TOML config file (defaults to ~/.config/mcat/config.toml)
    #[arg(short, long, env = "MCAT_CONFIG")]
    config: Option<PathBuf>,

    /// Persistence call timeout in milliseconds
    #[arg(long, env = "MCAT_PERSISTENCE_TIMEOUT_MS")]
    persistence_timeout_ms: Option<u64>,

    /// Log level when RUST_LOG is not set
    #[arg(long, env = "MCAT_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            database: self.database.clone(),
            persistence_timeout_ms: self.persistence_timeout_ms,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Read the TOML file before tracing so its log level applies; report
    // the outcome once the subscriber is up
    let config_path = args.config.clone().or_else(default_config_path);
    let toml_result = config_path.as_ref().map(|path| (path, load_toml_config(path)));

    let file = match &toml_result {
        Some((_, Ok(file))) => Some(file.clone()),
        _ => None,
    };
    let config = ServiceConfig::resolve(args.overrides(), file);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("mcat_api={0},mcat_common={0},tower_http={0}", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification immediately after tracing init
    info!(
        "Starting mcat-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &toml_result {
        Some((path, Ok(_))) => info!("Loaded config file: {}", path.display()),
        Some((path, Err(e))) => warn!(
            "Ignoring config file {} ({}), using defaults",
            path.display(),
            e
        ),
        None => info!("No config file found, using defaults"),
    }

    info!("Database path: {}", config.database_path.display());
    let pool = match init_database(&config.database_path).await {
        Ok(pool) => {
            info!("✓ Database ready");
            pool
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e).context("Failed to initialize database");
        }
    };

    let state = AppState::new(pool.clone(), config.persistence_timeout);
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("mcat-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
