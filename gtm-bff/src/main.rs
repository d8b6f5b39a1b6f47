//! gtm-bff - backend-for-frontend service for GTM Kit
//!
//! Serves the module handlers under `/functions/v1/` against a local
//! SQLite database. Configuration comes from a TOML bootstrap file with
//! command-line and environment overrides.

use anyhow::{Context, Result};
use clap::Parser;
use gtm_common::auth::{ensure_user, issue_token, SqliteTokenVerifier};
use gtm_common::config::ConfigResolver;
use gtm_common::db::init_database;
use gtm_bff::{build_router, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "gtm-bff")]
#[command(about = "GTM Kit backend-for-frontend service")]
#[command(version)]
struct Args {
    /// Bootstrap config file (TOML)
    #[arg(short, long, env = "GTM_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long, env = "GTM_PORT")]
    port: Option<u16>,

    /// SQLite database file (overrides config)
    #[arg(short, long, env = "GTM_DATABASE")]
    database: Option<PathBuf>,

    /// Register EMAIL if needed, print a fresh bearer token for it and exit
    #[arg(long, value_name = "EMAIL")]
    issue_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Resolved before the subscriber exists; the source is logged below.
    let (mut config, source) = ConfigResolver::new(args.config.clone())
        .resolve_with_source()
        .context("Failed to load configuration")?;

    let log_file = config
        .logging
        .open_log_file()
        .context("Failed to open log file")?;
    let (stderr_layer, file_layer) = match log_file {
        Some(file) => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            ),
        ),
        None => (Some(tracing_subscriber::fmt::layer()), None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("gtm_bff={},tower_http=info", config.logging.level).into()
            }),
        )
        .with(stderr_layer)
        .with(file_layer)
        .init();

    source.log();

    info!(
        "Starting GTM Kit BFF (gtm-bff) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    if let Some(path) = args.database {
        config.database_path = Some(path);
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let db_path = config.database_path();
    info!("Database path: {}", db_path.display());
    let pool = init_database(&db_path)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    if let Some(email) = args.issue_token {
        let user_id = ensure_user(&pool, &email)
            .await
            .context("Failed to register user")?;
        let token = issue_token(&pool, &user_id)
            .await
            .context("Failed to issue token")?;
        info!("Issued token for {} ({})", email, user_id);
        println!("{}", token);
        return Ok(());
    }

    if config.public_api_key.is_none() {
        info!("No public API key configured; apikey header not checked");
    }

    let verifier = Arc::new(SqliteTokenVerifier::new(pool.clone()));
    let state = AppState::new(pool, verifier, config.public_api_key.clone());
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("gtm-bff listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
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
