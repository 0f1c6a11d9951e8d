//! # motorparts-server
//!
//! HTTP server hosting the Motorparts back office.
//!
//! This binary provides:
//! - **REST API** (axum) for clients, suppliers, vehicles, parts, stock,
//!   orders, invoices, sales and notifications
//! - **JWT authentication** for profile access and order-line mutations
//! - **Static serving** of uploaded images under `/uploads`
//! - **Schema migrations** applied automatically at startup

mod config;

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use backoffice::Backoffice;
use clap::Parser;
use motorparts_auth::TokenService;
use sea_orm::{ConnectOptions, Database};
use tower_http::{cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Bodies are JSON or single image uploads; 10 MiB is plenty.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Parser)]
#[command(
    name = "motorparts-server",
    version,
    about = "Motorparts back-office HTTP server"
)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config/motorparts.yaml")]
    config: std::path::PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Tracing first (respects RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,motorparts_server=debug,backoffice=debug")
        }))
        .init();

    let cli = Cli::parse();
    let config = config::load(&cli.config)?;

    info!(
        "Starting Motorparts back office v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Database + migrations
    let mut opts = ConnectOptions::new(config.database.url());
    opts.max_connections(config.database.max_connections);
    let db = Database::connect(opts).await?;
    Backoffice::migrate(&db).await?;

    // Working directories for uploads and transient invoice PDFs
    tokio::fs::create_dir_all(&config.backoffice.uploads_dir).await?;
    tokio::fs::create_dir_all(&config.backoffice.invoices_dir).await?;

    let tokens = TokenService::new(&config.auth.jwt_secret);
    let state = Arc::new(Backoffice::new(
        Arc::new(db),
        tokens,
        config.backoffice.clone(),
    ));

    let app = Router::new()
        .nest("/api", state.clone().router())
        .nest_service("/uploads", ServeDir::new(&config.backoffice.uploads_dir))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    info!("Received Ctrl+C, shutting down");
}
