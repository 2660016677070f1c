//! bfhl-api - Token classification microservice
//!
//! Serves `POST /bfhl`, which splits an input array into odd numbers, even
//! numbers, alphabets and special characters, along with the numeric sum and
//! an alternating-caps string built from the letters.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bfhl_api::{build_router, AppState};
use bfhl_common::IdentityConfig;
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for bfhl-api
#[derive(Parser, Debug)]
#[command(name = "bfhl-api")]
#[command(about = "Token classification microservice")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "BFHL_HOST")]
    host: std::net::IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8000", env = "BFHL_PORT")]
    port: u16,

    /// TOML config file with an [identity] table
    #[arg(short, long, env = "BFHL_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bfhl_api=info,bfhl_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting BFHL API (bfhl-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // Identity is resolved once and never mutated afterwards
    let identity = IdentityConfig::load(args.config.as_deref())
        .context("Failed to load identity configuration")?;
    info!(
        "Identity: user_id={} email={} roll_number={}",
        identity.user_id, identity.email, identity.roll_number
    );

    let app = build_router(AppState::new(identity));

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("bfhl-api listening on http://{}", addr);
    info!("Health check: http://{}/healthz", addr);

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
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
