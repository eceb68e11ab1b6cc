//! # ratecast-server
//!
//! Trains the rate models from a CSV file, then serves predictions.

use std::sync::Arc;

use anyhow::Context;
use predictor_facade::PredictorConfig;
use ratecast_server::ServerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str =
    "ratecast_server=info,predictor_core=info,data_core=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!("ratecast-server failed: {:#}", err);
        return Err(err);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    let dataset = config.dataset.clone();
    let service = tokio::task::spawn_blocking(move || {
        ratecast_server::train(&dataset, PredictorConfig::default())
    })
    .await
    .context("training task panicked")?
    .with_context(|| format!("failed to train on {}", config.dataset.display()))?;

    let app = ratecast_server::app(Arc::new(service));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!(
        "ratecast-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        config.addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutting down");
    }
}
