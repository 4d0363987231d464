mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use chemsafe_core::client::GeminiClient;
use chemsafe_core::config::load_server_config;
use chemsafe_core::server::{build_router, AppState};

use crate::cli::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_to_stderr)?;

    let config = load_server_config(args.config.as_deref())?;
    let api_key = config.resolve_api_key(|name| std::env::var(name).ok())?;
    let catalog = config.load_catalog()?;
    let client = GeminiClient::new(&config.gemini, api_key).context("failed to build http client")?;
    let listen_addr = config.listen_addr(args.listen_addr.as_deref(), std::env::var("PORT").ok());
    let static_dir = args.static_dir.or(config.server.static_dir);

    info!(
        listen_addr = %listen_addr,
        model = %config.gemini.model,
        endpoint = %client.endpoint(),
        products = catalog.len(),
        "chemsafe server starting"
    );

    let state = AppState::new(Arc::new(client), catalog);
    let app = build_router(state, static_dir.as_deref());

    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", listen_addr))?;
    info!(addr = %listen_addr, "chemsafe server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;
    info!("chemsafe server shutting down");
    Ok(())
}

fn init_tracing(log_to_stderr: bool) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
    );
    if log_to_stderr {
        builder.with_writer(std::io::stderr).init();
    } else {
        builder.init();
    }
    Ok(())
}

async fn wait_for_shutdown() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
