//! AI Slides entry shell server
//!
//! Entry point for the landing and upload pages.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use slides_shell::config::AppConfig;
use slides_shell::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before reading any configuration
    let _ = dotenv();

    let config = Arc::new(AppConfig::load().context("Failed to load configuration")?);

    // Initialize tracing (M-LOG-STRUCTURED)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if config.log.json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }

    info!(
        name: "config.loaded",
        host = %config.server.host,
        port = config.server.port,
        brand = %config.brand.display_text,
        "Configuration loaded"
    );

    server::start_server(config).await
}
