mod config;
mod errors;
mod extract;
mod fields;
mod llm_client;
mod negotiation;
mod pricing;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on malformed values, never on a missing key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TauxJuste API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = GeminiClient::from_config(&config)?;
    info!("LLM client initialized (model: {})", llm.model());
    if !config.llm_configured() {
        warn!("GEMINI_API_KEY not set: /api/calculate and /api/negotiate will fail");
    }

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}, serving static files from {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
