//! Financial Advisor HTTP Server
//!
//! Axum-based REST API in front of the equity advisor pipeline.

mod config;
mod error;
mod handlers;
mod routes;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use equity_advisor::{AdvisorConfig, FinancialAdvisor, SYSTEM_PROMPT};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment before reading any configuration
    dotenvy::dotenv().ok();
    let server_config = ServerConfig::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&server_config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let advisor_config = AdvisorConfig::from_env()?;
    tracing::info!(
        confidence = %advisor_config.confidence,
        session_prefix = %advisor_config.session_prefix,
        context_holdings = advisor_config.context_holdings,
        "advisor configured"
    );
    tracing::debug!(prompt_chars = SYSTEM_PROMPT.len(), "advisor persona loaded");

    let state = AppState::new(FinancialAdvisor::in_memory(advisor_config));
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&server_config.bind_addr).await?;

    tracing::info!("financial-advisor-agent running on http://{}", server_config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                 - Health check");
    tracing::info!("  POST /chat                   - Send message");
    tracing::info!("  GET  /sessions/{{id}}          - Conversation history");
    tracing::info!("  PUT  /portfolios/{{user_id}}   - Store portfolio snapshot");
    tracing::info!("  GET  /portfolios/{{user_id}}   - Fetch portfolio snapshot");

    axum::serve(listener, app).await?;

    Ok(())
}
