//! HTTP Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use advisor_core::{SessionId, SessionStore, Turn};
use equity_advisor::{ChatResponse, Portfolio, PortfolioSource};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionHistory {
    pub session_id: String,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub turns: Vec<Turn>,
}

fn validation(rejection: &JsonRejection) -> ApiError {
    ApiError::Validation(rejection.body_text())
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "financial-advisor-agent online",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Chat endpoint
///
/// Malformed or incomplete bodies are rejected with 422 before the advisor
/// runs. A known `user_id` pulls that user's stored portfolio into context.
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| validation(&e))?;

    let portfolio = match request.user_id.as_deref() {
        Some(user_id) => state
            .portfolios
            .get_portfolio(user_id)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(user_id, "portfolio lookup failed: {e}");
                None
            }),
        None => None,
    };

    let response = state.advisor.process_message(
        &request.message,
        request.session_id.as_deref(),
        request.user_id.as_deref(),
        portfolio.as_ref(),
    );

    Ok(Json(response))
}

/// Conversation history for one session
pub async fn session_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionHistory>, ApiError> {
    let session = state
        .advisor
        .sessions()
        .require(&SessionId::from_string(session_id))?;

    Ok(Json(SessionHistory {
        session_id: session.id.to_string(),
        turns: session.turns().to_vec(),
        user_id: session.user_id,
        created_at: session.created_at,
        updated_at: session.updated_at,
    }))
}

/// Store a user's portfolio snapshot
pub async fn put_portfolio(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<Portfolio>, JsonRejection>,
) -> Result<(StatusCode, Json<Portfolio>), ApiError> {
    let Json(portfolio) = payload.map_err(|e| validation(&e))?;

    if portfolio.user_id != user_id {
        return Err(ApiError::Validation(format!(
            "body user_id '{}' does not match path '{user_id}'",
            portfolio.user_id
        )));
    }

    let status = match state.portfolios.upsert(portfolio.clone()).await? {
        Some(_) => StatusCode::OK,
        None => StatusCode::CREATED,
    };

    Ok((status, Json(portfolio)))
}

/// Fetch a user's portfolio snapshot
pub async fn get_portfolio(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Portfolio>, ApiError> {
    Ok(Json(state.portfolios.require_portfolio(&user_id).await?))
}
