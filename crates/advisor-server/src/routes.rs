//! Router

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{chat_handler, get_portfolio, health_check, put_portfolio, session_history};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/chat", post(chat_handler))
        .route("/sessions/{session_id}", get(session_history))
        .route("/portfolios/{user_id}", get(get_portfolio).put(put_portfolio))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
