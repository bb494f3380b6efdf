//! API Error Mapping

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use advisor_core::CoreError;
use equity_advisor::AdvisorError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed shape or consistency checks
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Session(#[from] CoreError),

    #[error(transparent)]
    Advisor(#[from] AdvisorError),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            ApiError::Session(CoreError::SessionNotFound(_)) => {
                (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND")
            }
            ApiError::Advisor(AdvisorError::PortfolioNotFound(_)) => {
                (StatusCode::NOT_FOUND, "PORTFOLIO_NOT_FOUND")
            }
            ApiError::Advisor(AdvisorError::InvalidPortfolio(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_PORTFOLIO")
            }
            ApiError::Advisor(AdvisorError::Config(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
        }
    }

    fn user_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Session(err) => err.user_message(),
            ApiError::Advisor(err) => err.user_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::warn!(code, "{self}");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.user_message(),
                code: code.into(),
            }),
        )
            .into_response()
    }
}
