// Centralized error handling for the dashboard

use crate::models::forms::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// The only failure the session gate reports. Unknown user and wrong password
/// collapse into the same variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Errors returned by protected dashboard and API routes
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Not signed in")]
    Unauthenticated,

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Not found")]
    NotFound,

    #[error("Too many sign-in attempts, try again in a minute")]
    RateLimited,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match &self {
            DashboardError::Unauthenticated => StatusCode::UNAUTHORIZED,
            DashboardError::UnknownAction(_) | DashboardError::NotFound => StatusCode::NOT_FOUND,
            DashboardError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            DashboardError::Internal(e) => {
                tracing::error!(error = %e, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Error, Debug)]
pub enum MonitoringError {
    #[error("Invalid API key")]
    InvalidApiKey,
}

impl IntoResponse for MonitoringError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            MonitoringError::InvalidApiKey => (StatusCode::UNAUTHORIZED, "Unauthorized"),
        };

        (status, message).into_response()
    }
}
