// Metrics endpoint

use crate::core::error::MonitoringError;
use crate::core::state::AppState;
use crate::models::forms::ApiKeyQuery;
use crate::utils::auth::secrets_match;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::warn;

/// Returns JSON with sign-in counters, render counts and live store sizes.
///
/// Requires `monitoring.api_key`.
pub async fn metrics_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiKeyQuery>,
) -> Result<Response, MonitoringError> {
    if !secrets_match(&params.api_key, &state.config.monitoring.api_key) {
        warn!("Unauthorized metrics access attempt");
        return Err(MonitoringError::InvalidApiKey);
    }

    let snapshot = state.metrics.get_snapshot(
        state.gate.sessions(),
        state.gate.directory().as_ref(),
        &state.login_limiter,
    );

    Ok((StatusCode::OK, Json(snapshot)).into_response())
}
