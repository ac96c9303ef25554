use crate::core::error::DashboardError;
use crate::core::state::AppState;
use crate::handlers::client::signed_in;
use crate::models::sidebar::QuickAction;
use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// POST /actions/{action}
///
/// Sidebar buttons. Nothing runs; the dashboard shows the acknowledgement.
pub async fn quick_action_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Result<Response, DashboardError> {
    let Some((_, session)) = signed_in(&state, &headers, Utc::now()) else {
        return Ok(Redirect::to("/login").into_response());
    };

    let action =
        QuickAction::from_slug(&slug).ok_or_else(|| DashboardError::UnknownAction(slug.clone()))?;

    state.metrics.increment_quick_actions();
    info!(
        username = %session.username,
        action = action.slug(),
        "Quick action requested"
    );

    let query = serde_urlencoded::to_string(&[("ack", action.slug())])
        .context("Failed to encode acknowledgement query")?;

    Ok(Redirect::to(&format!("/?{}", query)).into_response())
}
