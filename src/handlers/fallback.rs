use crate::core::error::DashboardError;
use crate::render::not_found::render_not_found;
use axum::{
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};

pub async fn fallback_handler(headers: HeaderMap) -> Response {
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let is_browser = ["Mozilla", "Chrome", "Safari", "Firefox", "Edge"]
        .iter()
        .any(|marker| user_agent.contains(marker));

    if is_browser {
        match render_not_found() {
            Ok(html) => return (StatusCode::NOT_FOUND, Html(html)).into_response(),
            Err(e) => tracing::warn!(error = %e, "Failed to render 404 page"),
        }
    }

    DashboardError::NotFound.into_response()
}
