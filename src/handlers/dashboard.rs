use crate::core::error::DashboardError;
use crate::core::state::AppState;
use crate::handlers::client::signed_in;
use crate::models::forms::DashboardQuery;
use crate::models::sidebar::QuickAction;
use crate::models::snapshot::ViewHeader;
use crate::render::dashboard::{render_dashboard, DashboardView, Tab};
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};
use anyhow::Context;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

/// GET /
///
/// One render pass: check the session, otherwise build a fresh snapshot and
/// render the selected tab. Unknown `tab`/`env`/`ack` values fall back to the
/// defaults.
pub async fn dashboard_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, DashboardError> {
    let now = Utc::now();

    let Some((_, session)) = signed_in(&state, &headers, now) else {
        return Ok(Redirect::to("/login").into_response());
    };

    let tab = query
        .tab
        .as_deref()
        .and_then(|raw| raw.parse::<Tab>().ok())
        .unwrap_or_default();
    let environment = query
        .env
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| state.config.default_environment());
    let ack = query
        .ack
        .as_deref()
        .and_then(QuickAction::from_slug)
        .map(|action| action.acknowledge());

    let snapshot = state.builder.build(now);
    state.metrics.increment_snapshots();

    debug!(
        username = %session.username,
        tab = tab.slug(),
        environment = environment.as_str(),
        "Rendering dashboard"
    );

    let header = ViewHeader::from_session(&session);

    let html = render_dashboard(&DashboardView {
        header: &header,
        snapshot: &snapshot,
        tab,
        environment,
        ack,
    })
    .context("Failed to render dashboard")?;

    Ok(Html(html).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::test_support::create_test_state;
    use axum::body::Body;
    use axum::http::{header, HeaderValue, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::atomic::Ordering;

    fn signed_in_headers(state: &AppState, username: &str, password: &str) -> HeaderMap {
        let client = state
            .gate
            .authenticate(None, username, password, Utc::now())
            .unwrap()
            .client;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("gr_client={}", client)).unwrap(),
        );
        headers
    }

    async fn body_text(response: Response) -> String {
        let bytes = Body::new(response.into_body())
            .collect()
            .await
            .unwrap()
            .to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_anonymous_redirects_to_login() {
        let state = create_test_state();

        let response = dashboard_handler(
            State(state.clone()),
            HeaderMap::new(),
            Query(DashboardQuery::default()),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
        assert_eq!(state.metrics.snapshots_rendered.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_renders_for_signed_in_user() {
        let state = create_test_state();
        let headers = signed_in_headers(&state, "compliance_mgr", "compliance123");

        let response =
            dashboard_handler(State(state.clone()), headers, Query(DashboardQuery::default()))
                .await
                .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("Compliance Manager"));
        assert!(page.contains("COMPLIANCE OFFICER"));
        assert!(page.contains("Architecture Overview"));
        assert!(page.contains("<option selected>Production</option>"));
        assert_eq!(state.metrics.snapshots_rendered.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn test_query_selects_tab_environment_and_ack() {
        let state = create_test_state();
        let headers = signed_in_headers(&state, "admin", "admin123");

        let query = DashboardQuery {
            tab: Some("compliance".to_string()),
            env: Some("development".to_string()),
            ack: Some("sync-github".to_string()),
        };
        let response = dashboard_handler(State(state), headers, Query(query)).await.unwrap();

        let page = body_text(response).await;
        assert!(page.contains("Compliance by Organizational Unit"));
        assert!(page.contains("<option selected>Development</option>"));
        assert!(page.contains("Syncing policies from GitHub..."));
    }

    #[tokio::test]
    async fn test_unknown_query_values_fall_back() {
        let state = create_test_state();
        let headers = signed_in_headers(&state, "admin", "admin123");

        let query = DashboardQuery {
            tab: Some("billing".to_string()),
            env: Some("mars".to_string()),
            ack: Some("drop-tables".to_string()),
        };
        let response = dashboard_handler(State(state), headers, Query(query)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("Architecture Overview"));
        assert!(page.contains("<option selected>Production</option>"));
        assert!(!page.contains("class=\"notice"));
    }
}
