// JSON views of the session and snapshot, authenticated by the client cookie

use crate::core::error::DashboardError;
use crate::core::state::AppState;
use crate::handlers::client::signed_in;
use crate::models::session::Session;
use crate::models::snapshot::{DashboardSnapshot, ViewHeader};
use axum::{extract::State, http::HeaderMap, Json};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    pub header: ViewHeader,
    pub snapshot: DashboardSnapshot,
}

/// GET /api/session
pub async fn session_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Session>, DashboardError> {
    let (_, session) =
        signed_in(&state, &headers, Utc::now()).ok_or(DashboardError::Unauthenticated)?;

    Ok(Json(Session::clone(&session)))
}

/// GET /api/snapshot
pub async fn snapshot_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SnapshotResponse>, DashboardError> {
    let now = Utc::now();
    let (_, session) = signed_in(&state, &headers, now).ok_or(DashboardError::Unauthenticated)?;

    let snapshot = state.builder.build(now);
    state.metrics.increment_snapshots();

    Ok(Json(SnapshotResponse {
        header: ViewHeader::from_session(&session),
        snapshot,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::test_support::create_test_state;
    use axum::body::Body;
    use axum::http::{header, HeaderValue, StatusCode};
    use axum::response::IntoResponse;
    use http_body_util::BodyExt;
    use serde_json::Value;

    fn signed_in_headers(state: &AppState) -> HeaderMap {
        let client = state
            .gate
            .authenticate(None, "cloud_arch", "architect123", Utc::now())
            .unwrap()
            .client;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("gr_client={}", client)).unwrap(),
        );
        headers
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = Body::new(response.into_body())
            .collect()
            .await
            .unwrap()
            .to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_session_requires_sign_in() {
        let state = create_test_state();

        let err = session_handler(State(state), HeaderMap::new()).await.unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_session_has_no_password() {
        let state = create_test_state();
        let headers = signed_in_headers(&state);

        let response = session_handler(State(state), headers).await.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["username"], "cloud_arch");
        assert_eq!(body["role"], "CLOUD_ARCHITECT");
        assert_eq!(body["display_name"], "Cloud Architect");
        assert!(!body.to_string().contains("architect123"));
    }

    #[tokio::test]
    async fn test_snapshot_payload() {
        let state = create_test_state();
        let headers = signed_in_headers(&state);

        let response = snapshot_handler(State(state), headers).await.unwrap().into_response();
        let body = json_body(response).await;

        assert_eq!(body["header"]["role_label"], "CLOUD ARCHITECT");
        assert_eq!(body["snapshot"]["summary"].as_array().unwrap().len(), 6);
        assert_eq!(
            body["snapshot"]["trends"]["compliance_score"]
                .as_array()
                .unwrap()
                .len(),
            90
        );
        assert_eq!(body["snapshot"]["sidebar"]["version"], "2.0.0");
    }

    #[tokio::test]
    async fn test_seeded_snapshots_repeat() {
        let state = create_test_state();
        let headers = signed_in_headers(&state);

        let first = json_body(
            snapshot_handler(State(state.clone()), headers.clone())
                .await
                .unwrap()
                .into_response(),
        )
        .await;
        let second = json_body(
            snapshot_handler(State(state), headers)
                .await
                .unwrap()
                .into_response(),
        )
        .await;

        // test config pins dashboard.seed
        assert_eq!(
            first["snapshot"]["trends"]["compliance_score"],
            second["snapshot"]["trends"]["compliance_score"]
        );
    }
}
