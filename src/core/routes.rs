// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{actions, api, dashboard, fallback, health, login, logout, metrics};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Browser surface
        .route("/", get(dashboard::dashboard_handler))
        .route(
            "/login",
            get(login::login_page_handler).post(login::login_handler),
        )
        .route("/logout", post(logout::logout_handler))
        .route("/actions/{action}", post(actions::quick_action_handler))

        // JSON surface (session cookie)
        .route("/api/session", get(api::session_handler))
        .route("/api/snapshot", get(api::snapshot_handler))

        // Operational endpoints
        .route("/health", get(health::health_handler))
        .route("/metrics", get(metrics::metrics_handler))

        // 404 fallback for all unmatched routes
        .fallback(fallback::fallback_handler)

        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::test_support::create_test_state;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use std::net::SocketAddr;
    use tower::ServiceExt;

    fn client_cookie_pair(response: &axum::response::Response) -> String {
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("response should set the client cookie")
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = Body::new(response.into_body())
            .collect()
            .await
            .unwrap()
            .to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn login_request(cookie: &str, username: &str, password: &str) -> Request<Body> {
        let form = serde_urlencoded::to_string(&[("username", username), ("password", password)])
            .unwrap();
        let mut request = Request::post("/login")
            .header(header::COOKIE, cookie)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form))
            .unwrap();
        request
            .extensions_mut()
            .insert(axum::extract::ConnectInfo("127.0.0.1:50000".parse::<SocketAddr>().unwrap()));
        request
    }

    #[tokio::test]
    async fn test_anonymous_dashboard_redirects_to_login() {
        let app = build_router(create_test_state());

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn test_full_sign_in_flow() {
        let state = create_test_state();
        let app = build_router(state.clone());

        // Visiting the login page mints the client cookie
        let response = app
            .clone()
            .oneshot(Request::get("/login").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = client_cookie_pair(&response);
        assert!(cookie.starts_with("gr_client="));

        // Wrong password stays on the login page
        let response = app
            .clone()
            .oneshot(login_request(&cookie, "admin", "wrong"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_text(response).await.contains("Invalid credentials"));

        // Correct credentials land on the dashboard under a new client key
        let response = app
            .clone()
            .oneshot(login_request(&cookie, "admin", "admin123"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        let pre_login = cookie;
        let cookie = client_cookie_pair(&response);
        assert_ne!(cookie, pre_login);

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/session")
                    .header(header::COOKIE, &pre_login)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .clone()
            .oneshot(
                Request::get("/")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("Admin User"));
        assert!(page.contains("SUPER ADMIN"));

        // Quick action acknowledges through a redirect
        let response = app
            .clone()
            .oneshot(
                Request::post("/actions/trigger-deploy")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/?ack=trigger-deploy");

        // Sign out clears the session
        let response = app
            .clone()
            .oneshot(
                Request::post("/logout")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
        assert!(state.gate.sessions().is_empty());

        let response = app
            .oneshot(
                Request::get("/api/session")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_throttled_per_address() {
        let state = create_test_state();
        let app = build_router(state.clone());
        let cookie = "gr_client=".to_string() + &"a".repeat(64);

        // test config allows 5 attempts per minute
        for _ in 0..5 {
            let response = app
                .clone()
                .oneshot(login_request(&cookie, "viewer", "nope"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        let response = app
            .oneshot(login_request(&cookie, "viewer", "viewer123"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(state.gate.sessions().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back() {
        let app = build_router(create_test_state());

        let response = app
            .oneshot(Request::get("/announce").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
