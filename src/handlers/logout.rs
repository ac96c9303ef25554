use crate::core::state::AppState;
use crate::handlers::client::client_from_headers;
use crate::utils::cookies::expired_cookie;
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

/// POST /logout
///
/// Idempotent: always clears the cookie and lands on the login page.
pub async fn logout_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if let Some(client) = client_from_headers(&headers, state.cookie_name()) {
        if state.gate.sign_out(&client) {
            state.metrics.increment_sign_outs();
        }
    }

    let cookie = expired_cookie(state.cookie_name(), state.config.session.secure_cookie);

    ([(header::SET_COOKIE, cookie)], Redirect::to("/login")).into_response()
}
