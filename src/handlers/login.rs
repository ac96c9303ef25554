use crate::core::error::DashboardError;
use crate::core::state::AppState;
use crate::handlers::client::{client_from_headers, issue_cookie, ClientAddr};
use crate::models::forms::LoginForm;
use crate::models::session::ClientId;
use crate::render::login::{render_login, LoginView};
use crate::utils::time::current_timestamp;
use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;

fn login_page(
    state: &AppState,
    error: Option<&str>,
    username: &str,
) -> Result<Html<String>, DashboardError> {
    let html = render_login(&LoginView {
        error,
        username,
        show_demo_credentials: state.show_demo_credentials,
    })
    .context("Failed to render login page")?;

    Ok(Html(html))
}

/// GET /login
///
/// Already signed in goes straight to the dashboard. A browser without a
/// client cookie gets one here.
pub async fn login_page_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, DashboardError> {
    let client = client_from_headers(&headers, state.cookie_name());

    match client {
        Some(client) => {
            if state.gate.current_session(&client, Utc::now()).is_some() {
                return Ok(Redirect::to("/").into_response());
            }
            Ok(login_page(&state, None, "")?.into_response())
        }
        None => {
            let cookie = issue_cookie(&state, &ClientId::generate());
            Ok(([(header::SET_COOKIE, cookie)], login_page(&state, None, "")?).into_response())
        }
    }
}

/// POST /login
///
/// Throttled per remote address. Unknown user and wrong password get the same
/// page and status. A successful sign-in always moves the browser to a new
/// client key.
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    ClientAddr(addr): ClientAddr,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Result<Response, DashboardError> {
    if let Some(ip) = addr {
        if !state.login_limiter.allow_attempt(ip, current_timestamp()) {
            warn!(ip = %ip, "Sign-in attempts throttled");
            state.metrics.increment_throttled();

            let message = DashboardError::RateLimited.to_string();
            return Ok((
                StatusCode::TOO_MANY_REQUESTS,
                login_page(&state, Some(&message), &form.username)?,
            )
                .into_response());
        }
    }

    let presented = client_from_headers(&headers, state.cookie_name());

    match state
        .gate
        .authenticate(presented.as_ref(), &form.username, &form.password, Utc::now())
    {
        Ok(signed_in) => {
            state.metrics.increment_sign_ins();
            Ok((
                [(header::SET_COOKIE, issue_cookie(&state, &signed_in.client))],
                Redirect::to("/"),
            )
                .into_response())
        }
        Err(err) => {
            state.metrics.increment_failed_sign_ins();
            let client = presented.unwrap_or_else(ClientId::generate);
            let message = err.to_string();
            Ok((
                StatusCode::UNAUTHORIZED,
                [(header::SET_COOKIE, issue_cookie(&state, &client))],
                login_page(&state, Some(&message), &form.username)?,
            )
                .into_response())
        }
    }
}
