// Request identity: the client cookie and the peer address

use crate::core::state::AppState;
use crate::models::session::{ClientId, Session};
use crate::utils::cookies::{client_cookie, read_cookie};
use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use chrono::{DateTime, Utc};
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

/// Client key carried by the request, if present and well-formed
pub fn client_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<ClientId> {
    read_cookie(headers, cookie_name).and_then(ClientId::parse)
}

/// The client key together with its live session
pub fn signed_in(
    state: &AppState,
    headers: &HeaderMap,
    now: DateTime<Utc>,
) -> Option<(ClientId, Arc<Session>)> {
    let client = client_from_headers(headers, state.cookie_name())?;
    let session = state.gate.current_session(&client, now)?;
    Some((client, session))
}

/// Set-Cookie value binding `client` to this browser
pub fn issue_cookie(state: &AppState, client: &ClientId) -> String {
    client_cookie(
        state.cookie_name(),
        client.as_str(),
        state.config.session.max_age_secs,
        state.config.session.secure_cookie,
    )
}

/// Remote IP. Connections over the Unix socket carry none.
#[derive(Debug, Clone, Copy)]
pub struct ClientAddr(pub Option<IpAddr>);

impl<S: Send + Sync> FromRequestParts<S> for ClientAddr {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        Ok(ClientAddr(ip))
    }
}
