use crate::core::error::AuthError;
use crate::models::session::{ClientId, Session};
use crate::stores::account_directory::AccountDirectory;
use crate::stores::session_store::SessionStore;
use crate::utils::auth::secrets_match;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

/// Compared against when the username is unknown so both failure paths do the same work
const DUMMY_SECRET: &str = "not-a-real-password-00000000";

/// Outcome of a successful sign-in: the freshly minted client key and its session
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub client: ClientId,
    pub session: Session,
}

/// Anonymous/Authenticated gate for every client.
///
/// A client is Authenticated while the store holds a live session for its
/// `ClientId`. `authenticate` is the only way in, `sign_out` (or expiry) the
/// only way out. A failed attempt leaves the client's state untouched.
pub struct SessionGate {
    directory: Arc<dyn AccountDirectory>,
    sessions: Arc<SessionStore>,
}

impl SessionGate {
    pub fn new(directory: Arc<dyn AccountDirectory>, sessions: Arc<SessionStore>) -> Self {
        Self { directory, sessions }
    }

    /// Check a credential pair and bind the resulting session to a new client key.
    ///
    /// The key the browser presented (`previous`) is never promoted: any session
    /// under it is dropped and the session lives under a freshly generated key.
    /// Unknown usernames and wrong passwords both yield `AuthError::InvalidCredentials`.
    /// Failures are not logged.
    pub fn authenticate(
        &self,
        previous: Option<&ClientId>,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<SignedIn, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let account = match self.directory.lookup(username) {
            Some(account) => account,
            None => {
                let _ = secrets_match(password, DUMMY_SECRET);
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !secrets_match(password, &account.password_secret) {
            return Err(AuthError::InvalidCredentials);
        }

        let replaced = previous.and_then(|client| self.sessions.remove(client));

        let client = ClientId::generate();
        let session = Session::from_account(&account, now);
        self.sessions.insert(client.clone(), session.clone());

        info!(
            username = %session.username,
            role = %session.role,
            replaced_session = replaced.is_some(),
            "User signed in"
        );

        Ok(SignedIn { client, session })
    }

    /// Destroy the client's session. Safe to call when there is none.
    /// Returns whether a session was removed.
    pub fn sign_out(&self, client: &ClientId) -> bool {
        match self.sessions.remove(client) {
            Some(session) => {
                info!(username = %session.username, role = %session.role, "User signed out");
                true
            }
            None => false,
        }
    }

    /// The client's live session, if any
    pub fn current_session(&self, client: &ClientId, now: DateTime<Utc>) -> Option<Arc<Session>> {
        self.sessions.get(client, now)
    }

    pub fn directory(&self) -> &Arc<dyn AccountDirectory> {
        &self.directory
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }
}
