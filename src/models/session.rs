use crate::models::account::{Account, Role};
use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::Serialize;
use std::fmt;

/// Opaque per-browser key: 32 random bytes, hex encoded
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    pub const BYTES: usize = 32;

    pub fn generate() -> Self {
        let mut bytes = [0u8; Self::BYTES];
        rand::rng().fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// Accepts only values this service could have minted
    pub fn parse(raw: &str) -> Option<Self> {
        let bytes = hex::decode(raw).ok()?;
        if bytes.len() != Self::BYTES {
            return None;
        }
        Some(Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authenticated identity for one client. Carries no secret.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Session {
    pub username: String,
    pub role: Role,
    pub display_name: String,
    pub established_at: DateTime<Utc>,
}

impl Session {
    pub fn from_account(account: &Account, established_at: DateTime<Utc>) -> Self {
        Self {
            username: account.username.clone(),
            role: account.role,
            display_name: account.display_name.clone(),
            established_at,
        }
    }
}
