use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed role labels. Roles are display-only; nothing checks permissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    SecurityAdmin,
    ComplianceOfficer,
    CloudArchitect,
    FinopsAnalyst,
    DevsecopsEngineer,
    Auditor,
    Viewer,
}

impl Role {
    /// Wire label, e.g. `SUPER_ADMIN`
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::SecurityAdmin => "SECURITY_ADMIN",
            Role::ComplianceOfficer => "COMPLIANCE_OFFICER",
            Role::CloudArchitect => "CLOUD_ARCHITECT",
            Role::FinopsAnalyst => "FINOPS_ANALYST",
            Role::DevsecopsEngineer => "DEVSECOPS_ENGINEER",
            Role::Auditor => "AUDITOR",
            Role::Viewer => "VIEWER",
        }
    }

    /// Header label, e.g. `SUPER ADMIN`
    pub fn display_label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directory entry. Immutable once the directory is built.
#[derive(Clone)]
pub struct Account {
    pub username: String,
    /// Compared in constant time, never serialized or logged
    pub password_secret: String,
    pub role: Role,
    pub display_name: String,
}

impl Account {
    pub fn new(
        username: impl Into<String>,
        password_secret: impl Into<String>,
        role: Role,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password_secret: password_secret.into(),
            role,
            display_name: display_name.into(),
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password_secret", &"<redacted>")
            .field("role", &self.role)
            .field("display_name", &self.display_name)
            .finish()
    }
}
