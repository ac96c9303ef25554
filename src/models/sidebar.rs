use serde::Serialize;
use std::str::FromStr;

/// Target environment selector. Cosmetic: echoed back, never filters data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Environment {
    #[default]
    Production,
    Staging,
    Development,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::Production,
        Environment::Staging,
        Environment::Development,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "Production",
            Environment::Staging => "Staging",
            Environment::Development => "Development",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown environment '{}'", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AckLevel {
    Info,
    Warning,
}

impl AckLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AckLevel::Info => "info",
            AckLevel::Warning => "warning",
        }
    }
}

/// Message shown after a quick action button is pressed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub level: AckLevel,
    pub message: &'static str,
}

/// Sidebar buttons. None of them does anything beyond acknowledging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    SyncGithub,
    RunKics,
    ValidateOpa,
    TriggerDeploy,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::SyncGithub,
        QuickAction::RunKics,
        QuickAction::ValidateOpa,
        QuickAction::TriggerDeploy,
    ];

    /// Path segment under /actions/
    pub fn slug(&self) -> &'static str {
        match self {
            QuickAction::SyncGithub => "sync-github",
            QuickAction::RunKics => "run-kics",
            QuickAction::ValidateOpa => "validate-opa",
            QuickAction::TriggerDeploy => "trigger-deploy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::SyncGithub => "Sync from GitHub",
            QuickAction::RunKics => "Run KICS Scan",
            QuickAction::ValidateOpa => "Validate OPA",
            QuickAction::TriggerDeploy => "Trigger Deploy",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        QuickAction::ALL.into_iter().find(|action| action.slug() == slug)
    }

    pub fn acknowledge(&self) -> Acknowledgement {
        match self {
            QuickAction::SyncGithub => Acknowledgement {
                level: AckLevel::Info,
                message: "Syncing policies from GitHub...",
            },
            QuickAction::RunKics => Acknowledgement {
                level: AckLevel::Info,
                message: "Starting KICS security scan...",
            },
            QuickAction::ValidateOpa => Acknowledgement {
                level: AckLevel::Info,
                message: "Running OPA policy validation...",
            },
            QuickAction::TriggerDeploy => Acknowledgement {
                level: AckLevel::Warning,
                message: "Requires approval for production",
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuickActionEntry {
    pub slug: &'static str,
    pub label: &'static str,
}

impl From<QuickAction> for QuickActionEntry {
    fn from(action: QuickAction) -> Self {
        Self {
            slug: action.slug(),
            label: action.label(),
        }
    }
}
