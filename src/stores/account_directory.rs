use crate::core::config::AccountConfig;
use crate::models::account::{Account, Role};
use std::collections::HashMap;

/// Source of accounts for the session gate. A real identity provider can
/// replace the static table without touching the gate.
pub trait AccountDirectory: Send + Sync {
    fn lookup(&self, username: &str) -> Option<Account>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fixed in-memory directory built once at startup
pub struct StaticDirectory {
    accounts: HashMap<String, Account>,
    builtin: bool,
}

impl StaticDirectory {
    pub fn new(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.username.clone(), account))
            .collect();

        Self {
            accounts,
            builtin: false,
        }
    }

    /// The demo accounts shipped with the dashboard
    pub fn builtin() -> Self {
        let mut directory = Self::new([
            Account::new("admin", "admin123", Role::SuperAdmin, "Admin User"),
            Account::new(
                "security_lead",
                "security123",
                Role::SecurityAdmin,
                "Security Lead",
            ),
            Account::new(
                "compliance_mgr",
                "compliance123",
                Role::ComplianceOfficer,
                "Compliance Manager",
            ),
            Account::new(
                "cloud_arch",
                "architect123",
                Role::CloudArchitect,
                "Cloud Architect",
            ),
            Account::new("finops", "finops123", Role::FinopsAnalyst, "FinOps Analyst"),
            Account::new(
                "devsecops",
                "devsec123",
                Role::DevsecopsEngineer,
                "DevSecOps Engineer",
            ),
            Account::new("auditor", "audit123", Role::Auditor, "Auditor"),
            Account::new("viewer", "viewer123", Role::Viewer, "Viewer"),
        ]);
        directory.builtin = true;
        directory
    }

    /// Configured accounts, or the built-in table when none are configured
    pub fn from_config(accounts: &[AccountConfig]) -> Self {
        if accounts.is_empty() {
            return Self::builtin();
        }

        Self::new(accounts.iter().map(|entry| {
            Account::new(
                entry.username.clone(),
                entry.password.clone(),
                entry.role,
                entry.display_name.clone(),
            )
        }))
    }

    /// Whether this is the demo table, whose credentials may be advertised
    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.accounts.keys().map(String::as_str)
    }
}

impl AccountDirectory for StaticDirectory {
    fn lookup(&self, username: &str) -> Option<Account> {
        self.accounts.get(username).cloned()
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}
