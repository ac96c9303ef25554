use crate::models::account::Role;
use crate::models::sidebar::Environment;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    pub monitoring: MonitoringConfig,
    pub logging: LoggingConfig,
    /// Replaces the built-in demo directory when non-empty
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub unix_socket: Option<PathBuf>,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: i64,
    #[serde(default = "default_cleanup_interval_secs")]
    pub cleanup_interval_secs: u64,
    #[serde(default)]
    pub secure_cookie: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    #[serde(default = "default_max_login_attempts_per_minute")]
    pub max_login_attempts_per_minute: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Fixed RNG seed for the trend series; fresh entropy per render when unset
    pub seed: Option<u64>,
    #[serde(default = "default_environment")]
    pub default_environment: String,
    #[serde(default = "default_show_demo_credentials")]
    pub show_demo_credentials: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    /// JSON log file; stdout when unset
    pub path: Option<PathBuf>,
    #[serde(default = "default_console")]
    pub console: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub display_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            max_age_secs: default_max_age_secs(),
            cleanup_interval_secs: default_cleanup_interval_secs(),
            secure_cookie: false,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_login_attempts_per_minute: default_max_login_attempts_per_minute(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_environment: default_environment(),
            show_demo_credentials: default_show_demo_credentials(),
        }
    }
}

// Default value functions
fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_cookie_name() -> String {
    "gr_client".to_string()
}

fn default_max_age_secs() -> i64 {
    43_200 // 12 hours
}

fn default_cleanup_interval_secs() -> u64 {
    300 // 5 minutes
}

fn default_max_login_attempts_per_minute() -> u32 {
    20
}

fn default_environment() -> String {
    "Production".to_string()
}

fn default_show_demo_credentials() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Parsed `dashboard.default_environment`; validated at load time
    pub fn default_environment(&self) -> Environment {
        self.dashboard
            .default_environment
            .parse()
            .unwrap_or_default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate server config
        if self.server.port.is_none() && self.server.unix_socket.is_none() {
            bail!("Either port or unix_socket must be specified in server config");
        }

        if let Some(port) = self.server.port {
            if port == 0 {
                bail!("Server port must be greater than 0");
            }
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        // Validate session config
        if self.session.cookie_name.is_empty()
            || !self
                .session
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            bail!(
                "Invalid cookie_name '{}'. Use ASCII letters, digits, '_' or '-'",
                self.session.cookie_name
            );
        }

        if self.session.max_age_secs <= 0 {
            bail!("max_age_secs must be greater than 0");
        }

        if self.session.cleanup_interval_secs == 0 {
            bail!("cleanup_interval_secs must be greater than 0");
        }

        if self.session.max_age_secs <= self.session.cleanup_interval_secs as i64 {
            bail!(
                "max_age_secs ({}) must be greater than cleanup_interval_secs ({})",
                self.session.max_age_secs,
                self.session.cleanup_interval_secs
            );
        }

        // Validate security config
        if self.security.max_login_attempts_per_minute == 0 {
            bail!("max_login_attempts_per_minute must be greater than 0");
        }

        // Validate dashboard config
        if let Err(e) = self.dashboard.default_environment.parse::<Environment>() {
            bail!("Invalid default_environment: {}", e);
        }

        // Validate monitoring config
        if self.monitoring.api_key.is_empty() {
            bail!("api_key must not be empty");
        }

        // Validate logging config
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        // Validate account overrides
        let mut seen = HashSet::new();
        for account in &self.accounts {
            if account.username.is_empty() {
                bail!("Account username must not be empty");
            }
            if account.password.is_empty() {
                bail!("Account '{}' has an empty password", account.username);
            }
            if !seen.insert(account.username.as_str()) {
                bail!("Duplicate account username '{}'", account.username);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
        [server]
        port = 8501

        [monitoring]
        api_key = "test-api-key"

        [logging]
        level = "info"
        format = "console"
    "#;

    #[test]
    fn test_minimal_config_defaults() {
        let config = Config::from_toml(MINIMAL).expect("Failed to parse config");

        assert_eq!(config.server.port, Some(8501));
        assert!(config.server.num_threads > 0);
        assert_eq!(config.session.cookie_name, "gr_client");
        assert_eq!(config.session.max_age_secs, 43_200);
        assert_eq!(config.session.cleanup_interval_secs, 300);
        assert!(!config.session.secure_cookie);
        assert_eq!(config.security.max_login_attempts_per_minute, 20);
        assert_eq!(config.dashboard.seed, None);
        assert_eq!(config.default_environment(), Environment::Production);
        assert!(config.dashboard.show_demo_credentials);
        assert!(config.accounts.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = Config::from_file(&file.path().to_path_buf()).expect("Failed to load config");
        assert_eq!(config.monitoring.api_key, "test-api-key");
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file(&PathBuf::from("/nonexistent/guardrails.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_with_accounts() {
        let content = format!(
            "{}\n{}",
            MINIMAL,
            r#"
            [dashboard]
            seed = 42
            default_environment = "staging"

            [[accounts]]
            username = "ops"
            password = "ops-secret"
            role = "CLOUD_ARCHITECT"
            display_name = "Ops Person"
            "#
        );

        let config = Config::from_toml(&content).expect("Failed to parse config");
        assert_eq!(config.dashboard.seed, Some(42));
        assert_eq!(config.default_environment(), Environment::Staging);
        assert_eq!(config.accounts.len(), 1);
        assert_eq!(config.accounts[0].role, Role::CloudArchitect);
    }

    #[test]
    fn test_rejects_no_listener() {
        let content = MINIMAL.replace("port = 8501", "");
        assert!(Config::from_toml(&content).is_err());
    }

    #[test]
    fn test_rejects_duplicate_accounts() {
        let content = format!(
            "{}\n{}",
            MINIMAL,
            r#"
            [[accounts]]
            username = "ops"
            password = "a"
            role = "VIEWER"
            display_name = "One"

            [[accounts]]
            username = "ops"
            password = "b"
            role = "VIEWER"
            display_name = "Two"
            "#
        );

        let err = Config::from_toml(&content).unwrap_err();
        assert!(err.to_string().contains("Duplicate account username"));
    }

    #[test]
    fn test_rejects_unknown_role() {
        let content = format!(
            "{}\n{}",
            MINIMAL,
            r#"
            [[accounts]]
            username = "ops"
            password = "a"
            role = "ROOT"
            display_name = "Ops"
            "#
        );

        assert!(Config::from_toml(&content).is_err());
    }

    #[test]
    fn test_rejects_cleanup_longer_than_max_age() {
        let content = format!(
            "{}\n{}",
            MINIMAL,
            r#"
            [session]
            max_age_secs = 60
            cleanup_interval_secs = 120
            "#
        );

        assert!(Config::from_toml(&content).is_err());
    }

    #[test]
    fn test_rejects_bad_environment() {
        let content = format!(
            "{}\n{}",
            MINIMAL,
            r#"
            [dashboard]
            default_environment = "qa"
            "#
        );

        assert!(Config::from_toml(&content).is_err());
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let content = MINIMAL.replace("level = \"info\"", "level = \"loud\"");
        assert!(Config::from_toml(&content).is_err());
    }

    #[test]
    fn test_rejects_bad_cookie_name() {
        let content = format!(
            "{}\n{}",
            MINIMAL,
            r#"
            [session]
            cookie_name = "bad name;"
            "#
        );

        assert!(Config::from_toml(&content).is_err());
    }

    #[test]
    fn test_repository_config_toml_is_valid() {
        let path = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml"));
        let config = Config::from_file(&path).expect("Failed to load config");

        assert!(config.accounts.is_empty());
        assert!(config.server.port.is_some());
    }
}
