// Application state (AppState)

use crate::core::config::Config;
use crate::dashboard::builder::SnapshotBuilder;
use crate::gate::session_gate::SessionGate;
use crate::metrics::collector::Metrics;
use crate::security::login_limiter::LoginLimiter;
use crate::stores::account_directory::StaticDirectory;
use crate::stores::session_store::SessionStore;
use std::sync::Arc;

/// Shared application state
///
/// Everything a handler touches is passed in here; there is no global session state.
#[derive(Clone)]
pub struct AppState {
    /// Credential check and per-client session slots
    pub gate: Arc<SessionGate>,

    /// Produces the view-model for each render
    pub builder: Arc<SnapshotBuilder>,

    /// Sign-in attempt throttle
    pub login_limiter: Arc<LoginLimiter>,

    /// Counters for /metrics
    pub metrics: Arc<Metrics>,

    /// Advertise the demo accounts on the login page
    pub show_demo_credentials: bool,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, directory: StaticDirectory) -> Self {
        let config = Arc::new(config);

        let show_demo_credentials =
            config.dashboard.show_demo_credentials && directory.is_builtin();

        let sessions = Arc::new(SessionStore::new(config.session.max_age_secs));
        let gate = Arc::new(SessionGate::new(Arc::new(directory), sessions));

        Self {
            gate,
            builder: Arc::new(SnapshotBuilder::new(config.dashboard.seed)),
            login_limiter: Arc::new(LoginLimiter::new(
                config.security.max_login_attempts_per_minute,
            )),
            metrics: Arc::new(Metrics::new()),
            show_demo_credentials,
            config,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.session.cookie_name
    }
}
