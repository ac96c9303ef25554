use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use crate::core::config::Config;
use crate::core::state::AppState;
use crate::stores::account_directory::{AccountDirectory, StaticDirectory};

// this runs at boot time
pub fn build_state(config: Config) -> AppState {
    let directory = StaticDirectory::from_config(&config.accounts);

    if directory.is_builtin() {
        info!(
            accounts = directory.len(),
            "Using built-in demo account directory"
        );
    } else {
        info!(
            accounts = directory.len(),
            "Using account directory from configuration"
        );
    }

    AppState::new(config, directory)
}

/// Evict expired sessions and closed throttle windows on a fixed interval
pub fn spawn_cleanup_task(state: Arc<AppState>) {
    let period = Duration::from_secs(state.config.session.cleanup_interval_secs);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);

        loop {
            interval.tick().await;
            run_cleanup(&state);
        }
    });
}

/// One sweep; returns (sessions removed, throttle windows removed)
pub fn run_cleanup(state: &AppState) -> (usize, usize) {
    let now = Utc::now();

    debug!("Running session cleanup");
    let sessions_removed = state.gate.sessions().cleanup_expired(now);
    let windows_removed = state.login_limiter.cleanup_old_entries(now.timestamp());

    if sessions_removed > 0 {
        info!(
            removed_sessions = sessions_removed,
            active_sessions = state.gate.sessions().len(),
            "Session cleanup completed"
        );
    } else {
        debug!(
            removed_windows = windows_removed,
            "Session cleanup completed, no expired sessions found"
        );
    }

    (sessions_removed, windows_removed)
}
