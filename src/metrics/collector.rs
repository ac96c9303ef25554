use crate::security::login_limiter::LoginLimiter;
use crate::stores::account_directory::AccountDirectory;
use crate::stores::session_store::SessionStore;
use crate::utils::time::current_timestamp;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct Metrics {
    pub sign_ins: AtomicU64,
    pub failed_sign_ins: AtomicU64,
    pub sign_outs: AtomicU64,
    pub throttled_attempts: AtomicU64,
    pub snapshots_rendered: AtomicU64,
    pub quick_actions: AtomicU64,
    pub start_time: i64,
}

#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct MetricsSnapshot {
    pub sign_ins: u64,
    pub failed_sign_ins: u64,
    pub sign_outs: u64,
    pub throttled_attempts: u64,
    pub sign_in_success_rate: f64,
    pub snapshots_rendered: u64,
    pub quick_actions: u64,
    pub active_sessions: usize,
    pub directory_accounts: usize,
    pub tracked_login_addresses: usize,
    pub uptime_seconds: i64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            sign_ins: AtomicU64::new(0),
            failed_sign_ins: AtomicU64::new(0),
            sign_outs: AtomicU64::new(0),
            throttled_attempts: AtomicU64::new(0),
            snapshots_rendered: AtomicU64::new(0),
            quick_actions: AtomicU64::new(0),
            start_time: current_timestamp(),
        }
    }

    pub fn increment_sign_ins(&self) {
        self.sign_ins.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_failed_sign_ins(&self) {
        self.failed_sign_ins.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_sign_outs(&self) {
        self.sign_outs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_throttled(&self) {
        self.throttled_attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_snapshots(&self) {
        self.snapshots_rendered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_quick_actions(&self) {
        self.quick_actions.fetch_add(1, Ordering::Relaxed);
    }

    /// Collects counters plus live sizes of the shared stores
    pub fn get_snapshot(
        &self,
        sessions: &SessionStore,
        directory: &dyn AccountDirectory,
        limiter: &LoginLimiter,
    ) -> MetricsSnapshot {
        let sign_ins = self.sign_ins.load(Ordering::Relaxed);
        let failed_sign_ins = self.failed_sign_ins.load(Ordering::Relaxed);

        let attempts = sign_ins + failed_sign_ins;
        let sign_in_success_rate = if attempts > 0 {
            (sign_ins as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsSnapshot {
            sign_ins,
            failed_sign_ins,
            sign_outs: self.sign_outs.load(Ordering::Relaxed),
            throttled_attempts: self.throttled_attempts.load(Ordering::Relaxed),
            sign_in_success_rate,
            snapshots_rendered: self.snapshots_rendered.load(Ordering::Relaxed),
            quick_actions: self.quick_actions.load(Ordering::Relaxed),
            active_sessions: sessions.len(),
            directory_accounts: directory.len(),
            tracked_login_addresses: limiter.len(),
            uptime_seconds: current_timestamp() - self.start_time,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
