use dashmap::DashMap;
use std::net::IpAddr;

const WINDOW_SECS: i64 = 60;

#[derive(Debug, Clone, Copy)]
struct Window {
    attempts: u32,
    started_at: i64,
}

/// Fixed one-minute window of sign-in attempts per remote address
pub struct LoginLimiter {
    windows: DashMap<IpAddr, Window>,
    max_attempts_per_minute: u32,
}

impl LoginLimiter {
    pub fn new(max_attempts_per_minute: u32) -> Self {
        Self {
            windows: DashMap::new(),
            max_attempts_per_minute,
        }
    }

    /// Record an attempt from `ip` and report whether it may proceed.
    /// The entry guard holds the shard lock, so count and window move together.
    pub fn allow_attempt(&self, ip: IpAddr, current_time: i64) -> bool {
        let mut window = self.windows.entry(ip).or_insert(Window {
            attempts: 0,
            started_at: current_time,
        });

        if current_time - window.started_at >= WINDOW_SECS {
            window.started_at = current_time;
            window.attempts = 0;
        }

        window.attempts = window.attempts.saturating_add(1);
        window.attempts <= self.max_attempts_per_minute
    }

    /// Forget windows that have already closed
    pub fn cleanup_old_entries(&self, current_time: i64) -> usize {
        let before = self.windows.len();
        self.windows
            .retain(|_, window| current_time - window.started_at < WINDOW_SECS);
        before.saturating_sub(self.windows.len())
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn ip(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(192, 168, 1, last))
    }

    #[test]
    fn test_allows_first_attempt() {
        let limiter = LoginLimiter::new(10);
        assert!(limiter.allow_attempt(ip(1), 1000));
    }

    #[test]
    fn test_blocks_over_limit() {
        let limiter = LoginLimiter::new(5);

        for _ in 0..5 {
            assert!(limiter.allow_attempt(ip(1), 1000));
        }

        // 6th attempt inside the window is refused
        assert!(!limiter.allow_attempt(ip(1), 1000));
        assert!(!limiter.allow_attempt(ip(1), 1059));
    }

    #[test]
    fn test_resets_after_window() {
        let limiter = LoginLimiter::new(5);

        for _ in 0..6 {
            limiter.allow_attempt(ip(1), 1000);
        }
        assert!(!limiter.allow_attempt(ip(1), 1000));

        assert!(limiter.allow_attempt(ip(1), 1060));
    }

    #[test]
    fn test_addresses_are_independent() {
        let limiter = LoginLimiter::new(2);

        limiter.allow_attempt(ip(1), 1000);
        limiter.allow_attempt(ip(1), 1000);
        assert!(!limiter.allow_attempt(ip(1), 1000));

        assert!(limiter.allow_attempt(ip(2), 1000));
        assert!(limiter.allow_attempt(
            IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1)),
            1000
        ));
    }

    #[test]
    fn test_cleanup_old_entries() {
        let limiter = LoginLimiter::new(10);

        limiter.allow_attempt(ip(1), 1000);
        limiter.allow_attempt(ip(2), 1030);
        assert_eq!(limiter.len(), 2);

        // ip(1)'s window is 70s old, ip(2)'s is 40s old
        assert_eq!(limiter.cleanup_old_entries(1070), 1);
        assert_eq!(limiter.len(), 1);

        assert_eq!(limiter.cleanup_old_entries(1200), 1);
        assert!(limiter.is_empty());
    }

    #[test]
    fn test_concurrent_attempts_are_all_counted() {
        use std::sync::Arc;
        use std::thread;

        let limiter = Arc::new(LoginLimiter::new(100));

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                thread::spawn(move || {
                    for _ in 0..10 {
                        limiter.allow_attempt(ip(1), 1000);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // All 100 were counted; the 101st is refused
        assert!(!limiter.allow_attempt(ip(1), 1000));
    }
}
