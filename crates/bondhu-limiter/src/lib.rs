// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-user sliding-window admission control.
//!
//! Tracks request timestamps per user key and answers admission
//! queries: a request is admitted while fewer than `max_requests`
//! timestamps fall within the trailing `window`. Timestamps are
//! offsets from a construction-time instant, so tests can drive the
//! clock explicitly.
//!
//! The evict-check-append sequence for one user key is a single
//! critical section: the [`DashMap`] entry guard holds the shard lock
//! for the duration, so concurrent calls for the same key serialize
//! while calls for other keys proceed on other shards.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use bondhu_config::model::LimiterConfig;
use bondhu_core::BondhuError;
use dashmap::DashMap;
use tracing::{debug, warn};

/// Sliding-window rate limiter keyed by opaque user identifiers.
pub struct SlidingWindowLimiter {
    max_requests: usize,
    window: Duration,
    started: Instant,
    windows: DashMap<String, VecDeque<Duration>>,
}

impl SlidingWindowLimiter {
    /// Creates a limiter admitting at most `max_requests` per user
    /// within any trailing `window`.
    ///
    /// Zero `max_requests` or a zero window is a configuration error.
    pub fn new(max_requests: usize, window: Duration) -> Result<Self, BondhuError> {
        if max_requests == 0 {
            return Err(BondhuError::Config(
                "limiter max_requests must be at least 1".into(),
            ));
        }
        if window.is_zero() {
            return Err(BondhuError::Config(
                "limiter window must be non-zero".into(),
            ));
        }

        debug!(
            max_requests,
            window_secs = window.as_secs(),
            "rate limiter initialized"
        );

        Ok(Self {
            max_requests,
            window,
            started: Instant::now(),
            windows: DashMap::new(),
        })
    }

    /// Creates a limiter from the validated configuration section.
    pub fn from_config(config: &LimiterConfig) -> Result<Self, BondhuError> {
        Self::new(
            config.max_requests,
            Duration::from_secs(config.window_seconds),
        )
    }

    /// The configured per-window request budget.
    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    /// Monotonic time since the limiter was constructed.
    ///
    /// All timestamp arguments on this type are offsets on this clock.
    pub fn clock(&self) -> Duration {
        self.started.elapsed()
    }

    /// Checks whether a request from `user_key` at `now` is admitted,
    /// recording it if so.
    ///
    /// Evicts timestamps older than the window, then denies without
    /// recording if the remaining count has reached the budget;
    /// otherwise appends `now` and admits. The whole sequence is atomic
    /// per user key.
    pub fn check(&self, user_key: &str, now: Duration) -> bool {
        let mut entry = self.windows.entry(user_key.to_string()).or_default();
        Self::evict(&mut entry, now, self.window);

        if entry.len() >= self.max_requests {
            warn!(user = user_key, "rate limit exceeded");
            return false;
        }

        entry.push_back(now);
        true
    }

    /// Checks admission against the limiter's own clock.
    pub fn check_now(&self, user_key: &str) -> bool {
        self.check(user_key, self.clock())
    }

    /// Remaining admissions for `user_key` at `now`, in
    /// `[0, max_requests]`. Non-mutating; applies the same eviction
    /// rule as [`check`](Self::check) without persisting it.
    pub fn remaining(&self, user_key: &str, now: Duration) -> usize {
        let live = self
            .windows
            .get(user_key)
            .map(|entry| Self::count_live(&entry, now, self.window))
            .unwrap_or(0);
        self.max_requests.saturating_sub(live)
    }

    /// Time until `user_key` regains an admission slot at `now`.
    ///
    /// Zero when the user is not currently saturated; otherwise the
    /// time until the oldest live timestamp exits the window.
    pub fn reset_after(&self, user_key: &str, now: Duration) -> Duration {
        let Some(entry) = self.windows.get(user_key) else {
            return Duration::ZERO;
        };

        let oldest_live = entry
            .iter()
            .copied()
            .find(|&ts| now.saturating_sub(ts) <= self.window);

        let live = Self::count_live(&entry, now, self.window);
        if live < self.max_requests {
            return Duration::ZERO;
        }

        match oldest_live {
            Some(oldest) => (oldest + self.window).saturating_sub(now),
            None => Duration::ZERO,
        }
    }

    /// Removes user keys whose windows are empty after eviction at `now`.
    ///
    /// Pure memory-bound maintenance; safe to run concurrently with
    /// [`check`](Self::check) since it takes the same per-key shard locks.
    pub fn sweep(&self, now: Duration) {
        let before = self.windows.len();
        self.windows.retain(|_, timestamps| {
            Self::evict(timestamps, now, self.window);
            !timestamps.is_empty()
        });
        let removed = before - self.windows.len();
        if removed > 0 {
            debug!(removed, "swept idle rate-limit windows");
        }
    }

    /// Number of user keys currently tracked.
    pub fn tracked_users(&self) -> usize {
        self.windows.len()
    }

    /// Drops timestamps that have aged out of the window.
    ///
    /// Eviction is strict: an entry is dropped while `now - ts > window`,
    /// so a timestamp exactly `window` old still counts.
    fn evict(timestamps: &mut VecDeque<Duration>, now: Duration, window: Duration) {
        while let Some(&oldest) = timestamps.front() {
            if now.saturating_sub(oldest) > window {
                timestamps.pop_front();
            } else {
                break;
            }
        }
    }

    fn count_live(timestamps: &VecDeque<Duration>, now: Duration, window: Duration) -> usize {
        timestamps
            .iter()
            .filter(|&&ts| now.saturating_sub(ts) <= window)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    fn limiter(max: usize, window_secs: u64) -> SlidingWindowLimiter {
        SlidingWindowLimiter::new(max, secs(window_secs)).unwrap()
    }

    #[test]
    fn zero_max_requests_is_config_error() {
        assert!(matches!(
            SlidingWindowLimiter::new(0, secs(60)),
            Err(BondhuError::Config(_))
        ));
    }

    #[test]
    fn zero_window_is_config_error() {
        assert!(matches!(
            SlidingWindowLimiter::new(10, Duration::ZERO),
            Err(BondhuError::Config(_))
        ));
    }

    #[test]
    fn unseen_user_is_admitted() {
        let l = limiter(1, 60);
        assert!(l.check("newcomer", secs(5)));
    }

    #[test]
    fn allows_up_to_limit_then_denies() {
        let l = limiter(2, 60);
        assert!(l.check("u", secs(0)));
        assert!(l.check("u", secs(10)));
        assert!(!l.check("u", secs(20)));
    }

    #[test]
    fn admits_again_after_oldest_ages_out() {
        let l = limiter(2, 60);
        assert!(l.check("u", secs(0)));
        assert!(l.check("u", secs(10)));
        assert!(!l.check("u", secs(20)));
        // t=0 entry leaves the window strictly after t=60.
        assert!(l.check("u", secs(61)));
    }

    #[test]
    fn timestamp_exactly_window_old_still_counts() {
        let l = limiter(1, 60);
        assert!(l.check("u", secs(0)));
        assert!(!l.check("u", secs(60)));
        assert!(l.check("u", secs(61)));
    }

    #[test]
    fn denied_attempt_is_not_recorded() {
        let l = limiter(1, 60);
        assert!(l.check("u", secs(0)));
        for t in 1..=60 {
            assert!(!l.check("u", secs(t)));
        }
        // Only the t=0 admission is on record, so t=61 frees the slot
        // regardless of the 60 denied attempts.
        assert!(l.check("u", secs(61)));
    }

    #[test]
    fn users_do_not_share_budgets() {
        let l = limiter(1, 60);
        assert!(l.check("a", secs(0)));
        assert!(l.check("b", secs(0)));
        assert!(!l.check("a", secs(1)));
        assert!(!l.check("b", secs(1)));
    }

    #[test]
    fn remaining_tracks_live_count() {
        let l = limiter(3, 60);
        assert_eq!(l.remaining("u", secs(0)), 3);
        l.check("u", secs(0));
        l.check("u", secs(10));
        assert_eq!(l.remaining("u", secs(10)), 1);
        // t=0 aged out at t=61; t=10 still live.
        assert_eq!(l.remaining("u", secs(61)), 2);
        assert_eq!(l.remaining("u", secs(200)), 3);
    }

    #[test]
    fn remaining_does_not_mutate() {
        let l = limiter(1, 60);
        l.check("u", secs(0));
        let _ = l.remaining("u", secs(200));
        // remaining() must not have evicted the stored entry...
        // but even so the aged-out entry cannot deny admission.
        assert!(l.check("u", secs(200)));
    }

    #[test]
    fn reset_after_zero_when_not_saturated() {
        let l = limiter(2, 60);
        assert_eq!(l.reset_after("u", secs(0)), Duration::ZERO);
        l.check("u", secs(0));
        assert_eq!(l.reset_after("u", secs(5)), Duration::ZERO);
    }

    #[test]
    fn reset_after_tracks_oldest_entry() {
        let l = limiter(2, 60);
        l.check("u", secs(0));
        l.check("u", secs(10));
        // Saturated; the t=0 entry exits at t=60 (strictly after).
        assert_eq!(l.reset_after("u", secs(20)), secs(40));
    }

    #[test]
    fn sweep_removes_idle_users_only() {
        let l = limiter(2, 60);
        l.check("idle", secs(0));
        l.check("active", secs(100));
        assert_eq!(l.tracked_users(), 2);

        l.sweep(secs(120));
        assert_eq!(l.tracked_users(), 1);
        // The active user's budget is unaffected by the sweep.
        assert_eq!(l.remaining("active", secs(120)), 1);
    }

    #[test]
    fn concurrent_checks_never_overadmit_one_user() {
        let l = limiter(10, 60);
        let now = secs(30);

        let admitted: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let l = &l;
                    scope.spawn(move || {
                        (0..25).filter(|_| l.check("shared", now)).count()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(admitted, 10);
    }

    #[test]
    fn concurrent_checks_for_distinct_users_all_admit() {
        let l = limiter(1, 60);
        let now = secs(5);

        let admitted: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|i| {
                    let l = &l;
                    scope.spawn(move || l.check(&format!("user-{i}"), now) as usize)
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(admitted, 16);
    }

    #[test]
    fn sweep_is_safe_alongside_checks() {
        let l = limiter(5, 60);

        std::thread::scope(|scope| {
            let checker = {
                let l = &l;
                scope.spawn(move || {
                    for t in 0..200u64 {
                        l.check("steady", secs(t));
                    }
                })
            };
            let sweeper = {
                let l = &l;
                scope.spawn(move || {
                    for t in (0..200u64).step_by(10) {
                        l.sweep(secs(t));
                    }
                })
            };
            checker.join().unwrap();
            sweeper.join().unwrap();
        });

        // The steady user made a request at t=199 and must still be tracked.
        assert!(l.remaining("steady", secs(199)) < 5);
    }

    #[test]
    fn from_config_uses_section_values() {
        let config = LimiterConfig {
            max_requests: 2,
            window_seconds: 60,
            sweep_interval_secs: 300,
        };
        let l = SlidingWindowLimiter::from_config(&config).unwrap();
        assert!(l.check("u", secs(0)));
        assert!(l.check("u", secs(1)));
        assert!(!l.check("u", secs(2)));
    }
}
