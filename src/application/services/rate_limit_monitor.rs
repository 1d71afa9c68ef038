use crate::repository_analysis::domain::{RateLimitState, RateLimitTracker};
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Periodically re-reads the shared rate-limit state and warns when the
/// remaining call budget drops below a threshold.
///
/// Observation only: requests are never delayed or blocked.
#[derive(Debug, Clone)]
pub struct RateLimitMonitor {
    tracker: Arc<RateLimitTracker>,
    threshold: u32,
    interval: Duration,
}

impl RateLimitMonitor {
    pub const DEFAULT_THRESHOLD: u32 = 10;
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

    pub fn new(tracker: Arc<RateLimitTracker>, threshold: u32, interval: Duration) -> Self {
        Self {
            tracker,
            threshold,
            interval,
        }
    }

    /// Warning text for `state`, or `None` when the budget is healthy or unknown
    pub fn check(state: &RateLimitState, threshold: u32) -> Option<String> {
        if !state.is_below(threshold) {
            return None;
        }
        let remaining = state.remaining.unwrap_or_default();

        let reset = state
            .reset_at_ms
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|at| format!(" (resets at {})", at.format("%H:%M:%S UTC")))
            .unwrap_or_default();

        Some(format!(
            "⚠️  GitHub API rate limit low: {} request(s) remaining{}",
            remaining, reset
        ))
    }

    /// Runs one check against the current tracker state
    pub fn poll(&self) -> Option<String> {
        Self::check(&self.tracker.snapshot(), self.threshold)
    }

    /// Starts the background check loop on the current tokio runtime
    ///
    /// The first tick fires after one full interval. Abort the returned
    /// handle to stop the loop.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let start = tokio::time::Instant::now() + self.interval;
            let mut ticker = tokio::time::interval_at(start, self.interval);
            loop {
                ticker.tick().await;
                if let Some(warning) = self.poll() {
                    eprintln!("{}", warning.yellow());
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_warns_below_threshold() {
        let state = RateLimitState {
            remaining: Some(3),
            reset_at_ms: Some(1_700_000_000_000),
        };
        let warning = RateLimitMonitor::check(&state, 10).unwrap();
        assert!(warning.contains("3 request(s) remaining"));
        assert!(warning.contains("resets at 22:13:20 UTC"));
    }

    #[test]
    fn test_check_silent_at_or_above_threshold() {
        let state = RateLimitState {
            remaining: Some(10),
            reset_at_ms: None,
        };
        assert!(RateLimitMonitor::check(&state, 10).is_none());
    }

    #[test]
    fn test_check_silent_when_unknown() {
        assert!(RateLimitMonitor::check(&RateLimitState::default(), 10).is_none());
    }

    #[test]
    fn test_poll_reads_tracker() {
        let tracker = Arc::new(RateLimitTracker::new());
        let monitor =
            RateLimitMonitor::new(tracker.clone(), 5, RateLimitMonitor::DEFAULT_INTERVAL);
        assert!(monitor.poll().is_none());

        tracker.update(Some("1"), None);
        assert!(monitor.poll().unwrap().contains("1 request(s) remaining"));
    }

    #[tokio::test]
    async fn test_spawn_runs_until_aborted() {
        let tracker = Arc::new(RateLimitTracker::new());
        let handle = RateLimitMonitor::new(tracker, 5, Duration::from_millis(10)).spawn();
        tokio::time::sleep(Duration::from_millis(35)).await;
        assert!(!handle.is_finished());
        handle.abort();
    }
}
