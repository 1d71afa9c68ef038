use std::sync::Mutex;

/// Header carrying the number of remaining API calls
pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Header carrying the reset time in Unix seconds
pub const RESET_HEADER: &str = "x-ratelimit-reset";

/// Server-reported rate limit counters.
///
/// Values are only ever set from response headers; nothing decrements them locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitState {
    pub remaining: Option<u32>,
    /// Reset time in Unix milliseconds
    pub reset_at_ms: Option<i64>,
}

impl RateLimitState {
    /// Applies raw header values; absent or unparsable headers leave the prior value.
    pub fn apply_headers(&mut self, remaining: Option<&str>, reset_secs: Option<&str>) {
        if let Some(remaining) = remaining.and_then(|v| v.trim().parse::<u32>().ok()) {
            self.remaining = Some(remaining);
        }
        if let Some(reset) = reset_secs.and_then(|v| v.trim().parse::<i64>().ok()) {
            self.reset_at_ms = Some(reset.saturating_mul(1000));
        }
    }

    pub fn is_below(&self, threshold: u32) -> bool {
        matches!(self.remaining, Some(remaining) if remaining < threshold)
    }
}

/// Thread-safe holder shared between the API client and the rate-limit monitor
#[derive(Debug, Default)]
pub struct RateLimitTracker {
    state: Mutex<RateLimitState>,
}

impl RateLimitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&self, remaining: Option<&str>, reset_secs: Option<&str>) {
        if let Ok(mut state) = self.state.lock() {
            state.apply_headers(remaining, reset_secs);
        }
    }

    pub fn snapshot(&self) -> RateLimitState {
        self.state.lock().map(|s| *s).unwrap_or_default()
    }
}
