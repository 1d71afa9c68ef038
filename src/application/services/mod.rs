mod rate_limit_monitor;

pub use rate_limit_monitor::RateLimitMonitor;
