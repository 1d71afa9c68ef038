/// Type alias for Result with anyhow::Error as the error type.
/// Domain errors (`DashboardError`) convert into it and can be downcast by callers.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
