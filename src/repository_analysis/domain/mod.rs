pub mod challenge_log;
pub mod comparison;
pub mod dependency;
pub mod rate_limit;
pub mod repository_record;
pub mod sbom_metadata;
pub mod scanner_tool;
pub mod slug;

pub use challenge_log::{ChallengeLog, ChallengeLogEntry};
pub use comparison::ComparisonReport;
pub use dependency::DependencySpec;
pub use rate_limit::{RateLimitState, RateLimitTracker};
pub use repository_record::{format_count, MetadataSnapshot, RecordSource, RepositoryRecord};
pub use sbom_metadata::SbomMetadata;
pub use scanner_tool::ScannerTool;
pub use slug::{RepositoryId, RepositorySlug};
