/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_repository_host;
mod sequence_random;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repository_host::{MockRepository, MockRepositoryHost};
pub use sequence_random::SequenceRandom;
