/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the repository API, randomness, the console and the file system.
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod random_source;
pub mod repository_host;

pub use formatter::{ReportFormatter, SbomFormatter};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use random_source::RandomSource;
pub use repository_host::{
    Accessibility, LanguageBreakdown, ManifestFile, RepositoryHost, RepositoryMetadata,
};
