//! repo-sbom - simulated SBOM analysis for GitHub repositories
//!
//! Registers GitHub repositories, simulates dependency scans with two SBOM
//! tools (Syft and OWASP Dependency-Check), renders CycloneDX and SPDX
//! documents, compares what the tools report and exports a session report.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`repository_analysis`): Value objects, policies and pure services
//! - **Application Layer** (`application`): Session catalog, use cases and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use repo_sbom::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let reporter = StderrProgressReporter::new();
//! let random = ThreadRngSource::new();
//! let client = GitHubClient::new(None)?;
//!
//! let mut catalog = RepositoryCatalog::new();
//! let add = AddRepositoryUseCase::new(client, random, &reporter, true);
//! add.execute(&mut catalog, "https://github.com/expressjs/express").await?;
//!
//! let id = catalog.repositories()[0].id.clone();
//! catalog.toggle_selection(&id)?;
//!
//! let synthesizer = DependencySynthesizer::new(random);
//! let report = CompareToolsUseCase::new(&synthesizer, &reporter).execute(&mut catalog)?;
//! println!("{} dependencies in common", report.common_count());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod repository_analysis;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, OutputDirectory, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CycloneDxFormatter, JsonReportFormatter, SpdxFormatter, TextReportFormatter,
    };
    pub use crate::adapters::outbound::network::GitHubClient;
    pub use crate::adapters::outbound::random::ThreadRngSource;
    pub use crate::application::catalog::{RepositoryCatalog, SelectionChange, MAX_SELECTION};
    pub use crate::application::dto::{
        AddOutcome, RenderedReport, ReportFormat, SbomFormat, ScanSummary,
    };
    pub use crate::application::services::RateLimitMonitor;
    pub use crate::application::use_cases::{
        AddRepositoryUseCase, CompareToolsUseCase, ExportReportUseCase, ScanPacing,
        ScanRepositoriesUseCase,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, RandomSource, ReportFormatter, RepositoryHost,
        SbomFormatter,
    };
    pub use crate::repository_analysis::domain::{
        ComparisonReport, RecordSource, RepositoryId, RepositoryRecord, RepositorySlug,
        ScannerTool,
    };
    pub use crate::repository_analysis::services::{
        ComparisonEngine, DependencySetSource, DependencySynthesizer,
    };
    pub use crate::shared::error::{DashboardError, ExitCode};
    pub use crate::shared::Result;
}
