/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod add_outcome;
mod rendered_report;
mod report_format;
mod sbom_format;
mod scan_summary;

pub use add_outcome::AddOutcome;
pub use rendered_report::RenderedReport;
pub use report_format::ReportFormat;
pub use sbom_format::SbomFormat;
pub use scan_summary::ScanSummary;
