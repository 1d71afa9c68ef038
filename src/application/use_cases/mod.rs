/// Use cases module containing application business logic orchestration
mod add_repository;
mod compare_tools;
mod export_report;
mod scan_repositories;

pub use add_repository::AddRepositoryUseCase;
pub use compare_tools::CompareToolsUseCase;
pub use export_report::ExportReportUseCase;
pub use scan_repositories::{ScanPacing, ScanRepositoriesUseCase};
