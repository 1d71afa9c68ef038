//! Read model for the exported session report

use crate::application::catalog::RepositoryCatalog;
use crate::repository_analysis::domain::{
    ChallengeLogEntry, ComparisonReport, RecordSource, ScannerTool,
};
use serde::Serialize;

/// Session report: registered repositories, the latest comparison,
/// the challenge log and how many SBOM artifacts each tool produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportReadModel {
    pub metadata: ReportMetadataView,
    pub repositories: Vec<RepositoryView>,
    pub analysis: AnalysisView,
    pub challenge_log: Vec<ChallengeLogEntry>,
    pub artifacts: ArtifactCountsView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadataView {
    pub generated_at: String,
    pub generator: String,
    pub version: String,
    pub total_repositories: usize,
    pub selected_repositories: usize,
    pub scanned_repositories: usize,
    pub simulated_repositories: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryView {
    pub id: String,
    pub full_name: String,
    pub language: String,
    pub stars: u64,
    pub forks: u64,
    pub dependency_count: usize,
    pub license: String,
    pub manifest_files: Vec<String>,
    pub selected: bool,
    pub scanned: bool,
    pub source: RecordSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisView {
    pub total_dependencies: usize,
    pub average_dependencies: f64,
    /// `None` until a comparison has been run
    pub comparison: Option<ComparisonReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArtifactCountsView {
    pub syft: usize,
    pub owasp: usize,
}

impl ReportReadModel {
    pub fn from_catalog(catalog: &RepositoryCatalog, generated_at: String) -> Self {
        let records = catalog.repositories();

        let repositories: Vec<RepositoryView> = records
            .iter()
            .map(|record| RepositoryView {
                id: record.id.clone(),
                full_name: record.full_name.clone(),
                language: record.language.clone(),
                stars: record.stars,
                forks: record.forks,
                dependency_count: record.dependency_count,
                license: record.license.clone(),
                manifest_files: record.manifest_files.clone(),
                selected: catalog.is_selected(&record.id),
                scanned: record.scanned,
                source: record.source,
            })
            .collect();

        let total_dependencies: usize = records.iter().map(|r| r.dependency_count).sum();
        let average_dependencies = if records.is_empty() {
            0.0
        } else {
            total_dependencies as f64 / records.len() as f64
        };

        ReportReadModel {
            metadata: ReportMetadataView {
                generated_at,
                generator: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                total_repositories: records.len(),
                selected_repositories: catalog.selection().len(),
                scanned_repositories: records.iter().filter(|r| r.scanned).count(),
                simulated_repositories: records.iter().filter(|r| r.is_simulated()).count(),
            },
            repositories,
            analysis: AnalysisView {
                total_dependencies,
                average_dependencies,
                comparison: catalog.last_comparison().cloned(),
            },
            challenge_log: catalog.challenge_log().entries().to_vec(),
            artifacts: ArtifactCountsView {
                syft: catalog.artifact_count(ScannerTool::Syft),
                owasp: catalog.artifact_count(ScannerTool::Owasp),
            },
        }
    }
}
