use crate::repository_analysis::domain::ScannerTool;

/// What a scan run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub tools: Vec<ScannerTool>,
    /// Number of repositories scanned
    pub repositories: usize,
    /// Number of SBOM documents stored
    pub documents: usize,
    /// Total dependencies across all synthesized sets
    pub dependencies: usize,
}
