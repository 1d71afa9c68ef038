use serde::Serialize;

/// Outcome of reconciling the Syft and OWASP dependency sets over the selection.
///
/// List order follows first appearance in the union of each tool's sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub repository_count: usize,
    pub syft_total: usize,
    pub owasp_total: usize,
    pub common: Vec<String>,
    /// Found by Syft only
    pub missing_from_owasp: Vec<String>,
    /// Found by OWASP only
    pub missing_from_syft: Vec<String>,
}

impl ComparisonReport {
    /// Both missing lists concatenated, Syft-only entries first
    pub fn all_missing(&self) -> Vec<String> {
        self.missing_from_owasp
            .iter()
            .chain(self.missing_from_syft.iter())
            .cloned()
            .collect()
    }

    pub fn common_count(&self) -> usize {
        self.common.len()
    }
}
