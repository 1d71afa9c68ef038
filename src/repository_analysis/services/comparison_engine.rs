use super::dependency_synthesizer::DependencySetSource;
use crate::repository_analysis::domain::{ComparisonReport, RepositoryRecord, ScannerTool};
use std::collections::HashSet;

/// Insertion-ordered set used for the per-tool unions
#[derive(Default)]
struct OrderedSet {
    items: Vec<String>,
    index: HashSet<String>,
}

impl OrderedSet {
    fn extend(&mut self, values: impl IntoIterator<Item = String>) {
        for value in values {
            if self.index.insert(value.clone()) {
                self.items.push(value);
            }
        }
    }

    fn contains(&self, value: &str) -> bool {
        self.index.contains(value)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Reconciles what the two tools report across a set of repositories
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Synthesizes both tools' sets for every repository, unions them per
    /// tool and partitions the result into common and tool-only entries.
    pub fn compare(
        repositories: &[&RepositoryRecord],
        source: &impl DependencySetSource,
    ) -> ComparisonReport {
        let mut syft = OrderedSet::default();
        let mut owasp = OrderedSet::default();

        for repo in repositories {
            syft.extend(source.synthesize(repo, ScannerTool::Syft));
            owasp.extend(source.synthesize(repo, ScannerTool::Owasp));
        }

        let common = syft
            .items
            .iter()
            .filter(|d| owasp.contains(d))
            .cloned()
            .collect();
        let missing_from_owasp = syft
            .items
            .iter()
            .filter(|d| !owasp.contains(d))
            .cloned()
            .collect();
        let missing_from_syft = owasp
            .items
            .iter()
            .filter(|d| !syft.contains(d))
            .cloned()
            .collect();

        ComparisonReport {
            repository_count: repositories.len(),
            syft_total: syft.len(),
            owasp_total: owasp.len(),
            common,
            missing_from_owasp,
            missing_from_syft,
        }
    }
}
