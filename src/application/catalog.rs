//! In-memory session state: registered repositories, the bounded selection,
//! generated SBOM artifacts, the challenge log and the latest comparison.

use crate::application::dto::SbomFormat;
use crate::repository_analysis::domain::{
    ChallengeLog, ComparisonReport, RepositoryId, RepositoryRecord, RepositorySlug, ScannerTool,
};
use crate::shared::error::DashboardError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// Maximum number of repositories that can be selected at once
pub const MAX_SELECTION: usize = 5;

/// Stored documents of one tool: repository id -> format -> document
type ArtifactStore = BTreeMap<String, BTreeMap<SbomFormat, String>>;

/// What a selection toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected,
    Deselected,
}

#[derive(Debug, Default)]
pub struct RepositoryCatalog {
    repositories: Vec<RepositoryRecord>,
    selection: Vec<String>,
    artifacts: BTreeMap<ScannerTool, ArtifactStore>,
    challenge_log: ChallengeLog,
    last_comparison: Option<ComparisonReport>,
}

impl RepositoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.repositories.iter().any(|r| r.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&RepositoryRecord> {
        self.repositories.iter().find(|r| r.id == id)
    }

    /// Looks a record up by id, by the exact input it was added with, or by
    /// `owner/name` (case-insensitive)
    pub fn find(&self, key: &str) -> Option<&RepositoryRecord> {
        let key = key.trim();
        if let Some(record) = self.get(key) {
            return Some(record);
        }
        if let Some(record) = self.get(RepositoryId::derive(key).as_str()) {
            return Some(record);
        }
        let full_name = RepositorySlug::parse(key).ok()?.full_name();
        self.repositories
            .iter()
            .find(|r| r.full_name.eq_ignore_ascii_case(&full_name))
    }

    /// Records in registration order
    pub fn repositories(&self) -> &[RepositoryRecord] {
        &self.repositories
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Adds a record. Returns `false` and leaves the catalog untouched when
    /// a record with the same id is already present.
    pub fn insert(&mut self, record: RepositoryRecord) -> bool {
        if self.contains(&record.id) {
            return false;
        }
        self.repositories.push(record);
        true
    }

    /// Removes a record along with its selection entry and stored artifacts.
    ///
    /// Removing an unknown id is a no-op.
    pub fn remove_repository(&mut self, id: &str) -> Option<RepositoryRecord> {
        self.selection.retain(|selected| selected != id);
        for store in self.artifacts.values_mut() {
            store.remove(id);
        }

        let index = self.repositories.iter().position(|r| r.id == id)?;
        Some(self.repositories.remove(index))
    }

    /// Selects an unselected repository or deselects a selected one.
    ///
    /// Selecting beyond [`MAX_SELECTION`] fails and leaves the selection unchanged.
    pub fn toggle_selection(&mut self, id: &str) -> Result<SelectionChange> {
        if !self.contains(id) {
            return Err(DashboardError::UnknownRepository { id: id.to_string() }.into());
        }

        if let Some(index) = self.selection.iter().position(|selected| selected == id) {
            self.selection.remove(index);
            return Ok(SelectionChange::Deselected);
        }

        if self.selection.len() >= MAX_SELECTION {
            return Err(DashboardError::SelectionLimitReached {
                limit: MAX_SELECTION,
            }
            .into());
        }

        self.selection.push(id.to_string());
        Ok(SelectionChange::Selected)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.iter().any(|selected| selected == id)
    }

    /// Selected ids in selection order
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Selected records in selection order
    pub fn selected_repositories(&self) -> Vec<&RepositoryRecord> {
        self.selection.iter().filter_map(|id| self.get(id)).collect()
    }

    /// Stores a generated document and marks the repository as scanned.
    ///
    /// A later document for the same tool, repository and format replaces the earlier one.
    pub fn store_artifact(
        &mut self,
        tool: ScannerTool,
        id: &str,
        format: SbomFormat,
        document: String,
    ) -> Result<()> {
        let record = self
            .repositories
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DashboardError::UnknownRepository { id: id.to_string() })?;
        record.scanned = true;

        self.artifacts
            .entry(tool)
            .or_default()
            .entry(id.to_string())
            .or_default()
            .insert(format, document);
        Ok(())
    }

    pub fn artifact(&self, tool: ScannerTool, id: &str, format: SbomFormat) -> Option<&str> {
        self.artifacts
            .get(&tool)?
            .get(id)?
            .get(&format)
            .map(String::as_str)
    }

    /// Number of repositories that have at least one document from `tool`
    pub fn artifact_count(&self, tool: ScannerTool) -> usize {
        self.artifacts.get(&tool).map_or(0, BTreeMap::len)
    }

    /// Every stored document of `tool` as `(repository id, format, document)`
    pub fn artifacts_for(&self, tool: ScannerTool) -> Vec<(&str, SbomFormat, &str)> {
        self.artifacts
            .get(&tool)
            .into_iter()
            .flat_map(|store| {
                store.iter().flat_map(|(id, documents)| {
                    documents
                        .iter()
                        .map(move |(format, doc)| (id.as_str(), *format, doc.as_str()))
                })
            })
            .collect()
    }

    pub fn challenge_log(&self) -> &ChallengeLog {
        &self.challenge_log
    }

    pub fn log_challenge(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        solved: bool,
        solution: Option<String>,
    ) {
        self.challenge_log
            .record(title, description, solved, solution);
    }

    pub fn last_comparison(&self) -> Option<&ComparisonReport> {
        self.last_comparison.as_ref()
    }

    pub fn set_last_comparison(&mut self, report: ComparisonReport) {
        self.last_comparison = Some(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository_analysis::domain::RecordSource;
    use chrono::Utc;

    fn record(id: &str) -> RepositoryRecord {
        RepositoryRecord {
            id: id.to_string(),
            full_name: format!("owner/{}", id),
            name: id.to_string(),
            owner: "owner".to_string(),
            language: "Go".to_string(),
            stars: 1,
            forks: 0,
            dependency_count: 3,
            description: String::new(),
            license: "MIT".to_string(),
            size_kb: 1,
            manifest_files: vec![],
            dependencies: vec![],
            scanned: false,
            created_at: Utc::now(),
            snapshot: None,
            source: RecordSource::Live,
        }
    }

    fn catalog_with(ids: &[&str]) -> RepositoryCatalog {
        let mut catalog = RepositoryCatalog::new();
        for id in ids {
            assert!(catalog.insert(record(id)));
        }
        catalog
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut catalog = catalog_with(&["a"]);
        assert!(!catalog.insert(record("a")));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_toggle_selection_round_trip() {
        let mut catalog = catalog_with(&["a"]);

        assert_eq!(catalog.toggle_selection("a").unwrap(), SelectionChange::Selected);
        assert!(catalog.is_selected("a"));
        assert_eq!(catalog.toggle_selection("a").unwrap(), SelectionChange::Deselected);
        assert!(catalog.selection().is_empty());
    }

    #[test]
    fn test_toggle_selection_limit_leaves_selection_unchanged() {
        let mut catalog = catalog_with(&["a", "b", "c", "d", "e", "f"]);
        for id in ["a", "b", "c", "d", "e"] {
            catalog.toggle_selection(id).unwrap();
        }

        let err = catalog.toggle_selection("f").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::SelectionLimitReached { limit: 5 })
        ));
        assert_eq!(catalog.selection(), &["a", "b", "c", "d", "e"]);

        // Deselecting one of the five still works at the limit
        assert_eq!(catalog.toggle_selection("c").unwrap(), SelectionChange::Deselected);
        assert_eq!(catalog.toggle_selection("f").unwrap(), SelectionChange::Selected);
    }

    #[test]
    fn test_toggle_selection_unknown_id() {
        let mut catalog = RepositoryCatalog::new();
        let err = catalog.toggle_selection("missing").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::UnknownRepository { .. })
        ));
    }

    #[test]
    fn test_remove_repository_clears_selection_and_artifacts() {
        let mut catalog = catalog_with(&["a", "b"]);
        catalog.toggle_selection("a").unwrap();
        catalog
            .store_artifact(ScannerTool::Syft, "a", SbomFormat::CycloneDx, "{}".into())
            .unwrap();
        catalog
            .store_artifact(ScannerTool::Owasp, "a", SbomFormat::Spdx, "{}".into())
            .unwrap();

        let removed = catalog.remove_repository("a");
        assert_eq!(removed.map(|r| r.id), Some("a".to_string()));
        assert!(!catalog.contains("a"));
        assert!(catalog.selection().is_empty());
        assert_eq!(catalog.artifact_count(ScannerTool::Syft), 0);
        assert_eq!(catalog.artifact_count(ScannerTool::Owasp), 0);
        assert!(catalog.contains("b"));
    }

    #[test]
    fn test_remove_repository_is_idempotent() {
        let mut catalog = catalog_with(&["a"]);
        assert!(catalog.remove_repository("a").is_some());
        assert!(catalog.remove_repository("a").is_none());
        assert!(catalog.remove_repository("never-added").is_none());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_store_artifact_marks_scanned_and_replaces() {
        let mut catalog = catalog_with(&["a"]);
        catalog
            .store_artifact(ScannerTool::Syft, "a", SbomFormat::CycloneDx, "first".into())
            .unwrap();
        catalog
            .store_artifact(ScannerTool::Syft, "a", SbomFormat::CycloneDx, "second".into())
            .unwrap();

        assert!(catalog.get("a").unwrap().scanned);
        assert_eq!(
            catalog.artifact(ScannerTool::Syft, "a", SbomFormat::CycloneDx),
            Some("second")
        );
        assert_eq!(catalog.artifact_count(ScannerTool::Syft), 1);
        assert_eq!(catalog.artifacts_for(ScannerTool::Syft).len(), 1);
    }

    #[test]
    fn test_store_artifact_unknown_repository() {
        let mut catalog = RepositoryCatalog::new();
        assert!(catalog
            .store_artifact(ScannerTool::Syft, "x", SbomFormat::Spdx, "{}".into())
            .is_err());
    }

    #[test]
    fn test_selected_repositories_follow_selection_order() {
        let mut catalog = catalog_with(&["a", "b", "c"]);
        catalog.toggle_selection("c").unwrap();
        catalog.toggle_selection("a").unwrap();

        let names: Vec<&str> = catalog
            .selected_repositories()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(names, vec!["c", "a"]);
    }

    #[test]
    fn test_find_by_id_input_or_full_name() {
        let mut catalog = RepositoryCatalog::new();
        let mut widget = record(RepositoryId::derive("acme/widget").as_str());
        widget.full_name = "acme/widget".to_string();
        catalog.insert(widget.clone());

        assert_eq!(catalog.find(&widget.id).map(|r| &r.id), Some(&widget.id));
        assert_eq!(catalog.find("acme/widget").map(|r| &r.id), Some(&widget.id));
        assert_eq!(
            catalog
                .find("https://github.com/ACME/Widget.git")
                .map(|r| &r.id),
            Some(&widget.id)
        );
        assert!(catalog.find("acme/other").is_none());
        assert!(catalog.find("not a slug").is_none());
    }

    #[test]
    fn test_log_challenge_newest_first() {
        let mut catalog = RepositoryCatalog::new();
        catalog.log_challenge("first", "one", true, None);
        catalog.log_challenge("second", "two", false, None);

        assert_eq!(catalog.challenge_log().entries()[0].title, "second");
    }
}
