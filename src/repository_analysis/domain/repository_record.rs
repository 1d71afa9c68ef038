use chrono::{DateTime, Utc};
use serde::Serialize;

/// Where a record's data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSource {
    /// Fetched from the GitHub API
    Live,
    /// Synthesized because fetching failed; values are random placeholders
    Simulated,
}

/// Selected raw fields of the GitHub repository payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSnapshot {
    pub id: u64,
    pub private: bool,
    pub archived: bool,
    pub disabled: bool,
    pub open_issues: u64,
    pub default_branch: String,
}

/// A registered repository as held by the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    pub id: String,
    pub full_name: String,
    pub name: String,
    pub owner: String,
    pub language: String,
    pub stars: u64,
    pub forks: u64,
    pub dependency_count: usize,
    pub description: String,
    pub license: String,
    /// Repository size in kilobytes as reported by the API
    pub size_kb: u64,
    pub manifest_files: Vec<String>,
    /// Parsed `name@version` strings from the manifests
    pub dependencies: Vec<String>,
    pub scanned: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<MetadataSnapshot>,
    pub source: RecordSource,
}

impl RepositoryRecord {
    pub fn stars_display(&self) -> String {
        format_count(self.stars)
    }

    pub fn forks_display(&self) -> String {
        format_count(self.forks)
    }

    pub fn is_simulated(&self) -> bool {
        self.source == RecordSource::Simulated
    }

    pub fn has_parsed_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

/// Formats a counter the way GitHub shows it: `999`, `1.2k`, `3.4M`
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}k", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}
