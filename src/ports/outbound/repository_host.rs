use crate::repository_analysis::domain::{RateLimitState, RepositorySlug};
use crate::shared::error::DashboardError;
use crate::shared::Result;
use async_trait::async_trait;

/// Result of the accessibility probe that precedes every fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    Accessible,
    /// HTTP 404
    NotFound,
    /// HTTP 403, usually a private repository without a token
    Forbidden,
    /// Any other non-success status
    HttpStatus(u16),
}

impl Accessibility {
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Accessibility::Accessible,
            404 => Accessibility::NotFound,
            403 => Accessibility::Forbidden,
            other => Accessibility::HttpStatus(other),
        }
    }

    /// The matching domain error, or `None` when accessible
    pub fn into_error(self, slug: &RepositorySlug) -> Option<DashboardError> {
        let slug = slug.full_name();
        match self {
            Accessibility::Accessible => None,
            Accessibility::NotFound => Some(DashboardError::RepositoryNotFound { slug }),
            Accessibility::Forbidden => Some(DashboardError::RepositoryForbidden { slug }),
            Accessibility::HttpStatus(status) => Some(DashboardError::HttpStatus { slug, status }),
        }
    }
}

/// Repository metadata fields the catalog keeps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryMetadata {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    /// SPDX id, falling back to the license name
    pub license: Option<String>,
    pub size_kb: u64,
    pub private: bool,
    pub archived: bool,
    pub disabled: bool,
    pub open_issues: u64,
    pub default_branch: String,
}

/// Language name to byte count, in the order the API reported them
pub type LanguageBreakdown = Vec<(String, u64)>;

/// A manifest candidate that exists in the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    pub name: String,
    pub path: String,
    /// Base64 payload from the contents API, if the file was small enough to inline
    pub content: Option<String>,
}

/// RepositoryHost port for the remote repository API
///
/// Every call refreshes the rate-limit counters from response headers when
/// they are present. Non-success statuses and transport failures fail the
/// individual call; callers decide on fallbacks.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Probes the repository endpoint and classifies the status code.
    ///
    /// # Errors
    /// Only transport failures are errors; HTTP statuses map to `Accessibility`.
    async fn check_accessibility(&self, slug: &RepositorySlug) -> Result<Accessibility>;

    async fn fetch_metadata(&self, slug: &RepositorySlug) -> Result<RepositoryMetadata>;

    async fn fetch_languages(&self, slug: &RepositorySlug) -> Result<LanguageBreakdown>;

    /// Probes each configured manifest candidate in order, one request at a
    /// time, keeping only those that answered with success.
    async fn fetch_manifest_files(&self, slug: &RepositorySlug) -> Result<Vec<ManifestFile>>;

    /// Latest server-reported rate-limit counters
    fn rate_limit(&self) -> RateLimitState;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(Accessibility::from_status(200), Accessibility::Accessible);
        assert_eq!(Accessibility::from_status(204), Accessibility::Accessible);
        assert_eq!(Accessibility::from_status(404), Accessibility::NotFound);
        assert_eq!(Accessibility::from_status(403), Accessibility::Forbidden);
        assert_eq!(
            Accessibility::from_status(500),
            Accessibility::HttpStatus(500)
        );
    }

    #[test]
    fn test_inaccessible_messages_are_distinct() {
        let slug = RepositorySlug::parse("acme/widget").unwrap();
        let messages: Vec<String> = [
            Accessibility::NotFound,
            Accessibility::Forbidden,
            Accessibility::HttpStatus(502),
        ]
        .into_iter()
        .map(|a| a.into_error(&slug).unwrap().to_string())
        .collect();

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert!(messages.iter().all(|m| m.contains("acme/widget")));
        assert!(messages[1].contains("private"));
        assert!(messages[2].contains("502"));
    }

    #[test]
    fn test_into_error() {
        let slug = RepositorySlug::parse("acme/widget").unwrap();
        assert!(Accessibility::Accessible.into_error(&slug).is_none());
        assert!(matches!(
            Accessibility::NotFound.into_error(&slug),
            Some(DashboardError::RepositoryNotFound { .. })
        ));
        assert!(matches!(
            Accessibility::Forbidden.into_error(&slug),
            Some(DashboardError::RepositoryForbidden { .. })
        ));
        assert!(matches!(
            Accessibility::HttpStatus(418).into_error(&slug),
            Some(DashboardError::HttpStatus { status: 418, .. })
        ));
    }
}
