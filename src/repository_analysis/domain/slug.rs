use crate::shared::error::DashboardError;
use crate::shared::Result;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::OnceLock;

/// Host substring that switches slug resolution to URL parsing
const GITHUB_HOST: &str = "github.com";

/// Compiled once; every `parse` and catalog lookup shares it
fn github_url_pattern() -> Result<&'static Regex> {
    static PATTERN: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"github\.com[/:]([^/\s?#]+)/([^/\s?#]+)"))
        .as_ref()
        .map_err(|e| e.clone().into())
}

/// Number of hash bytes kept in a repository identifier
const ID_HASH_BYTES: usize = 12;

/// `owner/repo` identifier of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositorySlug {
    owner: String,
    name: String,
}

impl RepositorySlug {
    /// Resolves a slug from user input.
    ///
    /// Accepted forms:
    /// - `owner/repo` (optionally with a trailing `.git`)
    /// - any string containing `github.com/owner/repo` or `github.com:owner/repo`
    ///   (https, ssh or scheme-less), with an optional trailing `.git`
    ///
    /// # Errors
    /// Returns `DashboardError::InvalidUrl` when no `owner/repo` pair can be derived.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        let candidate = if trimmed.contains(GITHUB_HOST) {
            github_url_pattern()?
                .captures(trimmed)
                .map(|caps| format!("{}/{}", &caps[1], &caps[2]))
                .ok_or_else(|| DashboardError::InvalidUrl {
                    input: input.to_string(),
                })?
        } else {
            trimmed.to_string()
        };

        let candidate = candidate.strip_suffix(".git").unwrap_or(&candidate);

        match candidate.split_once('/') {
            Some((owner, name))
                if Self::is_valid_segment(owner) && Self::is_valid_segment(name) =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(DashboardError::InvalidUrl {
                input: input.to_string(),
            }
            .into()),
        }
    }

    /// Segments must be non-empty and free of separators and whitespace
    fn is_valid_segment(segment: &str) -> bool {
        !segment.is_empty()
            && segment != "."
            && segment != ".."
            && !segment
                .chars()
                .any(|c| c == '/' || c == '\\' || c.is_whitespace())
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `owner/repo`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Catalog key derived from the raw input string.
///
/// The identifier hashes the input exactly as typed, so two spellings of the
/// same repository (`acme/widget` and `https://github.com/acme/widget`) are
/// distinct catalog entries while repeating the same string is detected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepositoryId(String);

impl RepositoryId {
    pub fn derive(raw_input: &str) -> Self {
        let digest = Sha256::digest(raw_input.as_bytes());
        Self(format!("repo-{}", hex::encode(&digest[..ID_HASH_BYTES])))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
