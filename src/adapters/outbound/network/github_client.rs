use crate::ports::outbound::{
    Accessibility, LanguageBreakdown, ManifestFile, RepositoryHost, RepositoryMetadata,
};
use crate::repository_analysis::domain::rate_limit::{REMAINING_HEADER, RESET_HEADER};
use crate::repository_analysis::domain::{RateLimitState, RateLimitTracker, RepositorySlug};
use crate::repository_analysis::services::DEFAULT_MANIFEST_CANDIDATES;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct GhRepository {
    id: u64,
    name: String,
    full_name: String,
    owner: GhOwner,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    #[serde(default)]
    license: Option<GhLicense>,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    private: bool,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    open_issues_count: u64,
    #[serde(default)]
    default_branch: String,
}

#[derive(Debug, Deserialize)]
struct GhOwner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GhLicense {
    #[serde(default)]
    spdx_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GhContent {
    name: String,
    path: String,
    #[serde(default)]
    content: Option<String>,
}

impl From<GhRepository> for RepositoryMetadata {
    fn from(repo: GhRepository) -> Self {
        // GitHub reports "NOASSERTION" for licenses it cannot classify
        let license = repo.license.and_then(|l| {
            l.spdx_id
                .filter(|id| !id.is_empty() && id != "NOASSERTION")
                .or(l.name)
        });

        Self {
            id: repo.id,
            name: repo.name,
            full_name: repo.full_name,
            owner: repo.owner.login,
            description: repo.description,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            license,
            size_kb: repo.size,
            private: repo.private,
            archived: repo.archived,
            disabled: repo.disabled,
            open_issues: repo.open_issues_count,
            default_branch: repo.default_branch,
        }
    }
}

/// GitHubClient adapter for the GitHub REST API (v3)
///
/// Implements the RepositoryHost port. All requests are issued one at a time;
/// every response that carries rate-limit headers refreshes the shared
/// `RateLimitTracker`.
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    manifest_candidates: Vec<String>,
    rate_limit: Arc<RateLimitTracker>,
}

impl GitHubClient {
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";
    const ACCEPT_HEADER: &'static str = "application/vnd.github.v3+json";
    const TIMEOUT_SECONDS: u64 = 10;

    /// Creates a client for api.github.com; a blank token sends no Authorization header
    pub fn new(token: Option<&str>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("repo-sbom/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: Self::DEFAULT_API_URL.to_string(),
            token: Self::normalize_token(token),
            manifest_candidates: DEFAULT_MANIFEST_CANDIDATES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            rate_limit: Arc::new(RateLimitTracker::new()),
        })
    }

    /// Points the client at another API root (GitHub Enterprise, test servers)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_manifest_candidates(mut self, candidates: Vec<String>) -> Self {
        self.manifest_candidates = candidates;
        self
    }

    /// Shared handle for the background rate-limit monitor
    pub fn rate_limit_tracker(&self) -> Arc<RateLimitTracker> {
        Arc::clone(&self.rate_limit)
    }

    /// Trims surrounding whitespace; empty tokens become `None`
    fn normalize_token(token: Option<&str>) -> Option<String> {
        token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
    }

    fn repo_url(&self, slug: &RepositorySlug, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.base_url,
            urlencoding::encode(slug.owner()),
            urlencoding::encode(slug.name()),
            suffix
        )
    }

    /// Sends a GET with the API headers and records rate-limit headers
    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, Self::ACCEPT_HEADER);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let headers = response.headers();
        self.rate_limit.update(
            headers.get(REMAINING_HEADER).and_then(|v| v.to_str().ok()),
            headers.get(RESET_HEADER).and_then(|v| v.to_str().ok()),
        );

        Ok(response)
    }

    /// Like `get`, but non-success statuses become errors
    async fn get_success(&self, url: &str) -> Result<reqwest::Response> {
        let response = self.get(url).await?;
        if !response.status().is_success() {
            anyhow::bail!("GitHub API returned status code {} for {}", response.status(), url);
        }
        Ok(response)
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn check_accessibility(&self, slug: &RepositorySlug) -> Result<Accessibility> {
        let response = self.get(&self.repo_url(slug, "")).await?;
        Ok(Accessibility::from_status(response.status().as_u16()))
    }

    async fn fetch_metadata(&self, slug: &RepositorySlug) -> Result<RepositoryMetadata> {
        let response = self.get_success(&self.repo_url(slug, "")).await?;
        let repo: GhRepository = response
            .json()
            .await
            .with_context(|| format!("Failed to parse repository metadata for {}", slug))?;
        Ok(repo.into())
    }

    async fn fetch_languages(&self, slug: &RepositorySlug) -> Result<LanguageBreakdown> {
        let response = self.get_success(&self.repo_url(slug, "/languages")).await?;
        let languages: Map<String, Value> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse languages for {}", slug))?;

        Ok(languages
            .into_iter()
            .map(|(name, bytes)| (name, bytes.as_u64().unwrap_or(0)))
            .collect())
    }

    async fn fetch_manifest_files(&self, slug: &RepositorySlug) -> Result<Vec<ManifestFile>> {
        let mut found = Vec::new();

        for candidate in &self.manifest_candidates {
            let url = self.repo_url(
                slug,
                &format!("/contents/{}", urlencoding::encode(candidate)),
            );
            let response = match self.get(&url).await {
                Ok(response) if response.status().is_success() => response,
                _ => continue,
            };

            let manifest = match response.json::<GhContent>().await {
                Ok(content) => ManifestFile {
                    name: content.name,
                    path: content.path,
                    content: content.content,
                },
                // a directory listing or an unexpected body still proves the path exists
                Err(_) => ManifestFile {
                    name: candidate.clone(),
                    path: candidate.clone(),
                    content: None,
                },
            };
            found.push(manifest);
        }

        Ok(found)
    }

    fn rate_limit(&self) -> RateLimitState {
        self.rate_limit.snapshot()
    }
}
