use async_trait::async_trait;
use base64::Engine;
use repo_sbom::ports::outbound::{
    Accessibility, LanguageBreakdown, ManifestFile, RepositoryMetadata,
};
use repo_sbom::prelude::*;
use repo_sbom::repository_analysis::domain::RateLimitState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Canned responses for one repository
#[derive(Clone, Debug)]
pub struct MockRepository {
    pub accessibility: Accessibility,
    pub metadata: RepositoryMetadata,
    pub languages: LanguageBreakdown,
    pub manifests: Vec<ManifestFile>,
}

impl MockRepository {
    pub fn new(owner: &str, name: &str, stars: u64) -> Self {
        Self {
            accessibility: Accessibility::Accessible,
            metadata: RepositoryMetadata {
                id: 1,
                name: name.to_string(),
                full_name: format!("{}/{}", owner, name),
                owner: owner.to_string(),
                description: Some(format!("The {} project", name)),
                stars,
                forks: stars / 10,
                license: Some("MIT".to_string()),
                size_kb: 2048,
                default_branch: "main".to_string(),
                ..Default::default()
            },
            languages: vec![("JavaScript".to_string(), 5000), ("CSS".to_string(), 100)],
            manifests: Vec::new(),
        }
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn with_languages(mut self, languages: &[(&str, u64)]) -> Self {
        self.languages = languages
            .iter()
            .map(|(name, bytes)| (name.to_string(), *bytes))
            .collect();
        self
    }

    /// Adds a `package.json` whose content is base64-encoded like the contents API returns it
    pub fn with_package_json(mut self, json: &str) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(json);
        self.manifests.push(ManifestFile {
            name: "package.json".to_string(),
            path: "package.json".to_string(),
            content: Some(encoded),
        });
        self
    }

    pub fn with_manifest(mut self, name: &str) -> Self {
        self.manifests.push(ManifestFile {
            name: name.to_string(),
            path: name.to_string(),
            content: None,
        });
        self
    }
}

/// Mock RepositoryHost keyed by `owner/name`
///
/// Unknown repositories answer NotFound; `with_transport_failure` makes every
/// call fail like an unreachable server.
#[derive(Clone, Default)]
pub struct MockRepositoryHost {
    repositories: HashMap<String, MockRepository>,
    transport_failure: bool,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockRepositoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(mut self, repository: MockRepository) -> Self {
        self.repositories
            .insert(repository.metadata.full_name.clone(), repository);
        self
    }

    pub fn with_transport_failure() -> Self {
        Self {
            transport_failure: true,
            ..Self::default()
        }
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn lookup(&self, call: &str, slug: &RepositorySlug) -> Result<Option<MockRepository>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {}", call, slug.full_name()));
        if self.transport_failure {
            anyhow::bail!("connection refused");
        }
        Ok(self.repositories.get(&slug.full_name()).cloned())
    }

    fn require(&self, call: &str, slug: &RepositorySlug) -> Result<MockRepository> {
        self.lookup(call, slug)?
            .ok_or_else(|| anyhow::anyhow!("unexpected {} for {}", call, slug))
    }
}

#[async_trait]
impl RepositoryHost for MockRepositoryHost {
    async fn check_accessibility(&self, slug: &RepositorySlug) -> Result<Accessibility> {
        Ok(self
            .lookup("access", slug)?
            .map(|r| r.accessibility)
            .unwrap_or(Accessibility::NotFound))
    }

    async fn fetch_metadata(&self, slug: &RepositorySlug) -> Result<RepositoryMetadata> {
        Ok(self.require("metadata", slug)?.metadata)
    }

    async fn fetch_languages(&self, slug: &RepositorySlug) -> Result<LanguageBreakdown> {
        Ok(self.require("languages", slug)?.languages)
    }

    async fn fetch_manifest_files(&self, slug: &RepositorySlug) -> Result<Vec<ManifestFile>> {
        Ok(self.require("manifests", slug)?.manifests)
    }

    fn rate_limit(&self) -> RateLimitState {
        RateLimitState::default()
    }
}
