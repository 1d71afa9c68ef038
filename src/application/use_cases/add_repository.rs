use crate::application::catalog::RepositoryCatalog;
use crate::application::dto::AddOutcome;
use crate::ports::outbound::{ProgressReporter, RandomSource, RepositoryHost};
use crate::repository_analysis::domain::{
    MetadataSnapshot, RecordSource, RepositoryId, RepositoryRecord, RepositorySlug,
};
use crate::repository_analysis::policies::PopularityTier;
use crate::repository_analysis::services::{ManifestParser, SimulatedRecordFactory};
use crate::shared::error::DashboardError;
use crate::shared::Result;
use chrono::Utc;

/// Language reported when the host returns no language breakdown
const UNKNOWN_LANGUAGE: &str = "Unknown";

/// AddRepositoryUseCase - registers one repository in the catalog
///
/// Resolves the input to a slug, fetches the repository through the host and
/// stores the resulting record. When fetching fails and the fallback is
/// enabled, a simulated record is stored instead and flagged as such.
///
/// # Type Parameters
/// * `H` - RepositoryHost implementation
/// * `R` - RandomSource implementation
/// * `PR` - ProgressReporter implementation
pub struct AddRepositoryUseCase<H, R, PR> {
    host: H,
    random: R,
    progress_reporter: PR,
    allow_mock_fallback: bool,
}

impl<H, R, PR> AddRepositoryUseCase<H, R, PR>
where
    H: RepositoryHost,
    R: RandomSource,
    PR: ProgressReporter,
{
    pub fn new(host: H, random: R, progress_reporter: PR, allow_mock_fallback: bool) -> Self {
        Self {
            host,
            random,
            progress_reporter,
            allow_mock_fallback,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Registers `url` in `catalog`
    ///
    /// # Errors
    /// * `EmptyUrl` for blank input
    /// * `InvalidUrl` when no `owner/name` slug can be derived
    /// * any fetch failure, but only when the fallback is disabled
    pub async fn execute(&self, catalog: &mut RepositoryCatalog, url: &str) -> Result<AddOutcome> {
        if url.trim().is_empty() {
            return Err(DashboardError::EmptyUrl.into());
        }

        let id = RepositoryId::derive(url);
        if catalog.contains(id.as_str()) {
            self.progress_reporter
                .report(&format!("ℹ️  Repository already added: {}", url.trim()));
            return Ok(AddOutcome::AlreadyExists {
                id: id.to_string(),
            });
        }

        let slug = RepositorySlug::parse(url)?;
        self.progress_reporter
            .report(&format!("🔍 Fetching repository {}...", slug));

        let record = match self.fetch_live_record(&id, &slug).await {
            Ok(record) => {
                self.progress_reporter.report_completion(&format!(
                    "✅ Added {} ({}, {} dependencies)",
                    record.full_name, record.language, record.dependency_count
                ));
                catalog.log_challenge(
                    "Repository fetched",
                    format!(
                        "Fetched {} with {} manifest file(s)",
                        record.full_name,
                        record.manifest_files.len()
                    ),
                    true,
                    None,
                );
                record
            }
            Err(error) if self.allow_mock_fallback => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Could not fetch {}: {}. Using simulated data.",
                    slug, error
                ));
                catalog.log_challenge(
                    "Repository fetch failed",
                    format!("{}: {}", slug, error),
                    true,
                    Some("Stored a simulated record instead".to_string()),
                );
                SimulatedRecordFactory::create(&id, &slug, &self.random)
            }
            Err(error) => {
                catalog.log_challenge(
                    "Repository fetch failed",
                    format!("{}: {}", slug, error),
                    false,
                    None,
                );
                return Err(error);
            }
        };

        catalog.insert(record.clone());
        Ok(AddOutcome::Added(record))
    }

    async fn fetch_live_record(
        &self,
        id: &RepositoryId,
        slug: &RepositorySlug,
    ) -> Result<RepositoryRecord> {
        let accessibility = self.host.check_accessibility(slug).await?;
        if let Some(error) = accessibility.into_error(slug) {
            return Err(error.into());
        }

        let metadata = self.host.fetch_metadata(slug).await?;
        let languages = self.host.fetch_languages(slug).await?;
        let language = languages
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string());

        let manifests = self.host.fetch_manifest_files(slug).await?;
        let parsed = ManifestParser::parse(&manifests);
        let dependency_count = if parsed.dependency_count == 0 {
            PopularityTier::estimate_dependencies(metadata.stars, &self.random)
        } else {
            parsed.dependency_count
        };

        Ok(RepositoryRecord {
            id: id.to_string(),
            full_name: metadata.full_name,
            name: metadata.name,
            owner: metadata.owner,
            language,
            stars: metadata.stars,
            forks: metadata.forks,
            dependency_count,
            description: metadata
                .description
                .unwrap_or_else(|| "No description".to_string()),
            license: metadata.license.unwrap_or_else(|| "No license".to_string()),
            size_kb: metadata.size_kb,
            manifest_files: manifests.into_iter().map(|m| m.name).collect(),
            dependencies: parsed.dependencies,
            scanned: false,
            created_at: Utc::now(),
            snapshot: Some(MetadataSnapshot {
                id: metadata.id,
                private: metadata.private,
                archived: metadata.archived,
                disabled: metadata.disabled,
                open_issues: metadata.open_issues,
                default_branch: metadata.default_branch,
            }),
            source: RecordSource::Live,
        })
    }
}
