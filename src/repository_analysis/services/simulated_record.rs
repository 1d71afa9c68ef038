use crate::ports::outbound::RandomSource;
use crate::repository_analysis::domain::{
    RecordSource, RepositoryId, RepositoryRecord, RepositorySlug,
};
use crate::repository_analysis::policies::LanguageInference;
use chrono::Utc;

/// Description shown on records whose data could not be fetched
pub const SIMULATED_DESCRIPTION: &str =
    "Repository data could not be fetched; values are simulated";

/// Builds the placeholder record used when fetching a repository fails
pub struct SimulatedRecordFactory;

impl SimulatedRecordFactory {
    pub fn create(
        id: &RepositoryId,
        slug: &RepositorySlug,
        random: &impl RandomSource,
    ) -> RepositoryRecord {
        RepositoryRecord {
            id: id.to_string(),
            full_name: slug.full_name(),
            name: slug.name().to_string(),
            owner: slug.owner().to_string(),
            language: LanguageInference::infer(slug.name(), random),
            stars: random.gen_range(100, 50_000),
            forks: random.gen_range(10, 5_000),
            dependency_count: random.gen_range(10, 150) as usize,
            description: SIMULATED_DESCRIPTION.to_string(),
            license: "Unknown".to_string(),
            size_kb: random.gen_range(100, 100_000),
            manifest_files: Vec::new(),
            dependencies: Vec::new(),
            scanned: false,
            created_at: Utc::now(),
            snapshot: None,
            source: RecordSource::Simulated,
        }
    }
}
