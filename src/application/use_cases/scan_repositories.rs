use crate::application::catalog::RepositoryCatalog;
use crate::application::dto::{SbomFormat, ScanSummary};
use crate::application::factories::FormatterFactory;
use crate::application::read_models::SbomReadModelBuilder;
use crate::ports::outbound::{ProgressReporter, RandomSource};
use crate::repository_analysis::domain::ScannerTool;
use crate::repository_analysis::services::{DependencySetSource, SbomGenerator};
use crate::shared::error::DashboardError;
use crate::shared::Result;
use std::time::Duration;

/// Pause between scanned repositories: a fixed part plus random jitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanPacing {
    pub delay_ms: u64,
    pub jitter_ms: u64,
}

impl ScanPacing {
    pub const DEFAULT: ScanPacing = ScanPacing {
        delay_ms: 300,
        jitter_ms: 700,
    };

    pub const NONE: ScanPacing = ScanPacing {
        delay_ms: 0,
        jitter_ms: 0,
    };

    /// Jitter is drawn from `[0, jitter_ms]`; the sum saturates at `u64::MAX` ms
    pub fn pause(&self, random: &impl RandomSource) -> Duration {
        let jitter = random.gen_range(0, self.jitter_ms.saturating_add(1));
        Duration::from_millis(self.delay_ms.saturating_add(jitter))
    }

    pub fn is_disabled(&self) -> bool {
        self.delay_ms == 0 && self.jitter_ms == 0
    }
}

impl Default for ScanPacing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// ScanRepositoriesUseCase - simulated scan of the selected repositories
///
/// For each selected repository and each requested tool, synthesizes the
/// dependency set, renders one document per [`SbomFormat`] and stores them
/// in the catalog.
pub struct ScanRepositoriesUseCase<S, R, PR> {
    source: S,
    random: R,
    progress_reporter: PR,
    pacing: ScanPacing,
}

impl<S, R, PR> ScanRepositoriesUseCase<S, R, PR>
where
    S: DependencySetSource,
    R: RandomSource,
    PR: ProgressReporter,
{
    pub fn new(source: S, random: R, progress_reporter: PR, pacing: ScanPacing) -> Self {
        Self {
            source,
            random,
            progress_reporter,
            pacing,
        }
    }

    /// # Errors
    /// `NoRepositoriesSelected` when the selection is empty
    pub async fn execute(
        &self,
        catalog: &mut RepositoryCatalog,
        tools: &[ScannerTool],
    ) -> Result<ScanSummary> {
        let targets: Vec<String> = catalog
            .selected_repositories()
            .into_iter()
            .map(|record| record.id.clone())
            .collect();
        if targets.is_empty() {
            return Err(DashboardError::NoRepositoriesSelected.into());
        }

        let tool_names: Vec<&str> = tools.iter().map(|t| t.display_name()).collect();
        self.progress_reporter.report(&format!(
            "🔬 Scanning {} repositor{} with {}...",
            targets.len(),
            if targets.len() == 1 { "y" } else { "ies" },
            tool_names.join(" and ")
        ));

        let mut documents = 0;
        let mut dependencies = 0;

        for (index, id) in targets.iter().enumerate() {
            let Some(record) = catalog.get(id).cloned() else {
                continue;
            };
            self.progress_reporter.report_progress(
                index + 1,
                targets.len(),
                Some(&record.full_name),
            );

            for &tool in tools {
                let dependency_set = self.source.synthesize(&record, tool);
                dependencies += dependency_set.len();

                let metadata = SbomGenerator::generate_metadata(tool);
                let model = SbomReadModelBuilder::build(&record, &dependency_set, &metadata);

                for format in SbomFormat::ALL {
                    let document = FormatterFactory::create_sbom(format).format(&model)?;
                    catalog.store_artifact(tool, id, format, document)?;
                    documents += 1;
                }
            }

            if index + 1 < targets.len() && !self.pacing.is_disabled() {
                tokio::time::sleep(self.pacing.pause(&self.random)).await;
            }
        }

        catalog.log_challenge(
            "Scan completed",
            format!(
                "Generated {} SBOM document(s) for {} repositor{}",
                documents,
                targets.len(),
                if targets.len() == 1 { "y" } else { "ies" }
            ),
            true,
            None,
        );
        self.progress_reporter.report_completion(&format!(
            "✅ Scan complete: {} SBOM document(s) generated",
            documents
        ));

        Ok(ScanSummary {
            tools: tools.to_vec(),
            repositories: targets.len(),
            documents,
            dependencies,
        })
    }
}
