use crate::application::catalog::RepositoryCatalog;
use crate::ports::outbound::ProgressReporter;
use crate::repository_analysis::domain::ComparisonReport;
use crate::repository_analysis::services::{ComparisonEngine, DependencySetSource};
use crate::shared::error::DashboardError;
use crate::shared::Result;

/// CompareToolsUseCase - reconciles Syft and OWASP results over the selection
///
/// The report is kept in the catalog as the latest comparison.
pub struct CompareToolsUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> CompareToolsUseCase<S, PR>
where
    S: DependencySetSource,
    PR: ProgressReporter,
{
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// # Errors
    /// `NoRepositoriesSelected` when the selection is empty
    pub fn execute(&self, catalog: &mut RepositoryCatalog) -> Result<ComparisonReport> {
        let selected = catalog.selected_repositories();
        if selected.is_empty() {
            return Err(DashboardError::NoRepositoriesSelected.into());
        }

        self.progress_reporter.report(&format!(
            "⚖️  Comparing Syft and OWASP Dependency-Check across {} repositor{}...",
            selected.len(),
            if selected.len() == 1 { "y" } else { "ies" }
        ));

        let report = ComparisonEngine::compare(&selected, &self.source);

        self.progress_reporter.report(&format!(
            "   - Syft: {} dependencies, OWASP: {} dependencies",
            report.syft_total, report.owasp_total
        ));
        self.progress_reporter.report(&format!(
            "   - Common: {}, only Syft: {}, only OWASP: {}",
            report.common_count(),
            report.missing_from_owasp.len(),
            report.missing_from_syft.len()
        ));

        catalog.log_challenge(
            "Comparison completed",
            format!(
                "{} common, {} reported by one tool only",
                report.common_count(),
                report.all_missing().len()
            ),
            true,
            None,
        );
        catalog.set_last_comparison(report.clone());

        self.progress_reporter
            .report_completion("✅ Comparison complete");
        Ok(report)
    }
}
