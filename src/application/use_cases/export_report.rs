use crate::application::catalog::RepositoryCatalog;
use crate::application::dto::{RenderedReport, ReportFormat};
use crate::application::factories::FormatterFactory;
use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// ExportReportUseCase - renders the session report
///
/// Pure presentation over the catalog; the only state change is the
/// challenge-log entry recording the export.
pub struct ExportReportUseCase<PR> {
    progress_reporter: PR,
}

impl<PR: ProgressReporter> ExportReportUseCase<PR> {
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Renders the report in `format`, named after the date of `generated_at`
    pub fn execute(
        &self,
        catalog: &mut RepositoryCatalog,
        format: ReportFormat,
        generated_at: DateTime<Utc>,
    ) -> Result<RenderedReport> {
        self.progress_reporter
            .report(FormatterFactory::progress_message(format));

        let file_name = RenderedReport::file_name_for(format, generated_at);
        catalog.log_challenge(
            "Report generated",
            format!("Exported {}", file_name),
            true,
            None,
        );

        let model = ReportReadModel::from_catalog(catalog, generated_at.to_rfc3339());
        let content = FormatterFactory::create_report(format).format(&model)?;

        Ok(RenderedReport {
            format,
            file_name,
            content,
        })
    }
}
