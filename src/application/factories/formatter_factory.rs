use crate::adapters::outbound::formatters::{
    CycloneDxFormatter, JsonReportFormatter, SpdxFormatter, TextReportFormatter,
};
use crate::application::dto::{ReportFormat, SbomFormat};
use crate::ports::outbound::{ReportFormatter, SbomFormatter};

/// Factory for creating SBOM and report formatters
///
/// This factory encapsulates the creation logic for the formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates the formatter for one SBOM document shape
    ///
    /// # Examples
    /// ```
    /// use repo_sbom::application::dto::SbomFormat;
    /// use repo_sbom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create_sbom(SbomFormat::CycloneDx);
    /// ```
    pub fn create_sbom(format: SbomFormat) -> Box<dyn SbomFormatter> {
        match format {
            SbomFormat::CycloneDx => Box::new(CycloneDxFormatter::new()),
            SbomFormat::Spdx => Box::new(SpdxFormatter::new()),
        }
    }

    pub fn create_report(format: ReportFormat) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Json => Box::new(JsonReportFormatter::new()),
            ReportFormat::Text => Box::new(TextReportFormatter::new()),
        }
    }

    /// Returns the progress message for the specified report format
    ///
    /// # Examples
    /// ```
    /// use repo_sbom::application::dto::ReportFormat;
    /// use repo_sbom::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(ReportFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON analysis report...");
    /// ```
    pub fn progress_message(format: ReportFormat) -> &'static str {
        match format {
            ReportFormat::Json => "📝 Generating JSON analysis report...",
            ReportFormat::Text => "📝 Generating text analysis report...",
        }
    }
}
