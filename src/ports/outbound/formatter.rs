use crate::application::read_models::{ReportReadModel, SbomReadModel};
use crate::shared::Result;

/// SbomFormatter port for rendering one SBOM document
///
/// Implemented once per document shape (CycloneDX, SPDX). Output depends only
/// on the read model, so the same model always renders the same document.
pub trait SbomFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &SbomReadModel) -> Result<String>;
}

/// ReportFormatter port for rendering the session report
pub trait ReportFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
