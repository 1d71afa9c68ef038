use crate::shared::Result;

/// OutputPresenter port for delivering a rendered report or SBOM document
///
/// Implementations decide the destination (stdout, a file in the output
/// directory, ...).
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
