use crate::repository_analysis::domain::{SbomMetadata, ScannerTool};
use chrono::Utc;
use uuid::Uuid;

/// SbomGenerator service for generating per-document SBOM metadata
pub struct SbomGenerator;

impl SbomGenerator {
    /// Metadata with the current timestamp and a fresh UUID serial number
    pub fn generate_metadata(tool: ScannerTool) -> SbomMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        SbomMetadata::new(timestamp, tool, serial_number)
    }
}
