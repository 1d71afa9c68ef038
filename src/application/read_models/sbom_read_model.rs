//! Query-optimized read model for SBOM documents
//!
//! Formatters consume this instead of the domain record so that every
//! document shape is rendered from the same denormalized data.

use super::component_view::{ComponentView, SubjectView};

/// Everything a formatter needs to render one SBOM document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomReadModel {
    pub metadata: SbomMetadataView,
    pub subject: SubjectView,
    pub components: Vec<ComponentView>,
}

/// Document-level metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomMetadataView {
    pub timestamp: String,
    pub serial_number: String,
    pub tool_name: String,
    pub tool_vendor: String,
    pub tool_version: String,
}
