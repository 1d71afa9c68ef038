//! Builder for constructing SbomReadModel from domain objects

use super::component_view::{ComponentView, SubjectView};
use super::sbom_read_model::{SbomMetadataView, SbomReadModel};
use crate::repository_analysis::domain::{DependencySpec, RepositoryRecord, SbomMetadata};

/// Version reported for the root component when the default branch is unknown
const UNKNOWN_REVISION: &str = "HEAD";

pub struct SbomReadModelBuilder;

impl SbomReadModelBuilder {
    /// Builds the read model for one repository, one tool, one dependency set
    ///
    /// `dependencies` are `name@version` strings in the order they should
    /// appear in the document.
    pub fn build(
        record: &RepositoryRecord,
        dependencies: &[String],
        metadata: &SbomMetadata,
    ) -> SbomReadModel {
        SbomReadModel {
            metadata: Self::build_metadata(metadata),
            subject: Self::build_subject(record),
            components: Self::build_components(dependencies),
        }
    }

    fn build_metadata(metadata: &SbomMetadata) -> SbomMetadataView {
        let tool = metadata.tool();
        SbomMetadataView {
            timestamp: metadata.timestamp().to_string(),
            serial_number: metadata.serial_number().to_string(),
            tool_name: tool.display_name().to_string(),
            tool_vendor: tool.vendor().to_string(),
            tool_version: tool.version().to_string(),
        }
    }

    fn build_subject(record: &RepositoryRecord) -> SubjectView {
        let version = record
            .snapshot
            .as_ref()
            .map(|snapshot| snapshot.default_branch.clone())
            .filter(|branch| !branch.is_empty())
            .unwrap_or_else(|| UNKNOWN_REVISION.to_string());

        SubjectView {
            bom_ref: record.id.clone(),
            name: record.full_name.clone(),
            version,
            description: record.description.clone(),
            license: record.license.clone(),
            purl: format!("pkg:github/{}/{}", record.owner, record.name),
        }
    }

    fn build_components(dependencies: &[String]) -> Vec<ComponentView> {
        dependencies
            .iter()
            .map(|entry| {
                let spec = DependencySpec::parse(entry);
                ComponentView {
                    bom_ref: format!("{}@{}", spec.name(), spec.version()),
                    name: spec.name().to_string(),
                    version: spec.version().to_string(),
                    purl: spec.purl(),
                }
            })
            .collect()
    }
}
