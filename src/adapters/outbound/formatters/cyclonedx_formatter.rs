use crate::application::read_models::{
    ComponentView, SbomMetadataView, SbomReadModel, SubjectView,
};
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;
use serde::Serialize;

const SPEC_VERSION: &str = "1.4";

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: String,
    #[serde(rename = "specVersion")]
    spec_version: String,
    version: u32,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    metadata: Metadata,
    components: Vec<Component>,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Serialize)]
struct Dependency {
    #[serde(rename = "ref")]
    bom_ref: String,
    #[serde(rename = "dependsOn", skip_serializing_if = "Vec::is_empty")]
    depends_on: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
    component: Component,
}

#[derive(Debug, Serialize)]
struct Tool {
    vendor: String,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: String,
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<Vec<License>>,
    purl: String,
}

#[derive(Debug, Serialize)]
struct License {
    license: LicenseContent,
}

#[derive(Debug, Serialize)]
struct LicenseContent {
    name: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.4 JSON format
///
/// The scanned repository is the root `metadata.component`; every
/// dependency is a `library` component the root depends on.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX".to_string(),
            spec_version: SPEC_VERSION.to_string(),
            version: 1,
            serial_number: model.metadata.serial_number.clone(),
            metadata: self.build_metadata(&model.metadata, &model.subject),
            components: self.build_components(&model.components),
            dependencies: self.build_dependencies(&model.subject, &model.components),
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}

impl CycloneDxFormatter {
    fn build_metadata(&self, metadata: &SbomMetadataView, subject: &SubjectView) -> Metadata {
        Metadata {
            timestamp: metadata.timestamp.clone(),
            tools: vec![Tool {
                vendor: metadata.tool_vendor.clone(),
                name: metadata.tool_name.clone(),
                version: metadata.tool_version.clone(),
            }],
            component: Component {
                component_type: "application".to_string(),
                bom_ref: subject.bom_ref.clone(),
                name: subject.name.clone(),
                version: subject.version.clone(),
                description: Some(subject.description.clone()).filter(|d| !d.is_empty()),
                licenses: Some(vec![License {
                    license: LicenseContent {
                        name: subject.license.clone(),
                    },
                }]),
                purl: subject.purl.clone(),
            },
        }
    }

    fn build_components(&self, components: &[ComponentView]) -> Vec<Component> {
        components
            .iter()
            .map(|c| Component {
                component_type: "library".to_string(),
                bom_ref: c.bom_ref.clone(),
                name: c.name.clone(),
                version: c.version.clone(),
                description: None,
                licenses: None,
                purl: c.purl.clone(),
            })
            .collect()
    }

    /// Root entry first, then one leaf entry per component
    fn build_dependencies(
        &self,
        subject: &SubjectView,
        components: &[ComponentView],
    ) -> Vec<Dependency> {
        let mut dependencies = vec![Dependency {
            bom_ref: subject.bom_ref.clone(),
            depends_on: components.iter().map(|c| c.bom_ref.clone()).collect(),
        }];
        dependencies.extend(components.iter().map(|c| Dependency {
            bom_ref: c.bom_ref.clone(),
            depends_on: Vec::new(),
        }));
        dependencies
    }
}
