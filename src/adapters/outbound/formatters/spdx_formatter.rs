use crate::application::read_models::{ComponentView, SbomReadModel, SubjectView};
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;
use serde::Serialize;

const SPDX_VERSION: &str = "SPDX-2.3";
const DOCUMENT_ID: &str = "SPDXRef-DOCUMENT";
const ROOT_PACKAGE_ID: &str = "SPDXRef-Package-root";
const NAMESPACE_BASE: &str = "https://spdx.org/spdxdocs";
const NOASSERTION: &str = "NOASSERTION";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpdxDocument {
    spdx_version: String,
    data_license: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    document_namespace: String,
    creation_info: CreationInfo,
    packages: Vec<Package>,
    relationships: Vec<Relationship>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreationInfo {
    created: String,
    creators: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Package {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    version_info: String,
    download_location: String,
    files_analyzed: bool,
    license_concluded: String,
    license_declared: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    external_refs: Vec<ExternalRef>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExternalRef {
    reference_category: String,
    reference_type: String,
    reference_locator: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Relationship {
    spdx_element_id: String,
    relationship_type: String,
    related_spdx_element: String,
}

/// SpdxFormatter adapter for generating SPDX 2.3 JSON format
///
/// The document DESCRIBES the repository package, which CONTAINS one
/// package per dependency. The namespace is derived from the serial number
/// so the output depends only on the read model.
pub struct SpdxFormatter;

impl SpdxFormatter {
    pub fn new() -> Self {
        Self
    }

    /// SPDX ids allow letters, digits, `.` and `-` only
    fn sanitize(value: &str) -> String {
        value
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }

    /// `position` keeps ids unique when sanitizing folds two names together
    fn package_id(position: usize, component: &ComponentView) -> String {
        format!(
            "SPDXRef-Package-{}-{}-{}",
            position,
            Self::sanitize(&component.name),
            Self::sanitize(&component.version)
        )
    }

    fn root_package(subject: &SubjectView) -> Package {
        Package {
            spdx_id: ROOT_PACKAGE_ID.to_string(),
            name: subject.name.clone(),
            version_info: subject.version.clone(),
            download_location: format!("https://github.com/{}", subject.name),
            files_analyzed: false,
            license_concluded: NOASSERTION.to_string(),
            license_declared: NOASSERTION.to_string(),
            external_refs: vec![ExternalRef {
                reference_category: "PACKAGE-MANAGER".to_string(),
                reference_type: "purl".to_string(),
                reference_locator: subject.purl.clone(),
            }],
        }
    }

    fn dependency_package(position: usize, component: &ComponentView) -> Package {
        Package {
            spdx_id: Self::package_id(position, component),
            name: component.name.clone(),
            version_info: component.version.clone(),
            download_location: NOASSERTION.to_string(),
            files_analyzed: false,
            license_concluded: NOASSERTION.to_string(),
            license_declared: NOASSERTION.to_string(),
            external_refs: vec![ExternalRef {
                reference_category: "PACKAGE-MANAGER".to_string(),
                reference_type: "purl".to_string(),
                reference_locator: component.purl.clone(),
            }],
        }
    }
}

impl Default for SpdxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let serial = model
            .metadata
            .serial_number
            .trim_start_matches("urn:uuid:");

        let mut packages = vec![Self::root_package(&model.subject)];
        let mut relationships = vec![Relationship {
            spdx_element_id: DOCUMENT_ID.to_string(),
            relationship_type: "DESCRIBES".to_string(),
            related_spdx_element: ROOT_PACKAGE_ID.to_string(),
        }];

        for (index, component) in model.components.iter().enumerate() {
            let package = Self::dependency_package(index + 1, component);
            relationships.push(Relationship {
                spdx_element_id: ROOT_PACKAGE_ID.to_string(),
                relationship_type: "CONTAINS".to_string(),
                related_spdx_element: package.spdx_id.clone(),
            });
            packages.push(package);
        }

        let document = SpdxDocument {
            spdx_version: SPDX_VERSION.to_string(),
            data_license: "CC0-1.0".to_string(),
            spdx_id: DOCUMENT_ID.to_string(),
            name: model.subject.name.clone(),
            document_namespace: format!(
                "{}/{}-{}",
                NAMESPACE_BASE,
                Self::sanitize(&model.subject.name),
                serial
            ),
            creation_info: CreationInfo {
                created: model.metadata.timestamp.clone(),
                creators: vec![format!(
                    "Tool: {}-{}",
                    model.metadata.tool_name, model.metadata.tool_version
                )],
            },
            packages,
            relationships,
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}
