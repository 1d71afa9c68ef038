//! Component view for the SBOM read model

/// One dependency as it appears in an SBOM document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentView {
    /// Unique reference within the document
    pub bom_ref: String,
    pub name: String,
    pub version: String,
    /// Package URL, always `pkg:npm/<name>@<version>`
    pub purl: String,
}

/// The repository the document describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectView {
    pub bom_ref: String,
    /// `owner/name`
    pub name: String,
    pub version: String,
    pub description: String,
    pub license: String,
    /// `pkg:github/<owner>/<name>`
    pub purl: String,
}
