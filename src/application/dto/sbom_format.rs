use crate::repository_analysis::domain::{RepositoryRecord, ScannerTool};
use serde::Serialize;

/// SBOM document shapes generated for every scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SbomFormat {
    /// CycloneDX 1.4 JSON
    #[serde(rename = "cyclonedx")]
    CycloneDx,
    /// SPDX 2.3 JSON
    #[serde(rename = "spdx")]
    Spdx,
}

impl SbomFormat {
    pub const ALL: [SbomFormat; 2] = [SbomFormat::CycloneDx, SbomFormat::Spdx];

    pub fn as_str(&self) -> &'static str {
        match self {
            SbomFormat::CycloneDx => "cyclonedx",
            SbomFormat::Spdx => "spdx",
        }
    }

    /// `<owner>_<repo>-<tool>-<format>.json`
    pub fn artifact_file_name(&self, record: &RepositoryRecord, tool: ScannerTool) -> String {
        format!(
            "{}_{}-{}-{}.json",
            record.owner,
            record.name,
            tool.as_str(),
            self.as_str()
        )
    }
}

impl std::str::FromStr for SbomFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cyclonedx" | "cdx" => Ok(SbomFormat::CycloneDx),
            "spdx" => Ok(SbomFormat::Spdx),
            _ => Err(format!(
                "Invalid SBOM format: {}. Please specify 'cyclonedx' or 'spdx'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SbomFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_str() {
        assert_eq!(SbomFormat::from_str("CycloneDX").unwrap(), SbomFormat::CycloneDx);
        assert_eq!(SbomFormat::from_str("cdx").unwrap(), SbomFormat::CycloneDx);
        assert_eq!(SbomFormat::from_str("SPDX").unwrap(), SbomFormat::Spdx);
    }

    #[test]
    fn test_from_str_invalid() {
        let error = SbomFormat::from_str("swid").unwrap_err();
        assert!(error.contains("swid"));
        assert!(error.contains("cyclonedx"));
    }

    #[test]
    fn test_artifact_file_name() {
        use crate::repository_analysis::domain::RecordSource;

        let record = RepositoryRecord {
            id: "repo-1".to_string(),
            full_name: "acme/widget".to_string(),
            name: "widget".to_string(),
            owner: "acme".to_string(),
            language: "Go".to_string(),
            stars: 0,
            forks: 0,
            dependency_count: 0,
            description: String::new(),
            license: String::new(),
            size_kb: 0,
            manifest_files: vec![],
            dependencies: vec![],
            scanned: true,
            created_at: chrono::Utc::now(),
            snapshot: None,
            source: RecordSource::Live,
        };

        assert_eq!(
            SbomFormat::Spdx.artifact_file_name(&record, ScannerTool::Owasp),
            "acme_widget-owasp-spdx.json"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(SbomFormat::CycloneDx.to_string(), "cyclonedx");
        assert_eq!(SbomFormat::Spdx.to_string(), "spdx");
    }
}
