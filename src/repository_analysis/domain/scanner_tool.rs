use serde::Serialize;
use std::fmt;

/// The two simulated scanners whose dependency sets are compared.
///
/// Each tool carries its own override table of extra packages it "finds" in a
/// handful of well-known repositories; everything else about synthesis is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScannerTool {
    Syft,
    Owasp,
}

/// (repository full name, extra packages) per tool
type OverrideTable = &'static [(&'static str, &'static [&'static str])];

const SYFT_OVERRIDES: OverrideTable = &[
    (
        "facebook/react",
        &["loose-envify@1.4.0", "scheduler@0.23.0", "js-tokens@4.0.0"],
    ),
    (
        "expressjs/express",
        &["body-parser@1.20.2", "cookie@0.5.0", "qs@6.11.0"],
    ),
    ("lodash/lodash", &["lodash-es@4.17.21"]),
    (
        "axios/axios",
        &["follow-redirects@1.15.2", "form-data@4.0.0", "proxy-from-env@1.1.0"],
    ),
    ("vuejs/vue", &["@vue/shared@3.3.4", "csstype@3.1.2"]),
];

const OWASP_OVERRIDES: OverrideTable = &[
    ("facebook/react", &["loose-envify@1.4.0", "object-assign@4.1.1"]),
    (
        "expressjs/express",
        &["body-parser@1.20.2", "send@0.18.0", "serve-static@1.15.0"],
    ),
    ("lodash/lodash", &["lodash.merge@4.6.2", "lodash-es@4.17.21"]),
    ("axios/axios", &["follow-redirects@1.15.2", "combined-stream@1.0.8"]),
    ("vuejs/vue", &["@vue/shared@3.3.4", "@babel/parser@7.22.5"]),
];

impl ScannerTool {
    pub const ALL: [ScannerTool; 2] = [ScannerTool::Syft, ScannerTool::Owasp];

    /// Short identifier used in file names and report keys
    pub fn as_str(&self) -> &'static str {
        match self {
            ScannerTool::Syft => "syft",
            ScannerTool::Owasp => "owasp",
        }
    }

    /// Name written into generated SBOM metadata
    pub fn display_name(&self) -> &'static str {
        match self {
            ScannerTool::Syft => "Syft",
            ScannerTool::Owasp => "OWASP Dependency-Check",
        }
    }

    pub fn vendor(&self) -> &'static str {
        match self {
            ScannerTool::Syft => "Anchore",
            ScannerTool::Owasp => "OWASP",
        }
    }

    /// Version reported for the simulated tool
    pub fn version(&self) -> &'static str {
        match self {
            ScannerTool::Syft => "0.92.0",
            ScannerTool::Owasp => "8.4.0",
        }
    }

    /// Extra packages this tool reports for a repository; empty for unknown repositories
    pub fn overrides_for(&self, full_name: &str) -> &'static [&'static str] {
        let table = match self {
            ScannerTool::Syft => SYFT_OVERRIDES,
            ScannerTool::Owasp => OWASP_OVERRIDES,
        };
        table
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(full_name))
            .map(|(_, packages)| *packages)
            .unwrap_or(&[])
    }
}

impl fmt::Display for ScannerTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScannerTool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "syft" => Ok(ScannerTool::Syft),
            "owasp" | "dependency-check" => Ok(ScannerTool::Owasp),
            _ => Err(format!(
                "Invalid tool: {}. Please specify 'syft' or 'owasp'",
                s
            )),
        }
    }
}
