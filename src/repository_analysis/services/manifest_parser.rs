use crate::ports::outbound::ManifestFile;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

/// The only manifest whose contents are parsed
pub const NODE_MANIFEST: &str = "package.json";

/// Manifest files probed for every repository, in probe order
pub const DEFAULT_MANIFEST_CANDIDATES: &[&str] = &[
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "requirements.txt",
    "Pipfile",
    "pyproject.toml",
    "Cargo.toml",
    "Cargo.lock",
    "go.mod",
    "pom.xml",
    "build.gradle",
    "Gemfile",
    "composer.json",
    "Package.swift",
    "pubspec.yaml",
];

/// Dependency sections of package.json that contribute to the count
const NODE_DEPENDENCY_SECTIONS: &[&str] = &["dependencies", "devDependencies"];

/// Dependencies extracted from the manifests of one repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedManifest {
    pub dependency_count: usize,
    /// `name@version` strings, runtime dependencies first
    pub dependencies: Vec<String>,
}

impl ParsedManifest {
    pub fn is_empty(&self) -> bool {
        self.dependency_count == 0 && self.dependencies.is_empty()
    }
}

/// Extracts dependencies from fetched manifest files
pub struct ManifestParser;

impl ManifestParser {
    /// Parses every `package.json` among `files`; anything undecodable contributes nothing
    pub fn parse(files: &[ManifestFile]) -> ParsedManifest {
        let mut parsed = ParsedManifest::default();

        for file in files.iter().filter(|f| f.name == NODE_MANIFEST) {
            let Some(content) = file.content.as_deref() else {
                continue;
            };
            if let Some(manifest) = Self::parse_package_json(content) {
                parsed.dependency_count += manifest.dependency_count;
                parsed.dependencies.extend(manifest.dependencies);
            }
        }

        parsed
    }

    /// Decodes a base64 `package.json` payload (line breaks allowed, as the
    /// contents API sends them) and reads its dependency sections
    pub fn parse_package_json(base64_content: &str) -> Option<ParsedManifest> {
        let compact: String = base64_content
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let decoded = STANDARD.decode(compact).ok()?;
        let json: Value = serde_json::from_slice(&decoded).ok()?;

        let mut parsed = ParsedManifest::default();
        for section in NODE_DEPENDENCY_SECTIONS {
            let Some(entries) = json.get(*section).and_then(Value::as_object) else {
                continue;
            };
            parsed.dependency_count += entries.len();
            for (name, version) in entries {
                let version = match version {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                parsed.dependencies.push(format!("{}@{}", name, version));
            }
        }

        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(content: &str) -> String {
        STANDARD.encode(content)
    }

    fn manifest(name: &str, content: Option<String>) -> ManifestFile {
        ManifestFile {
            name: name.to_string(),
            path: name.to_string(),
            content,
        }
    }

    #[test]
    fn test_parse_package_json_counts_both_sections() {
        let json = r#"{
            "name": "widget",
            "dependencies": { "left-pad": "1.0.0", "chalk": "^2.0.0" },
            "devDependencies": { "jest": "29.0.0" }
        }"#;

        let parsed = ManifestParser::parse_package_json(&encode(json)).unwrap();
        assert_eq!(parsed.dependency_count, 3);
        assert_eq!(
            parsed.dependencies,
            vec!["left-pad@1.0.0", "chalk@^2.0.0", "jest@29.0.0"]
        );
    }

    #[test]
    fn test_parse_package_json_with_line_breaks() {
        let encoded = encode(r#"{"dependencies":{"express":"4.18.2"}}"#);
        let (head, tail) = encoded.split_at(10);
        let wrapped = format!("{}\n{}\n", head, tail);

        let parsed = ManifestParser::parse_package_json(&wrapped).unwrap();
        assert_eq!(parsed.dependencies, vec!["express@4.18.2"]);
    }

    #[test]
    fn test_parse_package_json_without_sections() {
        let parsed = ManifestParser::parse_package_json(&encode(r#"{"name":"x"}"#)).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parse_package_json_invalid_json() {
        assert!(ManifestParser::parse_package_json(&encode("not json")).is_none());
        assert!(ManifestParser::parse_package_json("%%%not-base64%%%").is_none());
    }

    #[test]
    fn test_parse_ignores_other_manifests_and_bad_content() {
        let files = vec![
            manifest("Cargo.toml", Some(encode("[package]"))),
            manifest("package.json", Some(encode("{broken"))),
            manifest("package.json", None),
            manifest(
                "package.json",
                Some(encode(r#"{"devDependencies":{"jest":"29.0.0"}}"#)),
            ),
        ];

        let parsed = ManifestParser::parse(&files);
        assert_eq!(parsed.dependency_count, 1);
        assert_eq!(parsed.dependencies, vec!["jest@29.0.0"]);
    }

    #[test]
    fn test_default_candidates() {
        assert_eq!(DEFAULT_MANIFEST_CANDIDATES.len(), 15);
        assert_eq!(DEFAULT_MANIFEST_CANDIDATES[0], NODE_MANIFEST);
    }
}
