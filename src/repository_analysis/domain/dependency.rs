use std::fmt;

/// Version used when a dependency string carries no `@version` part
const UNKNOWN_VERSION: &str = "unknown";

/// A `name@version` dependency string split into its parts.
///
/// Scoped npm names (`@scope/pkg@1.0.0`) keep their leading `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencySpec {
    name: String,
    version: String,
}

impl DependencySpec {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Splits on the last `@` that is not the leading scope marker
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        match spec.rfind('@') {
            Some(idx) if idx > 0 && idx + 1 < spec.len() => {
                Self::new(&spec[..idx], &spec[idx + 1..])
            }
            Some(idx) if idx > 0 => Self::new(&spec[..idx], UNKNOWN_VERSION),
            _ => Self::new(spec, UNKNOWN_VERSION),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// npm package URL for this dependency
    pub fn purl(&self) -> String {
        format!("pkg:npm/{}@{}", self.name, self.version)
    }
}

impl fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
