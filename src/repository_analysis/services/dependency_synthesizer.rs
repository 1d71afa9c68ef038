use crate::ports::outbound::RandomSource;
use crate::repository_analysis::domain::{RepositoryRecord, ScannerTool};
use std::collections::HashSet;

/// Package names random dependencies are drawn from
pub const COMMON_PACKAGES: &[&str] = &[
    "lodash",
    "express",
    "react",
    "axios",
    "moment",
    "chalk",
    "commander",
    "debug",
    "uuid",
    "webpack",
    "babel-core",
    "typescript",
    "jest",
    "eslint",
    "prettier",
    "dotenv",
    "cors",
];

/// Upper bound (exclusive) of extra random entries added on top of real dependencies
const MAX_EXTRA_DEPENDENCIES: u64 = 5;

/// Seam between dependency-set production and its consumers (scan, comparison)
pub trait DependencySetSource {
    /// Produces the de-duplicated `name@version` list `tool` reports for `repo`
    fn synthesize(&self, repo: &RepositoryRecord, tool: ScannerTool) -> Vec<String>;
}

impl<T: DependencySetSource + ?Sized> DependencySetSource for &T {
    fn synthesize(&self, repo: &RepositoryRecord, tool: ScannerTool) -> Vec<String> {
        (**self).synthesize(repo, tool)
    }
}

/// Builds a plausible dependency list for a repository as seen by one tool.
///
/// Parsed manifest dependencies and the tool's override entries always appear
/// verbatim; the rest is random filler from `COMMON_PACKAGES`.
pub struct DependencySynthesizer<R: RandomSource> {
    random: R,
}

impl<R: RandomSource> DependencySynthesizer<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// `name@major.minor.patch` with major 1-5, minor and patch 0-9
    fn random_dependency(&self) -> String {
        let name = self.random.pick(COMMON_PACKAGES).copied().unwrap_or("lodash");
        format!(
            "{}@{}.{}.{}",
            name,
            self.random.gen_range(1, 6),
            self.random.gen_range(0, 10),
            self.random.gen_range(0, 10)
        )
    }
}

impl<R: RandomSource> DependencySetSource for DependencySynthesizer<R> {
    fn synthesize(&self, repo: &RepositoryRecord, tool: ScannerTool) -> Vec<String> {
        let overrides = tool.overrides_for(&repo.full_name);
        let mut dependencies: Vec<String> = Vec::new();

        if repo.has_parsed_dependencies() {
            dependencies.extend(repo.dependencies.iter().cloned());
            dependencies.extend(overrides.iter().map(|d| d.to_string()));
            let extra = self.random.gen_range(0, MAX_EXTRA_DEPENDENCIES);
            for _ in 0..extra {
                dependencies.push(self.random_dependency());
            }
        } else {
            dependencies.extend(overrides.iter().map(|d| d.to_string()));
            let padding = repo.dependency_count.saturating_sub(dependencies.len());
            for _ in 0..padding {
                dependencies.push(self.random_dependency());
            }
        }

        dedup_preserving_order(dependencies)
    }
}

/// Removes repeated entries, keeping each first occurrence in place
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::random::ThreadRngSource;
    use crate::repository_analysis::domain::RecordSource;
    use chrono::Utc;
    use std::sync::Mutex;

    /// Replays scripted offsets, clamped into the requested range
    struct Scripted(Mutex<Vec<u64>>);

    impl Scripted {
        fn new(mut values: Vec<u64>) -> Self {
            values.reverse();
            Self(Mutex::new(values))
        }
    }

    impl RandomSource for Scripted {
        fn gen_range(&self, low: u64, high: u64) -> u64 {
            let next = self.0.lock().unwrap().pop().unwrap_or(0);
            (low + next).min(high.saturating_sub(1).max(low))
        }
    }

    fn record(full_name: &str, dependencies: &[&str], dependency_count: usize) -> RepositoryRecord {
        let (owner, name) = full_name.split_once('/').unwrap();
        RepositoryRecord {
            id: format!("repo-{}", name),
            full_name: full_name.to_string(),
            name: name.to_string(),
            owner: owner.to_string(),
            language: "JavaScript".to_string(),
            stars: 10,
            forks: 1,
            dependency_count,
            description: String::new(),
            license: "MIT".to_string(),
            size_kb: 1,
            manifest_files: vec![],
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
            scanned: false,
            created_at: Utc::now(),
            snapshot: None,
            source: RecordSource::Live,
        }
    }

    #[test]
    fn test_parsed_dependencies_always_present() {
        let synthesizer = DependencySynthesizer::new(ThreadRngSource::new());
        let repo = record("acme/widget", &["left-pad@1.0.0", "chalk@2.0.0"], 2);

        for tool in ScannerTool::ALL {
            for _ in 0..50 {
                let deps = synthesizer.synthesize(&repo, tool);
                assert!(deps.contains(&"left-pad@1.0.0".to_string()));
                assert!(deps.contains(&"chalk@2.0.0".to_string()));
                assert!(deps.len() <= 2 + 4);
            }
        }
    }

    #[test]
    fn test_overrides_added_for_known_repository() {
        let synthesizer = DependencySynthesizer::new(ThreadRngSource::new());
        let repo = record("facebook/react", &["loose-envify@1.4.0"], 1);

        let syft = synthesizer.synthesize(&repo, ScannerTool::Syft);
        for expected in ScannerTool::Syft.overrides_for("facebook/react") {
            assert!(syft.contains(&expected.to_string()));
        }

        let owasp = synthesizer.synthesize(&repo, ScannerTool::Owasp);
        assert!(owasp.contains(&"object-assign@4.1.1".to_string()));
        assert_eq!(
            owasp
                .iter()
                .filter(|d| d.as_str() == "loose-envify@1.4.0")
                .count(),
            1
        );
    }

    #[test]
    fn test_scripted_extra_dependency() {
        // one extra entry: index 3 of the pool (axios), then major 1+1, minor 2, patch 3
        let synthesizer = DependencySynthesizer::new(Scripted::new(vec![1, 3, 1, 2, 3]));
        let repo = record("acme/widget", &["left-pad@1.0.0"], 1);

        let deps = synthesizer.synthesize(&repo, ScannerTool::Syft);
        assert_eq!(deps, vec!["left-pad@1.0.0", "axios@2.2.3"]);
    }

    #[test]
    fn test_padding_without_parsed_dependencies() {
        // every draw is the low end: lodash@1.0.0 each time, collapsing to one entry
        let synthesizer = DependencySynthesizer::new(Scripted::new(vec![]));
        let repo = record("acme/widget", &[], 4);

        let deps = synthesizer.synthesize(&repo, ScannerTool::Owasp);
        assert_eq!(deps, vec!["lodash@1.0.0"]);
    }

    #[test]
    fn test_padding_respects_dependency_count() {
        let synthesizer = DependencySynthesizer::new(ThreadRngSource::new());
        let repo = record("acme/widget", &[], 12);

        for _ in 0..20 {
            let deps = synthesizer.synthesize(&repo, ScannerTool::Syft);
            assert!(!deps.is_empty());
            assert!(deps.len() <= 12);
            for dep in &deps {
                let (name, _) = dep.rsplit_once('@').unwrap();
                assert!(COMMON_PACKAGES.contains(&name));
            }
        }
    }

    #[test]
    fn test_overrides_kept_when_count_is_smaller() {
        let synthesizer = DependencySynthesizer::new(ThreadRngSource::new());
        let repo = record("axios/axios", &[], 1);

        let deps = synthesizer.synthesize(&repo, ScannerTool::Syft);
        assert_eq!(deps.len(), 3);
        assert!(deps.contains(&"follow-redirects@1.15.2".to_string()));
    }

    #[test]
    fn test_zero_count_without_overrides_is_empty() {
        let synthesizer = DependencySynthesizer::new(ThreadRngSource::new());
        let repo = record("acme/widget", &[], 0);
        assert!(synthesizer.synthesize(&repo, ScannerTool::Syft).is_empty());
    }

    #[test]
    fn test_dedup_preserving_order() {
        let items = vec!["b", "a", "b", "c", "a"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(dedup_preserving_order(items), vec!["b", "a", "c"]);
    }
}
