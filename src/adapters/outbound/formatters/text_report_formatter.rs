use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::repository_analysis::domain::{format_count, RecordSource};
use crate::shared::Result;
use std::fmt::Write;

const RULE: &str = "==================================================";

/// TextReportFormatter adapter: plain-text rendering of the report read model
pub struct TextReportFormatter;

impl TextReportFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_list(out: &mut String, title: &str, items: &[String]) -> std::fmt::Result {
        writeln!(out, "{} ({}):", title, items.len())?;
        if items.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for item in items {
            writeln!(out, "  - {}", item)?;
        }
        Ok(())
    }

    fn render(model: &ReportReadModel) -> std::result::Result<String, std::fmt::Error> {
        let mut out = String::new();
        let meta = &model.metadata;

        writeln!(out, "SBOM ANALYSIS REPORT")?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Generated: {}", meta.generated_at)?;
        writeln!(out, "Generator: {} {}", meta.generator, meta.version)?;
        writeln!(
            out,
            "Repositories: {} total, {} selected, {} scanned, {} simulated",
            meta.total_repositories,
            meta.selected_repositories,
            meta.scanned_repositories,
            meta.simulated_repositories
        )?;

        writeln!(out)?;
        writeln!(out, "REPOSITORIES")?;
        writeln!(out, "{}", RULE)?;
        if model.repositories.is_empty() {
            writeln!(out, "(none)")?;
        }
        for repo in &model.repositories {
            let mut flags = Vec::new();
            if repo.selected {
                flags.push("selected");
            }
            if repo.scanned {
                flags.push("scanned");
            }
            if repo.source == RecordSource::Simulated {
                flags.push("simulated");
            }
            writeln!(out, "{} [{}]", repo.full_name, flags.join(", "))?;
            writeln!(out, "  ID: {}", repo.id)?;
            writeln!(
                out,
                "  Language: {} | Stars: {} | Forks: {} | License: {}",
                repo.language,
                format_count(repo.stars),
                format_count(repo.forks),
                repo.license
            )?;
            writeln!(out, "  Dependencies: {}", repo.dependency_count)?;
            if !repo.manifest_files.is_empty() {
                writeln!(out, "  Manifests: {}", repo.manifest_files.join(", "))?;
            }
        }

        writeln!(out)?;
        writeln!(out, "ANALYSIS")?;
        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "Total dependencies: {} (average {:.1} per repository)",
            model.analysis.total_dependencies, model.analysis.average_dependencies
        )?;
        match &model.analysis.comparison {
            Some(comparison) => {
                writeln!(
                    out,
                    "Syft: {} | OWASP Dependency-Check: {} | Common: {}",
                    comparison.syft_total,
                    comparison.owasp_total,
                    comparison.common_count()
                )?;
                Self::write_list(&mut out, "Only found by Syft", &comparison.missing_from_owasp)?;
                Self::write_list(
                    &mut out,
                    "Only found by OWASP Dependency-Check",
                    &comparison.missing_from_syft,
                )?;
            }
            None => writeln!(out, "No comparison has been run.")?,
        }

        writeln!(out)?;
        writeln!(out, "ARTIFACTS")?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Syft: {} repositor(ies)", model.artifacts.syft)?;
        writeln!(
            out,
            "OWASP Dependency-Check: {} repositor(ies)",
            model.artifacts.owasp
        )?;

        writeln!(out)?;
        writeln!(out, "CHALLENGE LOG")?;
        writeln!(out, "{}", RULE)?;
        for entry in &model.challenge_log {
            let status = if entry.solved { "solved" } else { "open" };
            writeln!(
                out,
                "[{}] {} ({})",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.title,
                status
            )?;
            writeln!(out, "  {}", entry.description)?;
            if let Some(solution) = &entry.solution {
                writeln!(out, "  Solution: {}", solution)?;
            }
        }

        Ok(out)
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        Self::render(model).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog::RepositoryCatalog;
    use crate::repository_analysis::domain::{ComparisonReport, RepositoryRecord};
    use chrono::Utc;

    fn catalog() -> RepositoryCatalog {
        let mut catalog = RepositoryCatalog::new();
        catalog.insert(RepositoryRecord {
            id: "repo-1".to_string(),
            full_name: "acme/widget".to_string(),
            name: "widget".to_string(),
            owner: "acme".to_string(),
            language: "TypeScript".to_string(),
            stars: 12_345,
            forks: 999,
            dependency_count: 4,
            description: String::new(),
            license: "MIT".to_string(),
            size_kb: 1,
            manifest_files: vec!["package.json".to_string()],
            dependencies: vec![],
            scanned: false,
            created_at: Utc::now(),
            snapshot: None,
            source: RecordSource::Simulated,
        });
        catalog
    }

    #[test]
    fn test_format_lists_repositories() {
        let model = ReportReadModel::from_catalog(&catalog(), "now".to_string());
        let output = TextReportFormatter::new().format(&model).unwrap();

        assert!(output.contains("SBOM ANALYSIS REPORT"));
        assert!(output.contains("acme/widget [simulated]"));
        assert!(output.contains("Stars: 12.3k | Forks: 999"));
        assert!(output.contains("Manifests: package.json"));
        assert!(output.contains("No comparison has been run."));
    }

    #[test]
    fn test_format_comparison() {
        let mut catalog = catalog();
        catalog.set_last_comparison(ComparisonReport {
            repository_count: 1,
            syft_total: 3,
            owasp_total: 3,
            common: vec!["y".into(), "z".into()],
            missing_from_owasp: vec!["x".into()],
            missing_from_syft: vec!["w".into()],
        });
        catalog.log_challenge("Comparison completed", "2 common", true, None);

        let model = ReportReadModel::from_catalog(&catalog, "now".to_string());
        let output = TextReportFormatter::new().format(&model).unwrap();

        assert!(output.contains("Syft: 3 | OWASP Dependency-Check: 3 | Common: 2"));
        assert!(output.contains("Only found by Syft (1):\n  - x"));
        assert!(output.contains("Only found by OWASP Dependency-Check (1):\n  - w"));
        assert!(output.contains("Comparison completed (solved)"));
    }
}
