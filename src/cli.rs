use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::ReportFormat;

/// Register GitHub repositories, simulate SBOM scans with Syft and
/// OWASP Dependency-Check, and compare what the two tools report
#[derive(Parser, Debug)]
#[command(name = "repo-sbom")]
#[command(version)]
#[command(
    about = "Simulate SBOM scans of GitHub repositories and compare Syft with OWASP Dependency-Check",
    long_about = None
)]
pub struct Args {
    /// Repositories to register: `owner/repo` or a GitHub URL
    #[arg(value_name = "REPOSITORY", required = true)]
    pub repositories: Vec<String>,

    /// GitHub API token (falls back to the config file, then GITHUB_TOKEN)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Path to a config file (defaults to ./repo-sbom.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the GitHub REST API
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Directory receiving both reports and every generated SBOM
    /// (if not specified, the report is written to stdout)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report format for stdout: json or text
    #[arg(short, long, default_value = "json")]
    pub format: ReportFormat,

    /// Repository to select for scanning, by id, input or owner/repo.
    /// Can be specified multiple times (at most 5); defaults to the first five added
    #[arg(long = "select", value_name = "ID_OR_SLUG")]
    pub select: Vec<String>,

    /// Fail instead of storing simulated data when a repository cannot be fetched
    #[arg(long)]
    pub strict: bool,

    /// Skip the pause between scanned repositories
    #[arg(long)]
    pub no_pause: bool,
}
