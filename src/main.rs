use chrono::Utc;
use clap::Parser;
use repo_sbom::adapters::outbound::console::StderrProgressReporter;
use repo_sbom::adapters::outbound::filesystem::{OutputDirectory, StdoutPresenter};
use repo_sbom::adapters::outbound::network::GitHubClient;
use repo_sbom::adapters::outbound::random::ThreadRngSource;
use repo_sbom::application::catalog::RepositoryCatalog;
use repo_sbom::application::dto::ReportFormat;
use repo_sbom::application::services::RateLimitMonitor;
use repo_sbom::application::use_cases::{
    AddRepositoryUseCase, CompareToolsUseCase, ExportReportUseCase, ScanRepositoriesUseCase,
};
use repo_sbom::cli::Args;
use repo_sbom::config::{self, ConfigFile, Settings, TOKEN_ENV_VAR};
use repo_sbom::ports::outbound::{OutputPresenter, ProgressReporter};
use repo_sbom::repository_analysis::domain::ScannerTool;
use repo_sbom::repository_analysis::services::DependencySynthesizer;
use repo_sbom::shared::error::{DashboardError, ExitCode};
use repo_sbom::shared::Result;
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config_file = load_config(&args)?;
    let settings = Settings::resolve(
        &args,
        config_file.as_ref(),
        std::env::var(TOKEN_ENV_VAR).ok(),
    );

    // Create adapters (Dependency Injection)
    let progress_reporter = StderrProgressReporter::new();
    let random = ThreadRngSource::new();
    let client = GitHubClient::new(settings.token.as_deref())?
        .with_base_url(&settings.api_base_url)
        .with_manifest_candidates(settings.manifest_candidates.clone());

    let monitor = RateLimitMonitor::new(
        client.rate_limit_tracker(),
        settings.rate_limit_warning_threshold,
        settings.rate_limit_check_interval,
    );
    let monitor_handle = monitor.clone().spawn();

    let mut catalog = RepositoryCatalog::new();

    // Register repositories
    let add_use_case = AddRepositoryUseCase::new(
        client,
        random,
        &progress_reporter,
        settings.allow_mock_fallback,
    );
    for repository in &args.repositories {
        add_use_case.execute(&mut catalog, repository).await?;
    }

    select_repositories(&mut catalog, &args.select, &progress_reporter)?;

    // Scan and compare
    let synthesizer = DependencySynthesizer::new(random);
    ScanRepositoriesUseCase::new(&synthesizer, random, &progress_reporter, settings.pacing)
        .execute(&mut catalog, &ScannerTool::ALL)
        .await?;
    CompareToolsUseCase::new(&synthesizer, &progress_reporter).execute(&mut catalog)?;

    monitor_handle.abort();
    if let Some(warning) = monitor.poll() {
        progress_reporter.report_error(&warning);
    }

    // Export
    let export_use_case = ExportReportUseCase::new(&progress_reporter);
    let generated_at = Utc::now();
    match &args.output_dir {
        Some(dir) => {
            let output = OutputDirectory::create(dir.clone())?;
            for format in ReportFormat::ALL {
                let report = export_use_case.execute(&mut catalog, format, generated_at)?;
                output.writer_for(&report.file_name).present(&report.content)?;
            }
            let written = write_artifacts(&catalog, &output)?;
            progress_reporter.report_completion(&format!(
                "✅ Output complete: 2 report(s) and {} SBOM document(s) in {}",
                written,
                output.root().display()
            ));
        }
        None => {
            let report = export_use_case.execute(&mut catalog, args.format, generated_at)?;
            StdoutPresenter::new().present(&report.content)?;
        }
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}

/// Applies `--select`, or selects the first five registered repositories
fn select_repositories(
    catalog: &mut RepositoryCatalog,
    requested: &[String],
    progress_reporter: &impl ProgressReporter,
) -> Result<()> {
    let ids: Vec<String> = if requested.is_empty() {
        catalog
            .repositories()
            .iter()
            .take(repo_sbom::application::catalog::MAX_SELECTION)
            .map(|r| r.id.clone())
            .collect()
    } else {
        requested
            .iter()
            .map(|key| {
                catalog
                    .find(key)
                    .map(|r| r.id.clone())
                    .ok_or_else(|| DashboardError::UnknownRepository { id: key.clone() })
            })
            .collect::<std::result::Result<_, _>>()?
    };

    for id in ids {
        if !catalog.is_selected(&id) {
            catalog.toggle_selection(&id)?;
        }
    }

    let names: Vec<String> = catalog
        .selected_repositories()
        .iter()
        .map(|r| r.full_name.clone())
        .collect();
    progress_reporter.report(&format!("📌 Selected: {}", names.join(", ")));
    Ok(())
}

/// Writes every stored SBOM document; returns how many were written
fn write_artifacts(catalog: &RepositoryCatalog, output: &OutputDirectory) -> Result<usize> {
    let mut written = 0;
    for tool in ScannerTool::ALL {
        for (id, format, document) in catalog.artifacts_for(tool) {
            let Some(record) = catalog.get(id) else {
                continue;
            };
            output
                .writer_for(&format.artifact_file_name(record, tool))
                .present(document)?;
            written += 1;
        }
    }
    Ok(written)
}
