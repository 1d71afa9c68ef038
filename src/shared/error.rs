use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Workflow completed and the report was produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, invalid input, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for repository registration, scanning and export.
///
/// A repository that is already registered is reported through
/// `AddOutcome::AlreadyExists`, not as an error.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Repository not found: {slug}\n\n💡 Hint: Check the owner and repository name")]
    RepositoryNotFound { slug: String },

    #[error("Access to repository forbidden: {slug} (it may be private)\n\n💡 Hint: Provide a token with access via --token or GITHUB_TOKEN")]
    RepositoryForbidden { slug: String },

    #[error("GitHub API returned HTTP {status} for {slug}")]
    HttpStatus { slug: String, status: u16 },

    #[error("Invalid repository URL: {input}\n\n💡 Hint: Use 'owner/repo' or 'https://github.com/owner/repo'")]
    InvalidUrl { input: String },

    #[error("Please enter a repository URL")]
    EmptyUrl,

    #[error("Selection limit reached: at most {limit} repositories can be selected\n\n💡 Hint: Deselect a repository first")]
    SelectionLimitReached { limit: usize },

    #[error("Repository is not registered: {id}")]
    UnknownRepository { id: String },

    #[error("No repositories selected\n\n💡 Hint: Select at least one repository before scanning or comparing")]
    NoRepositoriesSelected,

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
