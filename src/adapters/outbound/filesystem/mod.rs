/// Filesystem adapters for writing reports and artifacts
mod file_writer;

pub use file_writer::{FileSystemWriter, OutputDirectory, StdoutPresenter};
