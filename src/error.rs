use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("interval must be a positive number of seconds, got {0}")]
    InvalidInterval(f64),

    #[error("capture tool not found: {0}")]
    ToolNotFound(PathBuf),

    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch capture tool: {0}")]
    Spawn(#[source] io::Error),

    #[error("capture {iteration} failed: {status}")]
    CaptureFailed { iteration: u64, status: ExitStatus },

    #[error("cannot read current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("prompt I/O error: {0}")]
    Prompt(#[source] io::Error),
}
