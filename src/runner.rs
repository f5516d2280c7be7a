use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use log::debug;

use crate::command::CaptureCommand;

/// Runs one capture and waits for it to finish.
pub trait CaptureRunner {
    /// Resolves the capture tool before the first run, `None` when missing.
    fn locate(&self, program: &Path) -> Option<PathBuf> {
        Some(program.to_path_buf())
    }

    /// `dir` is the working directory for the tool; `None` inherits ours.
    fn run(&mut self, command: &CaptureCommand, dir: Option<&Path>) -> io::Result<ExitStatus>;
}

/// Spawns the capture tool as a child process on the local host.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl CaptureRunner for ProcessRunner {
    fn locate(&self, program: &Path) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn run(&mut self, command: &CaptureCommand, dir: Option<&Path>) -> io::Result<ExitStatus> {
        let mut child = Command::new(command.program());
        child.args(command.args());
        if let Some(dir) = dir {
            child.current_dir(dir);
        }
        debug!("exec: {command}");
        child.status()
    }
}
