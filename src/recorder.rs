use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::command::{thumbnails_enabled, CaptureCommand, DEFAULT_TOOL};
use crate::error::RecordError;
use crate::naming::{folder_name, now_timestamp};
use crate::prompt::Prompter;
use crate::runner::{CaptureRunner, ProcessRunner};
use crate::settings::{iteration_count, RecordRequest, RecorderConfig, DEFAULT_DURATION};
use crate::stop::StopHandle;

/// Where captures run relative to the dated output folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectoryPolicy {
    /// Create the folder when missing and always capture inside it.
    #[default]
    AlwaysEnter,
    /// Capture inside the folder only if this call created it, otherwise
    /// stay in the process working directory.
    EnterIfCreated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordSummary {
    pub output_dir: PathBuf,
    /// Whether the output folder was created by this call.
    pub created: bool,
    pub iterations_planned: u64,
    pub captures: u64,
    pub stopped: bool,
}

pub struct Recorder<R = ProcessRunner> {
    runner: R,
    tool: PathBuf,
    policy: DirectoryPolicy,
    sleep: fn(Duration),
    settings: Option<RecorderConfig>,
    stop: StopHandle,
}

impl Recorder<ProcessRunner> {
    pub fn new() -> Self {
        Self::with_runner(ProcessRunner)
    }
}

impl Default for Recorder<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CaptureRunner> Recorder<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            tool: PathBuf::from(DEFAULT_TOOL),
            policy: DirectoryPolicy::default(),
            sleep: thread::sleep,
            settings: None,
            stop: StopHandle::new(),
        }
    }

    pub fn tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn policy(mut self, policy: DirectoryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the pause between captures (`thread::sleep` by default).
    pub fn sleep_with(mut self, sleep: fn(Duration)) -> Self {
        self.sleep = sleep;
        self
    }

    /// Shares an existing stop flag instead of the recorder's own.
    pub fn with_stop(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn store_settings(
        &mut self,
        quality: u32,
        interval: f64,
        label: Option<String>,
        percentage: i32,
        duration: Option<u64>,
        workdir: PathBuf,
    ) {
        self.settings = Some(RecorderConfig {
            quality,
            interval,
            label,
            percentage,
            duration,
            workdir,
        });
    }

    /// Settings of the last session, `None` before the first one.
    pub fn settings(&self) -> Option<&RecorderConfig> {
        self.settings.as_ref()
    }

    /// Asks a running [`Recorder::record`] to end at its next iteration.
    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_stop_requested(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Captures every `interval` seconds for `duration` seconds, blocking
    /// the calling thread until the loop runs out or is stopped.
    pub fn record(&mut self, request: RecordRequest) -> Result<RecordSummary, RecordError> {
        let RecordRequest {
            quality,
            interval,
            percentage,
            duration,
            label,
            workdir,
        } = request;

        if interval.is_nan() || interval <= 0.0 {
            return Err(RecordError::InvalidInterval(interval));
        }

        let date = now_timestamp();
        if !thumbnails_enabled(percentage) {
            info!("No thumbnails will be generated");
        }
        let command = CaptureCommand::new(&self.tool, quality, percentage);

        let folder = folder_name(label.as_deref(), &date);
        let workdir = match workdir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(RecordError::CurrentDir)?,
        };
        let output_dir = workdir.join(&folder);

        let created = !output_dir.exists();
        if created {
            info!("Path doesn't exist. Creating it...: {}", output_dir.display());
            fs::create_dir(&output_dir).map_err(|source| RecordError::CreateDir {
                path: output_dir.clone(),
                source,
            })?;
        }
        let run_dir = match self.policy {
            DirectoryPolicy::AlwaysEnter => Some(output_dir.as_path()),
            DirectoryPolicy::EnterIfCreated => created.then_some(output_dir.as_path()),
        };

        let duration = duration.unwrap_or_else(|| {
            info!("No duration specified, defaulting to {DEFAULT_DURATION} seconds");
            DEFAULT_DURATION
        });

        self.store_settings(
            quality,
            interval,
            Some(folder),
            percentage,
            Some(duration),
            workdir,
        );

        let planned = iteration_count(duration, interval);
        debug!("{planned} captures of `{command}` planned");
        let start = Instant::now();
        let (captures, stopped) = self.capture_loop(&command, run_dir, planned, interval)?;
        debug!("Recording finished after {:?}", start.elapsed());

        Ok(RecordSummary {
            output_dir,
            created,
            iterations_planned: planned,
            captures,
            stopped,
        })
    }

    fn capture_loop(
        &mut self,
        command: &CaptureCommand,
        dir: Option<&Path>,
        planned: u64,
        interval: f64,
    ) -> Result<(u64, bool), RecordError> {
        // planned > 0 implies interval <= duration, so it fits a Duration
        let pause = Duration::try_from_secs_f64(interval).unwrap_or(Duration::ZERO);
        let mut command = command.clone();
        let mut captures = 0;
        for k in 0..planned {
            if self.stop.is_stopped() {
                info!("Stopped");
                return Ok((captures, true));
            }
            if k == 0 {
                let program = self.runner.locate(command.program()).ok_or_else(|| {
                    RecordError::ToolNotFound(command.program().to_path_buf())
                })?;
                command = command.with_program(program);
            }
            info!("Screenshot {k}");
            let status = self.runner.run(&command, dir).map_err(RecordError::Spawn)?;
            if !status.success() {
                return Err(RecordError::CaptureFailed {
                    iteration: k,
                    status,
                });
            }
            captures += 1;
            (self.sleep)(pause);
        }
        Ok((captures, false))
    }

    /// Prompts for every parameter on the terminal, then records.
    pub fn record_interactive(&mut self) -> Result<RecordSummary, RecordError> {
        let stdin = io::stdin();
        self.record_interactive_with(stdin.lock(), io::stdout())
    }

    pub fn record_interactive_with<I: BufRead, O: Write>(
        &mut self,
        input: I,
        output: O,
    ) -> Result<RecordSummary, RecordError> {
        let cwd = std::env::current_dir().map_err(RecordError::CurrentDir)?;
        let request = Prompter::new(input, output)
            .collect_request(&cwd)
            .map_err(RecordError::Prompt)?;
        self.record(request)
    }
}
