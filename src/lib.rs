//! Time-lapse screen recording on top of an external capture tool (scrot).
//!
//! The [`Recorder`] builds a `scrot` command line, makes a dated output
//! folder and invokes the tool at a fixed cadence until the duration runs
//! out or someone pulls the [`StopHandle`].

pub mod command;
pub mod error;
pub mod help;
pub mod naming;
pub mod prompt;
pub mod recorder;
pub mod runner;
pub mod settings;
pub mod stop;

pub use command::CaptureCommand;
pub use error::RecordError;
pub use help::{help, help_text};
pub use recorder::{DirectoryPolicy, RecordSummary, Recorder};
pub use runner::{CaptureRunner, ProcessRunner};
pub use settings::{RecordRequest, RecorderConfig};
pub use stop::StopHandle;
