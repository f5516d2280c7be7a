use std::path::PathBuf;

use clap::Parser;
use scrotrec::{DirectoryPolicy, RecordRequest};

#[derive(Debug, Parser)]
#[command(version, about = "Time-lapse screen recording with scrot")]
pub struct AppArgs {
    #[arg(short, long)]
    pub verbose: bool,
    /// Also write the log to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
    ///Image quality passed to scrot (1-100)
    #[arg(short, long, default_value_t = 75)]
    pub quality: u32,
    ///Time in seconds between screenshots
    #[arg(short, long, default_value_t = 1.0)]
    pub interval: f64,
    ///Thumbnail size in percent, 0 or 100 and up disables thumbnails
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub thumb: i32,
    ///Recording time in seconds (60 when omitted)
    #[arg(short, long)]
    pub duration: Option<u64>,
    ///Folder name, suffixed with the start time
    #[arg(short, long)]
    pub label: Option<String>,
    ///Parent directory of the recording folder
    #[arg(short, long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,
    ///Path of the capture tool
    #[arg(long, default_value = scrotrec::command::DEFAULT_TOOL)]
    pub tool: PathBuf,
    ///If the recording folder already exists, capture from the current directory
    #[arg(long)]
    pub stay_outside_existing: bool,
    ///Ask for every setting on the terminal
    #[arg(
        long,
        conflicts_with_all = ["quality", "interval", "thumb", "duration", "label", "workdir"]
    )]
    pub interactive: bool,
    ///Print the scrot usage text and exit
    #[arg(long)]
    pub scrot_help: bool,
}

impl AppArgs {
    pub fn policy(&self) -> DirectoryPolicy {
        if self.stay_outside_existing {
            DirectoryPolicy::EnterIfCreated
        } else {
            DirectoryPolicy::AlwaysEnter
        }
    }

    pub fn request(&self) -> RecordRequest {
        RecordRequest {
            quality: self.quality,
            interval: self.interval,
            percentage: self.thumb,
            duration: self.duration,
            label: self.label.clone(),
            workdir: self.workdir.clone(),
        }
    }
}
