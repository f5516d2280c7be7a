use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_TOOL: &str = "/usr/bin/scrot";

/// Whether a thumbnail percentage asks for thumbnails at all.
pub fn thumbnails_enabled(percentage: i32) -> bool {
    percentage > 0 && percentage < 100
}

/// A single `scrot --quality N [--thumb M]` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureCommand {
    program: PathBuf,
    quality: u32,
    thumb: Option<i32>,
}

impl CaptureCommand {
    pub fn new(program: impl Into<PathBuf>, quality: u32, percentage: i32) -> Self {
        Self {
            program: program.into(),
            quality,
            thumb: thumbnails_enabled(percentage).then_some(percentage),
        }
    }

    /// Same arguments, different executable.
    pub fn with_program(&self, program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..self.clone()
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn thumb(&self) -> Option<i32> {
        self.thumb
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["--quality".to_string(), self.quality.to_string()];
        if let Some(thumb) = self.thumb {
            args.push("--thumb".to_string());
            args.push(thumb.to_string());
        }
        args
    }
}

impl fmt::Display for CaptureCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in self.args() {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_flag_only_inside_open_range() {
        for pct in [-20, -1, 0, 100, 101, 250] {
            let cmd = CaptureCommand::new(DEFAULT_TOOL, 75, pct);
            assert!(!cmd.args().contains(&"--thumb".to_string()), "pct {pct}");
        }
        for pct in [1, 20, 50, 99] {
            let cmd = CaptureCommand::new(DEFAULT_TOOL, 75, pct);
            assert_eq!(cmd.thumb(), Some(pct));
            assert!(cmd.args().contains(&"--thumb".to_string()), "pct {pct}");
        }
    }

    #[test]
    fn renders_like_a_shell_line() {
        let cmd = CaptureCommand::new("/usr/bin/scrot", 90, 25);
        assert_eq!(cmd.to_string(), "/usr/bin/scrot --quality 90 --thumb 25");

        let cmd = CaptureCommand::new("/usr/bin/scrot", 75, 0);
        assert_eq!(cmd.to_string(), "/usr/bin/scrot --quality 75");
    }

    #[test]
    fn quality_is_passed_through() {
        let cmd = CaptureCommand::new("scrot", 400, 0);
        assert_eq!(cmd.args(), vec!["--quality", "400"]);
    }
}
