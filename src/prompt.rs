//! Typed line prompts with defaults, used by the interactive entry point.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::settings::{
    RecordRequest, DEFAULT_DURATION, DEFAULT_INTERVAL, DEFAULT_PERCENTAGE, DEFAULT_QUALITY,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not an integer")]
    NotInteger(String),
    #[error("'{0}' is not a number")]
    NotFloat(String),
    #[error("empty input")]
    Empty,
}

pub fn parse_int<T: FromStr>(input: &str) -> Result<T, InputError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| InputError::NotInteger(input.to_string()))
}

pub fn parse_float(input: &str) -> Result<f64, InputError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| InputError::NotFloat(input.to_string()))
}

pub fn parse_text(input: &str) -> Result<String, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(input.to_string())
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks until the answer parses. Blank lines and end of input give `default`.
    pub fn ask<T, F>(
        &mut self,
        question: &str,
        default: Option<T>,
        parse: F,
    ) -> io::Result<Option<T>>
    where
        T: Display,
        F: Fn(&str) -> Result<T, InputError>,
    {
        loop {
            match &default {
                Some(value) => write!(self.output, "{question} [{value}]: ")?,
                None => write!(self.output, "{question}: ")?,
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 || line.trim().is_empty() {
                return Ok(default);
            }
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "Invalid input: {err}")?,
            }
        }
    }

    /// Collects every recording parameter, `cwd` being the workdir default.
    pub fn collect_request(&mut self, cwd: &Path) -> io::Result<RecordRequest> {
        let quality = self
            .ask("Quality (1-100)", Some(DEFAULT_QUALITY), parse_int)?
            .unwrap_or(DEFAULT_QUALITY);
        let interval = self
            .ask("Interval (seconds)", Some(DEFAULT_INTERVAL), parse_float)?
            .unwrap_or(DEFAULT_INTERVAL);
        let percentage = self
            .ask("Thumbnail percentage (%)", Some(DEFAULT_PERCENTAGE), parse_int)?
            .unwrap_or(DEFAULT_PERCENTAGE);
        let duration = self.ask("Duration (seconds)", Some(DEFAULT_DURATION), parse_int)?;
        let label = self.ask("Label (folder name)", None, parse_text)?;
        let workdir = self
            .ask(
                "Workdir (parent directory)",
                Some(cwd.display().to_string()),
                parse_text,
            )?
            .map(PathBuf::from);

        Ok(RecordRequest {
            quality,
            interval,
            percentage,
            duration,
            label,
            workdir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn parsers_check_the_primitive_kind() {
        assert_eq!(parse_int::<u32>(" 42\n"), Ok(42));
        assert_eq!(
            parse_int::<u32>("4.2"),
            Err(InputError::NotInteger("4.2".into()))
        );
        assert_eq!(parse_float("0.5"), Ok(0.5));
        assert_eq!(parse_float("3"), Ok(3.0));
        assert_eq!(parse_float("fast"), Err(InputError::NotFloat("fast".into())));
        assert_eq!(parse_text("  holiday \n"), Ok("holiday".into()));
        assert_eq!(parse_text("   "), Err(InputError::Empty));
    }

    #[test]
    fn reprompts_until_valid() {
        let mut p = prompter("abc\n-\n80\n");
        let value = p.ask("Quality", Some(75u32), parse_int).unwrap();
        assert_eq!(value, Some(80));

        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(shown.matches("Quality [75]: ").count(), 3);
        assert_eq!(shown.matches("Invalid input").count(), 2);
    }

    #[test]
    fn blank_and_eof_take_default() {
        let mut p = prompter("\n");
        assert_eq!(p.ask("Quality", Some(75u32), parse_int).unwrap(), Some(75));
        assert_eq!(p.ask("Quality", Some(75u32), parse_int).unwrap(), Some(75));
        assert_eq!(p.ask("Label", None, parse_text).unwrap(), None);
    }

    #[test]
    fn collects_a_full_request() {
        let mut p = prompter("90\n0.5\n20\n30\nbeach\n/tmp/shots\n");
        let req = p.collect_request(Path::new("/home/me")).unwrap();
        assert_eq!(
            req,
            RecordRequest {
                quality: 90,
                interval: 0.5,
                percentage: 20,
                duration: Some(30),
                label: Some("beach".into()),
                workdir: Some(PathBuf::from("/tmp/shots")),
            }
        );
    }

    #[test]
    fn default_is_shown_once() {
        let mut p = prompter("\n\n\n\n\n\n");
        p.collect_request(Path::new("/home/me")).unwrap();
        let shown = String::from_utf8(p.output).unwrap();
        assert!(shown.contains("Quality (1-100) [75]: "));
        assert!(shown.contains("Label (folder name): "));
        assert!(shown.contains("Workdir (parent directory) [/home/me]: "));
        assert!(!shown.contains("] ["));
    }

    #[test]
    fn all_defaults() {
        let mut p = prompter("\n\n\n\n\n\n");
        let req = p.collect_request(Path::new("/home/me")).unwrap();
        assert_eq!(req.quality, 75);
        assert_eq!(req.interval, 1.0);
        assert_eq!(req.percentage, 0);
        assert_eq!(req.duration, Some(60));
        assert_eq!(req.label, None);
        assert_eq!(req.workdir, Some(PathBuf::from("/home/me")));
    }
}
