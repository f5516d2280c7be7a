use std::path::PathBuf;

pub const DEFAULT_QUALITY: u32 = 75;
pub const DEFAULT_INTERVAL: f64 = 1.0;
pub const DEFAULT_PERCENTAGE: i32 = 0;
pub const DEFAULT_DURATION: u64 = 60;

/// The settings of the last (or current) recording session.
#[derive(Debug, Clone, PartialEq)]
pub struct RecorderConfig {
    pub quality: u32,
    /// Seconds between two captures.
    pub interval: f64,
    pub label: Option<String>,
    /// Thumbnail size in percent of the capture, outside (0, 100) means none.
    pub percentage: i32,
    /// Total recording time in seconds.
    pub duration: Option<u64>,
    pub workdir: PathBuf,
}

/// Parameters for a single call to [`crate::Recorder::record`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRequest {
    pub quality: u32,
    pub interval: f64,
    pub percentage: i32,
    pub duration: Option<u64>,
    pub label: Option<String>,
    /// Parent of the dated output folder, current directory when `None`.
    pub workdir: Option<PathBuf>,
}

impl Default for RecordRequest {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            interval: DEFAULT_INTERVAL,
            percentage: DEFAULT_PERCENTAGE,
            duration: None,
            label: None,
            workdir: None,
        }
    }
}

/// Number of captures in `duration` seconds, one every `interval` seconds.
///
/// The quotient is rounded to nine decimals before truncating, so decimal
/// intervals such as `1.1` divide evenly where they should.
pub fn iteration_count(duration: u64, interval: f64) -> u64 {
    let quotient = duration as f64 / interval;
    ((quotient * 1e9).round() / 1e9).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults() {
        let req = RecordRequest::default();
        assert_eq!(req.quality, 75);
        assert_eq!(req.interval, 1.0);
        assert_eq!(req.percentage, 0);
        assert_eq!(req.duration, None);
        assert_eq!(req.label, None);
        assert_eq!(req.workdir, None);
    }

    #[test]
    fn iterations_truncate_toward_zero() {
        assert_eq!(iteration_count(60, 1.0), 60);
        assert_eq!(iteration_count(10, 3.0), 3);
        assert_eq!(iteration_count(2, 5.0), 0);
        assert_eq!(iteration_count(5, 0.5), 10);
        assert_eq!(iteration_count(0, 1.0), 0);
        assert_eq!(iteration_count(60, 0.1), 600);
    }

    #[test]
    fn decimal_intervals_divide_evenly() {
        assert_eq!(iteration_count(33, 1.1), 30);
        assert_eq!(iteration_count(55, 1.1), 50);
        assert_eq!(iteration_count(66, 2.2), 30);
        assert_eq!(iteration_count(110, 1.1), 100);
        assert_eq!(iteration_count(34, 1.1), 30);
    }

    #[test]
    fn huge_intervals_plan_nothing() {
        assert_eq!(iteration_count(60, f64::INFINITY), 0);
        assert_eq!(iteration_count(60, 1e300), 0);
    }
}
