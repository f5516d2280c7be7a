use chrono::{DateTime, Local, TimeZone};

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";
pub const DEFAULT_PREFIX: &str = "scrot-record";

pub fn timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn now_timestamp() -> String {
    timestamp(&Local::now())
}

/// `<label>-<timestamp>`, or `scrot-record-<timestamp>` without a label.
pub fn folder_name(label: Option<&str>, timestamp: &str) -> String {
    format!("{}-{}", label.unwrap_or(DEFAULT_PREFIX), timestamp)
}
