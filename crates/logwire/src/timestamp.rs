use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

/// `YYYY-MM-DD-HH:MM:SS`, second resolution, no zone
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H:%M:%S";

/// Render a timestamp in the record layout.
///
/// Sub-second precision and the offset are dropped; the wall-clock fields of
/// `time` are printed as they are.
pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

pub(crate) fn now() -> String {
    format_timestamp(&Local::now())
}
