use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartDateFormat {
    DayMonth,   // 12 Jan
    HourMin,    // 10:30
    HourMinSec, // 10:30:15
}

// Coarsest format first; a window wider than the bound uses it.
const FORMAT_BOUNDS: [(f64, SmartDateFormat); 2] = [
    (36.0 * 3600.0, SmartDateFormat::DayMonth),
    (5.0 * 60.0, SmartDateFormat::HourMin),
];

/// Picks a label format for a window spanning `visible_range_sec` seconds.
pub fn determine_date_format(visible_range_sec: f64) -> SmartDateFormat {
    FORMAT_BOUNDS
        .iter()
        .find(|(bound, _)| visible_range_sec > *bound)
        .map_or(SmartDateFormat::HourMinSec, |(_, format)| *format)
}

/// Formats elapsed seconds as `m:ss`, or `h:mm:ss` past the hour.
pub fn format_elapsed(seconds: u64) -> String {
    let (h, m, s) = (seconds / 3600, (seconds / 60) % 60, seconds % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Formats the instant `elapsed` seconds after `started_at`.
pub fn format_wall_clock(started_at: DateTime<Utc>, elapsed: u64, format: SmartDateFormat) -> String {
    let seconds = i64::try_from(elapsed).unwrap_or(i64::MAX);
    let dt = match Duration::try_seconds(seconds).and_then(|d| started_at.checked_add_signed(d)) {
        Some(dt) => dt,
        None => return format_elapsed(elapsed),
    };

    match format {
        SmartDateFormat::DayMonth => dt.format("%d %b").to_string(),
        SmartDateFormat::HourMin => dt.format("%H:%M").to_string(),
        SmartDateFormat::HourMinSec => dt.format("%H:%M:%S").to_string(),
    }
}
