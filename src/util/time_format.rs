//! Timestamp parsing and display strings for template cards.
//!
//! The server emits naive `YYYY-MM-DD HH:MM:SS` strings (UTC) for capture
//! times, with ISO-8601 variants showing up from newer endpoints. Everything
//! is normalized to `OffsetDateTime` at the fetch boundary.
//!
//! TRADE-OFFS
//! ==========
//! Relative buckets use fixed 30-day months and 365-day years. The label is a
//! glanceable hint, not a calendar computation.

#[cfg(test)]
#[path = "time_format_test.rs"]
mod time_format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Label returned when the timestamp is ahead of the local clock.
pub const FUTURE_LABEL: &str = "in the future";
/// Label returned when less than one second has elapsed.
pub const JUST_NOW_LABEL: &str = "just now";

/// Screenshots newer than this many seconds are highlighted as recent.
pub const RECENT_WINDOW_SECS: i64 = 60;

const UNITS: [(&str, i64); 6] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
    ("second", 1),
];

/// Parse a server timestamp.
///
/// Accepts RFC 3339 with an explicit offset, or a naive
/// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS[.frac]` string which is
/// interpreted as UTC. Blank input yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(ts) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(ts);
    }

    let spaced = format_description!("[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]");
    let iso = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    PrimitiveDateTime::parse(trimmed, spaced)
        .or_else(|_| PrimitiveDateTime::parse(trimmed, iso))
        .map(PrimitiveDateTime::assume_utc)
        .ok()
}

/// Humanized "N units ago" label for `ts` as seen at `now`.
pub fn relative_time(ts: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = (now - ts).whole_seconds();
    if elapsed < 0 {
        return FUTURE_LABEL.to_owned();
    }
    for (label, seconds) in UNITS {
        let count = elapsed / seconds;
        if count >= 1 {
            let plural = if count > 1 { "s" } else { "" };
            return format!("{count} {label}{plural} ago");
        }
    }
    JUST_NOW_LABEL.to_owned()
}

/// Tooltip text showing `ts` in UTC and in the viewer's zone.
pub fn absolute_time(ts: OffsetDateTime, local_offset: UtcOffset) -> String {
    let utc_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let local_format = format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory]:[offset_minute]"
    );
    let utc = ts.to_offset(UtcOffset::UTC).format(utc_format).unwrap_or_default();
    let local = ts.to_offset(local_offset).format(local_format).unwrap_or_default();
    format!("{utc} UTC ({local})")
}

/// Whether the capture happened within [`RECENT_WINDOW_SECS`] of `now`.
pub fn is_recent(ts: OffsetDateTime, now: OffsetDateTime) -> bool {
    let elapsed = (now - ts).whole_seconds();
    (0..RECENT_WINDOW_SECS).contains(&elapsed)
}

/// Current wall-clock time in UTC.
pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// The browser's local UTC offset; UTC outside the browser.
pub fn local_offset() -> UtcOffset {
    #[cfg(feature = "csr")]
    {
        // getTimezoneOffset is minutes *behind* UTC, so the sign flips.
        let minutes = js_sys::Date::new_0().get_timezone_offset();
        #[allow(clippy::cast_possible_truncation)]
        let seconds = (-minutes * 60.0).round() as i32;
        UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
    }
    #[cfg(not(feature = "csr"))]
    {
        UtcOffset::UTC
    }
}
