//! crates/what-sink/src/timestamp.rs
//! Timestamp prefix for debug lines.
//!
//! Lines are stamped `YYYY/MM/DD HH:MM:SS`, the layout of a classic
//! date-and-time log prefix.
//!
//! The local offset is looked up once per process by
//! [`capture_local_offset`] and reused for every line. On Unix the lookup
//! only succeeds while the process is single-threaded, so call it (or
//! `what::init`) at the top of `main`. When the first lookup happens too late
//! the process stamps every line in UTC. Offset changes after the capture,
//! such as a daylight saving switch, are not followed.

use std::sync::OnceLock;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

static LOCAL_OFFSET: OnceLock<Option<UtcOffset>> = OnceLock::new();

/// Layout of the timestamp written in front of every line.
pub const LINE_TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

/// Stamp used when the current time cannot be rendered.
pub const FALLBACK: &str = "0000/00/00 00:00:00";

/// Determines the local offset on first call and returns the cached result
/// afterwards. `None` means lines are stamped in UTC.
pub fn capture_local_offset() -> Option<UtcOffset> {
    *LOCAL_OFFSET.get_or_init(|| UtcOffset::current_local_offset().ok())
}

/// Returns the current time in the captured local offset, or in UTC when the
/// local offset is unavailable.
#[must_use]
pub fn now() -> OffsetDateTime {
    let utc = OffsetDateTime::now_utc();
    match capture_local_offset() {
        Some(offset) => utc.to_offset(offset),
        None => utc,
    }
}

/// Renders `at` using [`LINE_TIMESTAMP_FORMAT`].
pub fn format(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.format(LINE_TIMESTAMP_FORMAT)
}

/// Renders `at`, substituting [`FALLBACK`] if formatting fails.
#[must_use]
pub fn format_or_fallback(at: OffsetDateTime) -> String {
    format(at).unwrap_or_else(|_| FALLBACK.to_owned())
}
