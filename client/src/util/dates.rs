//! Calendar helpers for the booking date picker and the footer year.
//!
//! Dates are UTC calendar days formatted as `YYYY-MM-DD`, the value format
//! of `<input type="date">`.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::{Date, OffsetDateTime};

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn date_at(unix_ms: f64) -> Option<Date> {
    let secs = (unix_ms / 1000.0).floor();
    if !secs.is_finite() {
        return None;
    }
    OffsetDateTime::from_unix_timestamp(secs as i64)
        .ok()
        .map(OffsetDateTime::date)
}

fn format_iso(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

#[must_use]
pub fn iso_date(unix_ms: f64) -> Option<String> {
    date_at(unix_ms).map(format_iso)
}

#[must_use]
pub fn next_iso_date(unix_ms: f64) -> Option<String> {
    date_at(unix_ms).and_then(Date::next_day).map(format_iso)
}

#[must_use]
pub fn year(unix_ms: f64) -> Option<i32> {
    date_at(unix_ms).map(Date::year)
}

/// Today's date, the earliest bookable day.
pub fn today() -> String {
    iso_date(now_ms()).unwrap_or_default()
}

/// Tomorrow's date, the picker's default.
pub fn tomorrow() -> String {
    next_iso_date(now_ms()).unwrap_or_default()
}

pub fn current_year() -> Option<i32> {
    year(now_ms())
}
