// src/domain/dates.rs

use chrono::{Days, NaiveDate, NaiveDateTime};

/// Formats accepted in guest-entered dates, tried in order.
const DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M";
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Output format consumed by the date picker.
const OUTPUT_FORMAT: &str = "%Y.%m.%d";

/// Parses `DD.MM.YYYY HH:MM` or `DD.MM.YYYY` (read as midnight).
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT) {
        return Some(dt);
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Calendar day of [`parse_datetime`]. Anything unparseable is `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_datetime(raw).map(|dt| dt.date())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(OUTPUT_FORMAT).to_string()
}

/// Days of `start`, `start + 1d`, ... while still before `end`, plus the
/// day of `end` when `include_end` is set.
///
/// Comparison keeps the time of day: 01.07 10:00 to 01.07 12:00 holds
/// 01.07, and 01.07 10:00 to 05.07 12:00 reaches 05.07. An inverted
/// range steps nothing but still gets its end day under `include_end`.
pub fn dates_in_range(
    start: NaiveDateTime,
    end: NaiveDateTime,
    include_end: bool,
) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut moment = start;
    while moment < end {
        out.push(moment.date());
        moment = match moment.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    if include_end {
        out.push(end.date());
    }

    out
}
