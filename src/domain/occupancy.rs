// src/domain/occupancy.rs

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::booking::BookingRecord;
use crate::domain::dates::{dates_in_range, parse_date, parse_datetime};

/// How a booking's date columns are to be read.
///
/// Exactly one applies per record. Precedence, highest first:
/// confirmed start and end, confirmed start alone, then whatever the
/// guest typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccupancyShape<'a> {
    FactRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
        late_checkout: bool,
    },
    FactDay(NaiveDateTime),
    DesiredRange {
        start: &'a str,
        end: &'a str,
        late_checkout: bool,
    },
    /// Dash-separated, but not as a single `start-end` pair.
    MalformedRange(&'a str),
    DesiredList(&'a str),
}

impl<'a> OccupancyShape<'a> {
    pub fn resolve(record: &'a BookingRecord) -> Self {
        let late_checkout = record.is_late_checkout;

        match (record.fact_start, record.fact_end) {
            (Some(start), Some(end)) => OccupancyShape::FactRange {
                start,
                end,
                late_checkout,
            },
            (Some(start), None) => OccupancyShape::FactDay(start),
            _ => {
                let desired = record.desired_dates.as_str();
                // A comma means a list of days, even if some entry has a dash in it.
                if !desired.contains('-') || desired.contains(',') {
                    return OccupancyShape::DesiredList(desired);
                }

                let mut parts = desired.split('-');
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(start), Some(end), None) => OccupancyShape::DesiredRange {
                        start,
                        end,
                        late_checkout,
                    },
                    _ => OccupancyShape::MalformedRange(desired),
                }
            }
        }
    }

    /// Calendar days this shape occupies. Unparseable pieces contribute nothing.
    pub fn occupied_dates(&self) -> Vec<NaiveDate> {
        match self {
            OccupancyShape::FactRange {
                start,
                end,
                late_checkout,
            } => dates_in_range(*start, *end, *late_checkout),
            OccupancyShape::FactDay(start) => vec![start.date()],
            OccupancyShape::DesiredRange {
                start,
                end,
                late_checkout,
            } => match (parse_datetime(start), parse_datetime(end)) {
                (Some(start), Some(end)) => dates_in_range(start, end, *late_checkout),
                _ => Vec::new(),
            },
            OccupancyShape::MalformedRange(_) => Vec::new(),
            OccupancyShape::DesiredList(list) => list.split(',').filter_map(parse_date).collect(),
        }
    }
}
