// src/domain/booked_days.rs

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;
use std::collections::BTreeSet;
use tracing::error;

use crate::domain::booking::BookingRecord;
use crate::domain::dates::format_date;
use crate::domain::error_log::{ErrorReport, ErrorSink};
use crate::domain::occupancy::OccupancyShape;
use crate::errors::ServerError;

pub const EMPTY_IDENTIFIER_MESSAGE: &str = "booking_identifier is empty";

#[derive(Debug, Clone)]
pub struct BookedDaysQuery {
    pub booking_identifier: i64,
    /// Restrict to full-day (`is_dayly`) bookings.
    pub only_dayly: bool,
    /// Bookings created at or after this moment are ignored.
    pub now: NaiveDateTime,
}

/// Read side of the bookings table, as far as availability is concerned.
pub trait BookingStore {
    /// Feeds every approved booking matching `query` to `visit`, in storage
    /// order. On failure, records already visited stay visited.
    fn for_each_approved(
        &self,
        query: &BookedDaysQuery,
        visit: &mut dyn FnMut(BookingRecord),
    ) -> Result<(), ServerError>;
}

/// The path segment naming a bookable resource. Zero means "not set".
pub fn parse_booking_identifier(raw: &str) -> Result<i64, ServerError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ServerError::BadRequest(EMPTY_IDENTIFIER_MESSAGE.into())),
    }
}

/// Days taken by confirmed bookings of one resource.
///
/// Never fails: a storage error is reported to `sink` and the days
/// gathered up to that point are returned.
pub fn get_booked_days(
    store: &dyn BookingStore,
    sink: &dyn ErrorSink,
    query: &BookedDaysQuery,
) -> BTreeSet<NaiveDate> {
    let mut booked = BTreeSet::new();

    let result = store.for_each_approved(query, &mut |record: BookingRecord| {
        booked.extend(OccupancyShape::resolve(&record).occupied_dates());
    });

    if let Err(e) = result {
        let message = format!("failed to get booked days: {e}");
        error!(booking_identifier = query.booking_identifier, "{message}");
        sink.record(
            ErrorReport::new(message)
                .with_backtrace()
                .with_context(json!({
                    "booking_identifier": query.booking_identifier,
                    "only_dayly": query.only_dayly,
                })),
        );
    }

    booked
}

pub fn format_booked_days(days: &BTreeSet<NaiveDate>) -> Vec<String> {
    days.iter().copied().map(format_date).collect()
}
