use crate::db::connection::Database;
use crate::domain::booking::{BookingRecord, BookingStatus, NewBooking};
use crate::domain::booked_days::{BookedDaysQuery, BookingStore};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

/// Stores a guest's request. New requests always start out `Active`.
pub fn insert_booking(
    conn: &Connection,
    booking: &NewBooking,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into bookings (
            booking_identifier_id, fio, phone_number, adults_count, childs_count,
            desired_dates, is_has_whatsapp, date_create, is_dayly,
            is_late_checkout, is_early_checkin, status, user_comment
        )
        values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            booking.booking_identifier,
            booking.fio,
            booking.phone,
            booking.adults,
            booking.childrens,
            booking.desired_dates,
            booking.whatsapp,
            now,
            booking.is_dayly,
            booking.late_checkout,
            booking.early_checkin,
            BookingStatus::Active.code(),
            booking.comment,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert booking failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// `BookingStore` over the `bookings` table.
pub struct SqliteBookingStore<'a> {
    db: &'a Database,
}

impl<'a> SqliteBookingStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl BookingStore for SqliteBookingStore<'_> {
    fn for_each_approved(
        &self,
        query: &BookedDaysQuery,
        visit: &mut dyn FnMut(BookingRecord),
    ) -> Result<(), ServerError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    r#"
                    select desired_dates, date_start_fact, date_end_fact, is_late_checkout
                    from bookings
                    where booking_identifier_id = ?1
                      and date_create < ?2
                      and status = ?3
                      and (?4 = 0 or is_dayly = 1)
                    "#,
                )
                .map_err(|e| ServerError::DbError(e.to_string()))?;

            let rows = stmt
                .query_map(
                    params![
                        query.booking_identifier,
                        query.now,
                        BookingStatus::Approved.code(),
                        query.only_dayly,
                    ],
                    |row| {
                        Ok(BookingRecord {
                            desired_dates: row.get(0)?,
                            fact_start: row.get(1)?,
                            fact_end: row.get(2)?,
                            is_late_checkout: row.get(3)?,
                        })
                    },
                )
                .map_err(|e| ServerError::DbError(e.to_string()))?;

            for r in rows {
                visit(r.map_err(|e| ServerError::DbError(format!("read booking failed: {e}")))?);
            }
            Ok(())
        })
    }
}
