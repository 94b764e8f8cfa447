use crate::db::connection::{init_db, Database};
use crate::errors::ServerError;
use astra::Response;
use rusqlite::params;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// Fresh database file per test, using the production schema
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "landing_test_{}_{}_{}.sqlite",
        std::process::id(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        NEXT_DB.fetch_add(1, Ordering::Relaxed)
    ));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

pub fn seed(db: &Database, sql: &str) {
    db.with_conn(|conn| {
        conn.execute_batch(sql)
            .map_err(|e| ServerError::DbError(e.to_string()))
    })
    .unwrap_or_else(|e| panic!("seeding failed: {e}"));
}

pub fn insert_booking_identifier(db: &Database, name: &str) -> i64 {
    db.with_conn(|conn| {
        conn.execute("insert into booking_identifiers (name) values (?)", params![name])
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(conn.last_insert_rowid())
    })
    .unwrap()
}

/// A stored booking as a manager would leave it after processing.
pub struct StoredBooking<'a> {
    pub identifier: i64,
    pub desired_dates: &'a str,
    pub status: &'a str,
    pub fact_start: Option<&'a str>,
    pub fact_end: Option<&'a str>,
    pub is_dayly: bool,
    pub is_late_checkout: bool,
    pub created: &'a str,
}

impl Default for StoredBooking<'_> {
    fn default() -> Self {
        Self {
            identifier: 1,
            desired_dates: "",
            status: "b",
            fact_start: None,
            fact_end: None,
            is_dayly: false,
            is_late_checkout: false,
            created: "2024-01-01 00:00:00",
        }
    }
}

/// Raw column text, so tests can store values the app never would.
pub fn insert_stored_booking(db: &Database, b: StoredBooking<'_>) {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            insert into bookings (
                booking_identifier_id, fio, phone_number, desired_dates, date_create,
                is_dayly, is_late_checkout, status, date_start_fact, date_end_fact
            )
            values (?, 'Guest', '+70000000000', ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                b.identifier,
                b.desired_dates,
                b.created,
                b.is_dayly,
                b.is_late_checkout,
                b.status,
                b.fact_start,
                b.fact_end
            ],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
    .unwrap()
}

pub fn count_bookings(db: &Database) -> i64 {
    db.with_conn(|conn| {
        conn.query_row("select count(*) from bookings", [], |r| r.get(0))
            .map_err(|e| ServerError::DbError(e.to_string()))
    })
    .unwrap()
}

#[derive(Debug)]
pub struct ErrorLogRow {
    pub error_message: String,
    pub stack_trace: Option<String>,
    pub additional_info: Option<String>,
    pub is_solved: bool,
}

pub fn list_error_logs(conn: &rusqlite::Connection) -> Result<Vec<ErrorLogRow>, ServerError> {
    let mut stmt = conn
        .prepare("select error_message, stack_trace, additional_info, is_solved from error_logs order by id")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(ErrorLogRow {
                error_message: row.get(0)?,
                stack_trace: row.get(1)?,
                additional_info: row.get(2)?,
                is_solved: row.get(3)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

pub fn error_logs(db: &Database) -> Vec<ErrorLogRow> {
    db.with_conn(|conn| list_error_logs(conn)).unwrap()
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
