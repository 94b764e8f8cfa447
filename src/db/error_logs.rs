use crate::db::connection::Database;
use crate::domain::error_log::{ErrorReport, ErrorSink};
use crate::errors::ServerError;
use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};
use serde_json::Value;
use tracing::warn;

const MAX_MESSAGE_CHARS: usize = 500;

pub fn insert_error_log(
    conn: &Connection,
    report: &ErrorReport,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    let message: String = report.message.chars().take(MAX_MESSAGE_CHARS).collect();
    let additional_info = report.context.as_ref().map(context_text);

    conn.execute(
        "insert into error_logs (error_message, stack_trace, date, additional_info) values (?, ?, ?, ?)",
        params![message, report.stack_trace, now, additional_info],
    )
    .map_err(|e| ServerError::DbError(format!("insert error log failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

// Plain strings are stored as-is rather than as a quoted JSON literal.
fn context_text(context: &Value) -> String {
    match context {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Writes reports to the `error_logs` table; a failed write only reaches the log.
pub struct DbErrorSink<'a> {
    db: &'a Database,
}

impl<'a> DbErrorSink<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl ErrorSink for DbErrorSink<'_> {
    fn record(&self, report: ErrorReport) {
        let now = Utc::now().naive_utc();
        if let Err(e) = self.db.with_conn(|conn| insert_error_log(conn, &report, now)) {
            warn!(message = %report.message, "failed to save error log: {e}");
        }
    }
}
