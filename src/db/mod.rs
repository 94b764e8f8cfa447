pub mod bookings;
pub mod catalog;
pub mod connection;
pub mod error_logs;

pub use bookings::SqliteBookingStore;
pub use connection::Database;
pub use error_logs::DbErrorSink;
