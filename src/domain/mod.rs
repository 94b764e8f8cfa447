pub mod booked_days;
pub mod booking;
pub mod catalog;
pub mod dates;
pub mod error_log;
pub mod occupancy;
pub mod pagination;

pub use booked_days::{format_booked_days, get_booked_days, BookedDaysQuery};
pub use error_log::{ErrorReport, ErrorSink};
