// src/domain/booking.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Stored as a single character so `ORDER BY status` puts active requests first.
/// Staff move requests on to approved or canceled (`'c'`) by hand; this
/// service only writes new requests and reads approved ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Active,
    Approved,
}

impl BookingStatus {
    pub fn code(self) -> &'static str {
        match self {
            BookingStatus::Active => "a",
            BookingStatus::Approved => "b",
        }
    }
}

/// The date-related columns of a stored booking, as read by the aggregator.
#[derive(Debug, Clone, Default)]
pub struct BookingRecord {
    pub desired_dates: String,
    pub fact_start: Option<NaiveDateTime>,
    pub fact_end: Option<NaiveDateTime>,
    pub is_late_checkout: bool,
}

/// Body of `POST /add-booking`, field names as the booking form sends them.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub fio: String,
    pub phone: String,
    #[serde(deserialize_with = "number_or_string")]
    pub adults: i64,
    #[serde(deserialize_with = "number_or_string")]
    pub childrens: i64,
    pub desired_dates: String,
    #[serde(deserialize_with = "number_or_string")]
    pub booking_identifier: i64,
    pub whatsapp: bool,
    pub is_dayly: bool,
    #[serde(default)]
    pub late_checkout: bool,
    #[serde(default)]
    pub early_checkin: bool,
    #[serde(default)]
    pub comment: Option<String>,
}

// Form inputs reach us as strings ("2"), scripted clients send numbers.
fn number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {s:?}"))),
    }
}
