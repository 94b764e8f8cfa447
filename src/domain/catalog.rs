// src/domain/catalog.rs

use chrono::NaiveDateTime;

pub const BOOKING_BTN_TEXT: &str = "Забронировать";
pub const APPOINTMENT_BTN_TEXT: &str = "Записаться";

/// Card button label. Only the two known labels are shown; a missing or
/// unknown value falls back to the booking one.
pub fn button_text(stored: Option<&str>) -> &'static str {
    match stored.map(str::trim) {
        Some(APPOINTMENT_BTN_TEXT) => APPOINTMENT_BTN_TEXT,
        _ => BOOKING_BTN_TEXT,
    }
}

/// Three Russian word forms for a unit of time or quantity:
/// "1 час", "2 часа", "5 часов".
#[derive(Debug, Clone)]
pub struct Period {
    pub singular: String,
    pub plural: String,
    pub plural_special: String,
}

impl Period {
    pub fn pluralize(&self, count: i64) -> &str {
        let count = count.abs();
        let last = count % 10;
        let last_two = count % 100;

        if last == 1 && last_two != 11 {
            &self.singular
        } else if (2..=4).contains(&last) && !(10..20).contains(&last_two) {
            &self.plural
        } else {
            &self.plural_special
        }
    }
}

/// A titled bullet list shown after an offering's description.
#[derive(Debug, Clone)]
pub struct AdditionalInfo {
    pub id: i64,
    pub displayed_name: String,
    pub items: Vec<String>,
}

impl AdditionalInfo {
    pub fn unique_name(&self) -> String {
        format!("additinal_info{}", self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferingKind {
    House,
    WellnessTreatment,
    Action,
}

impl OfferingKind {
    pub fn table(self) -> &'static str {
        match self {
            OfferingKind::House => "houses",
            OfferingKind::WellnessTreatment => "wellness_treatments",
            OfferingKind::Action => "actions",
        }
    }
}

/// Houses, wellness treatments and actions all share this shape.
#[derive(Debug, Clone)]
pub struct Offering {
    pub id: i64,
    pub kind: OfferingKind,
    pub name: String,
    pub start_price: i64,
    pub duration: i64,
    pub period: Period,
    pub description: String,
    pub additional_info_id: Option<i64>,
    pub booking_identifier_id: Option<i64>,
    pub booking_btn_text: &'static str,
}

impl Offering {
    pub fn pluralized_period(&self) -> &str {
        self.period.pluralize(self.duration)
    }

    /// "3 " for multi-unit durations, nothing for a single unit.
    pub fn duration_prefix(&self) -> String {
        if self.duration <= 1 {
            String::new()
        } else {
            format!("{} ", self.duration)
        }
    }

    pub fn is_free(&self) -> bool {
        self.start_price <= 0
    }

    pub fn unique_name(&self) -> String {
        format!("{}{}", self.name, self.id)
    }
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub count: i64,
    pub measure: String,
    pub is_available: bool,
}

impl Product {
    pub fn unique_name(&self) -> String {
        format!("{}{}", self.name, self.id)
    }
}

#[derive(Debug, Clone)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: NaiveDateTime,
}

impl Event {
    pub fn is_passed(&self, now: NaiveDateTime) -> bool {
        now >= self.date
    }

    pub fn unique_name(&self) -> String {
        format!("{}{}", self.title, self.id)
    }
}

/// Future events soonest first, past events oldest first.
pub fn split_events(events: Vec<Event>, now: NaiveDateTime) -> (Vec<Event>, Vec<Event>) {
    let (mut past, mut future): (Vec<Event>, Vec<Event>) =
        events.into_iter().partition(|e| e.is_passed(now));
    future.sort_by_key(|e| e.date);
    past.sort_by_key(|e| e.date);
    (future, past)
}

#[derive(Debug, Clone)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: NaiveDateTime,
}

impl News {
    pub fn unique_name(&self) -> String {
        format!("{}{}", self.title, self.id)
    }
}

#[derive(Debug, Clone)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl Pet {
    pub fn unique_name(&self) -> String {
        format!("{}{}", self.name, self.id)
    }
}
