use crate::db::bookings::insert_booking;
use crate::db::catalog;
use crate::db::{Database, DbErrorSink, SqliteBookingStore};
use crate::domain::booked_days::{parse_booking_identifier, EMPTY_IDENTIFIER_MESSAGE};
use crate::domain::booking::NewBooking;
use crate::domain::catalog::{split_events, OfferingKind};
use crate::domain::pagination::paginate;
use crate::domain::{format_booked_days, get_booked_days, BookedDaysQuery, ErrorReport, ErrorSink};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, status_response, ResultResp};
use crate::templates::pages::{self, HomeVm};
use astra::Request;
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::Read;
use tracing::{error, info};

const BOOKED_DAYS_PREFIX: &str = "/get-booked-days";
const HOME_PRODUCTS: i64 = 10;
const HOME_EVENTS: usize = 5;
const HOME_NEWS: i64 = 5;
const PAST_EVENTS: usize = 10;
const NEWS_PER_PAGE: usize = 5;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(db),
        ("GET", "/events") => events(db),
        ("GET", "/news") => news(&req, db),
        ("GET", "/our-products") => our_products(db),
        (_, "/add-booking") => add_booking(req, db),
        (_, p) if p == BOOKED_DAYS_PREFIX || p.starts_with("/get-booked-days/") => {
            let raw_id = p[BOOKED_DAYS_PREFIX.len()..].trim_matches('/');
            booked_days(&req, raw_id, db)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn home(db: &Database) -> ResultResp {
    let now = Utc::now().naive_utc();

    let vm = db.with_conn(|conn| {
        let (future_events, _) = split_events(catalog::list_events(conn)?, now);

        Ok(HomeVm {
            houses: catalog::list_offerings(conn, OfferingKind::House)?,
            additional_info: catalog::list_additional_info(conn)?,
            wellness_treatments: catalog::list_offerings(conn, OfferingKind::WellnessTreatment)?,
            actions: catalog::list_offerings(conn, OfferingKind::Action)?,
            products: catalog::list_products(conn, true, Some(HOME_PRODUCTS))?,
            future_events: future_events.into_iter().take(HOME_EVENTS).collect(),
            news: catalog::list_news(conn, Some(HOME_NEWS))?,
            pets: catalog::list_pets(conn)?,
        })
    })?;

    html_response(pages::home_page(&vm))
}

fn events(db: &Database) -> ResultResp {
    let now = Utc::now().naive_utc();
    let all = db.with_conn(|conn| catalog::list_events(conn))?;

    let (future, mut past) = split_events(all, now);
    past.truncate(PAST_EVENTS);

    html_response(pages::events_page(&future, &past))
}

fn news(req: &Request, db: &Database) -> ResultResp {
    let params = parse_query(req);
    let all = db.with_conn(|conn| catalog::list_news(conn, None))?;

    let page = paginate(all, NEWS_PER_PAGE, params.get("page").map(String::as_str));
    html_response(pages::news_page(&page))
}

fn our_products(db: &Database) -> ResultResp {
    let products = db.with_conn(|conn| catalog::list_products(conn, false, None))?;
    html_response(pages::products_page(&products))
}

#[derive(Serialize)]
struct BookedDaysResponse {
    booked_dates: Vec<String>,
}

/// `GET /get-booked-days/{id}[?only_dayly]` for the booking date picker.
fn booked_days(req: &Request, raw_id: &str, db: &Database) -> ResultResp {
    let sink = DbErrorSink::new(db);

    let booking_identifier = match parse_booking_identifier(raw_id) {
        Ok(id) => id,
        Err(_) => {
            sink.record(ErrorReport::new(EMPTY_IDENTIFIER_MESSAGE));
            return status_response(400, EMPTY_IDENTIFIER_MESSAGE);
        }
    };

    let query = BookedDaysQuery {
        booking_identifier,
        only_dayly: parse_query(req).contains_key("only_dayly"),
        now: Utc::now().naive_utc(),
    };

    let days = get_booked_days(&SqliteBookingStore::new(db), &sink, &query);

    json_response(
        200,
        &BookedDaysResponse {
            booked_dates: format_booked_days(&days),
        },
    )
}

/// `POST /add-booking` with the booking form as JSON.
fn add_booking(req: Request, db: &Database) -> ResultResp {
    let sink = DbErrorSink::new(db);

    if req.method().as_str() != "POST" {
        return status_response(400, "The request type must be POST");
    }

    let mut body = Vec::new();
    if let Err(e) = req.into_body().reader().read_to_end(&mut body) {
        return booking_failed(&sink, &format!("failed to read request body: {e}"), Value::Null);
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        let message = "The request body is empty";
        sink.record(ErrorReport::new(message));
        return status_response(400, message);
    }

    match save_booking(db, &body) {
        Ok(id) => {
            info!(booking_id = id, "booking request saved");
            status_response(201, "")
        }
        Err(e) => booking_failed(&sink, &e.to_string(), body_context(&body)),
    }
}

fn save_booking(db: &Database, body: &[u8]) -> Result<i64, ServerError> {
    let booking: NewBooking = serde_json::from_slice(body)?;
    let now = Utc::now().naive_utc();
    db.with_conn(|conn| insert_booking(conn, &booking, now))
}

fn booking_failed(sink: &dyn ErrorSink, detail: &str, context: Value) -> ResultResp {
    let message = format!("An error occured while saving new booking: {detail}");
    error!("{message}");

    sink.record(
        ErrorReport::new(message.clone())
            .with_backtrace()
            .with_context(context),
    );
    status_response(500, &message)
}

// The parsed form when the body is valid JSON, the raw text otherwise.
fn body_context(body: &[u8]) -> Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| json!(String::from_utf8_lossy(body).into_owned()))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}
