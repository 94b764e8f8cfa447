use crate::router::handle;
use crate::tests::utils::{
    count_bookings, error_logs, init_test_db, insert_booking_identifier, read_body,
};
use astra::Body;
use http::{Method, Request};
use rusqlite::params;

fn post(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/add-booking")
        .header("Content-Type", "application/json")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

fn form_body(identifier: i64) -> String {
    format!(
        r#"{{
            "fio": "Петров Пётр",
            "phone": "+79001234567",
            "adults": "2",
            "childrens": "1",
            "desired_dates": "01.08.2024-03.08.2024",
            "whatsapp": true,
            "booking_identifier": "{identifier}",
            "is_dayly": true,
            "late_checkout": true,
            "early_checkin": false,
            "comment": "С собакой"
        }}"#
    )
}

#[test]
fn creates_active_booking() {
    let db = init_test_db();
    let house = insert_booking_identifier(&db, "Домик");

    let resp = handle(post(&form_body(house)), &db).expect("handler failed");
    assert_eq!(resp.status(), 201);
    assert_eq!(read_body(resp), "");

    let (status, adults, childs, late, comment): (String, i64, i64, bool, Option<String>) = db
        .with_conn(|conn| {
            conn.query_row(
                "select status, adults_count, childs_count, is_late_checkout, user_comment from bookings where booking_identifier_id = ?",
                params![house],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?)),
            )
            .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap();

    assert_eq!(status, "a");
    assert_eq!((adults, childs), (2, 1));
    assert!(late);
    assert_eq!(comment.as_deref(), Some("С собакой"));
    assert!(error_logs(&db).is_empty());
}

#[test]
fn new_booking_does_not_block_dates_until_approved() {
    let db = init_test_db();
    let house = insert_booking_identifier(&db, "Домик");

    let resp = handle(post(&form_body(house)), &db).unwrap();
    assert_eq!(resp.status(), 201);

    let req = Request::builder()
        .method(Method::GET)
        .uri(format!("/get-booked-days/{house}"))
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &db).unwrap();
    assert_eq!(read_body(resp), r#"{"booked_dates":[]}"#);
}

#[test]
fn empty_body_is_bad_request() {
    let db = init_test_db();

    for body in ["", "   \n"] {
        let resp = handle(post(body), &db).unwrap();
        assert_eq!(resp.status(), 400);
        assert_eq!(read_body(resp), "The request body is empty");
    }

    assert_eq!(error_logs(&db).len(), 2);
    assert_eq!(count_bookings(&db), 0);
}

#[test]
fn get_is_rejected() {
    let db = init_test_db();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/add-booking")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &db).unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(read_body(resp), "The request type must be POST");
}

#[test]
fn malformed_json_is_logged_as_server_error() {
    let db = init_test_db();

    let resp = handle(post(r#"{"fio": "no closing brace""#), &db).unwrap();
    assert_eq!(resp.status(), 500);
    assert!(read_body(resp).starts_with("An error occured while saving new booking:"));

    let logs = error_logs(&db);
    assert_eq!(logs.len(), 1);
    assert!(logs[0].stack_trace.is_some());
    assert_eq!(
        logs[0].additional_info.as_deref(),
        Some(r#"{"fio": "no closing brace""#)
    );
    assert_eq!(count_bookings(&db), 0);
}

#[test]
fn missing_field_is_server_error_with_form_context() {
    let db = init_test_db();

    let resp = handle(post(r#"{"fio": "Иван"}"#), &db).unwrap();
    assert_eq!(resp.status(), 500);

    let logs = error_logs(&db);
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].additional_info.as_deref(), Some(r#"{"fio":"Иван"}"#));
}

#[test]
fn unknown_resource_is_server_error() {
    let db = init_test_db();

    let resp = handle(post(&form_body(999)), &db).unwrap();
    assert_eq!(resp.status(), 500);
    assert!(read_body(resp).contains("insert booking failed"));
    assert_eq!(count_bookings(&db), 0);
    assert_eq!(error_logs(&db).len(), 1);
}
