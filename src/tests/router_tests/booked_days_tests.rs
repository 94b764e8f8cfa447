use crate::router::handle;
use crate::tests::utils::{
    count_bookings, error_logs, init_test_db, insert_booking_identifier, insert_stored_booking,
    read_body, StoredBooking,
};
use astra::Body;
use http::{Method, Request};
use serde_json::Value;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn booked_dates(body: &str) -> Vec<String> {
    let json: Value = serde_json::from_str(body).expect("response is JSON");
    let mut dates: Vec<String> = json["booked_dates"]
        .as_array()
        .expect("booked_dates is a list")
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    dates.sort();
    dates
}

#[test]
fn returns_days_of_approved_bookings_only() {
    let db = init_test_db();
    let house = insert_booking_identifier(&db, "Домик у озера");
    let sauna = insert_booking_identifier(&db, "Баня");

    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: house,
            fact_start: Some("2024-07-01 14:00:00"),
            fact_end: Some("2024-07-05 12:00:00"),
            ..Default::default()
        },
    );
    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: house,
            desired_dates: "01.08.2024-03.08.2024",
            ..Default::default()
        },
    );
    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: house,
            desired_dates: "20.08.2024",
            status: "a",
            ..Default::default()
        },
    );
    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: house,
            desired_dates: "21.08.2024",
            status: "c",
            ..Default::default()
        },
    );
    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: sauna,
            desired_dates: "22.08.2024",
            ..Default::default()
        },
    );

    let resp = handle(get(&format!("/get-booked-days/{house}")), &db).expect("handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    assert_eq!(
        booked_dates(&read_body(resp)),
        vec![
            "2024.07.01",
            "2024.07.02",
            "2024.07.03",
            "2024.07.04",
            "2024.08.01",
            "2024.08.02",
        ]
    );
}

#[test]
fn late_checkout_and_overlaps() {
    let db = init_test_db();
    let house = insert_booking_identifier(&db, "Домик");

    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: house,
            fact_start: Some("2024-07-01 00:00:00"),
            fact_end: Some("2024-07-03 00:00:00"),
            is_late_checkout: true,
            ..Default::default()
        },
    );
    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: house,
            desired_dates: "02.07.2024, 03.07.2024, not-a-date",
            ..Default::default()
        },
    );
    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: house,
            fact_start: Some("2024-07-10 09:00:00"),
            ..Default::default()
        },
    );

    let resp = handle(get(&format!("/get-booked-days/{house}")), &db).unwrap();

    assert_eq!(
        booked_dates(&read_body(resp)),
        vec!["2024.07.01", "2024.07.02", "2024.07.03", "2024.07.10"]
    );
}

#[test]
fn only_dayly_filters_by_stay_type() {
    let db = init_test_db();
    let house = insert_booking_identifier(&db, "Домик");

    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: house,
            desired_dates: "01.09.2024",
            is_dayly: true,
            ..Default::default()
        },
    );
    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: house,
            desired_dates: "02.09.2024",
            is_dayly: false,
            ..Default::default()
        },
    );

    let all = handle(get(&format!("/get-booked-days/{house}")), &db).unwrap();
    assert_eq!(booked_dates(&read_body(all)), vec!["2024.09.01", "2024.09.02"]);

    let dayly = handle(get(&format!("/get-booked-days/{house}?only_dayly=1")), &db).unwrap();
    assert_eq!(booked_dates(&read_body(dayly)), vec!["2024.09.01"]);

    let bare_flag = handle(get(&format!("/get-booked-days/{house}?only_dayly")), &db).unwrap();
    assert_eq!(booked_dates(&read_body(bare_flag)), vec!["2024.09.01"]);
}

#[test]
fn bookings_created_in_the_future_are_ignored() {
    let db = init_test_db();
    let house = insert_booking_identifier(&db, "Домик");

    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: house,
            desired_dates: "01.09.2024",
            created: "2999-01-01 00:00:00",
            ..Default::default()
        },
    );

    let resp = handle(get(&format!("/get-booked-days/{house}")), &db).unwrap();
    assert!(booked_dates(&read_body(resp)).is_empty());
}

#[test]
fn missing_or_zero_identifier_is_rejected() {
    let db = init_test_db();

    for uri in ["/get-booked-days/0", "/get-booked-days/", "/get-booked-days/abc"] {
        let resp = handle(get(uri), &db).unwrap();
        assert_eq!(resp.status(), 400, "{uri}");
        assert_eq!(read_body(resp), "booking_identifier is empty");
    }

    let logs = error_logs(&db);
    assert_eq!(logs.len(), 3);
    assert!(logs.iter().all(|l| l.error_message == "booking_identifier is empty"));
    assert_eq!(count_bookings(&db), 0);
}

#[test]
fn corrupt_row_still_answers_with_what_was_read() {
    let db = init_test_db();
    let house = insert_booking_identifier(&db, "Домик");

    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: house,
            desired_dates: "05.10.2024",
            ..Default::default()
        },
    );
    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: house,
            fact_start: Some("sometime in october"),
            ..Default::default()
        },
    );

    let resp = handle(get(&format!("/get-booked-days/{house}")), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(booked_dates(&read_body(resp)), vec!["2024.10.05"]);

    let logs = error_logs(&db);
    assert_eq!(logs.len(), 1);
    assert!(logs[0].error_message.starts_with("failed to get booked days"));
    assert!(logs[0].stack_trace.is_some());
    assert!(!logs[0].is_solved);
}

#[test]
fn unknown_resource_has_no_booked_days() {
    let db = init_test_db();

    let resp = handle(get("/get-booked-days/42"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(read_body(resp), r#"{"booked_dates":[]}"#);
    assert!(error_logs(&db).is_empty());
}

#[test]
fn any_method_reads_booked_days() {
    let db = init_test_db();
    let sauna = insert_booking_identifier(&db, "Баня");

    insert_stored_booking(
        &db,
        StoredBooking {
            identifier: sauna,
            fact_start: Some("2024-07-01 10:00:00"),
            fact_end: Some("2024-07-01 12:00:00"),
            ..Default::default()
        },
    );

    for method in [Method::HEAD, Method::POST] {
        let req = Request::builder()
            .method(method.clone())
            .uri(format!("/get-booked-days/{sauna}"))
            .body(Body::empty())
            .unwrap();

        let resp = handle(req, &db).expect("handler failed");
        assert_eq!(resp.status(), 200, "{method}");
        assert_eq!(booked_dates(&read_body(resp)), vec!["2024.07.01"], "{method}");
    }
}
