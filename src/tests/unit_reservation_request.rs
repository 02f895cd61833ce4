use crate::features::reservations::model::parse_iso_datetime;
use crate::features::reservations::parse_reservation_body;
use chrono::{NaiveDate, NaiveDateTime};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn test_parse_iso_datetime_shapes() {
    assert_eq!(parse_iso_datetime("2024-01-01T12:00:00").unwrap(), at(2024, 1, 1, 12, 0, 0));
    assert_eq!(parse_iso_datetime("2024-01-01 12:30:15").unwrap(), at(2024, 1, 1, 12, 30, 15));
    assert_eq!(parse_iso_datetime("2024-01-01T08:45").unwrap(), at(2024, 1, 1, 8, 45, 0));
    assert_eq!(parse_iso_datetime("2024-03-05").unwrap(), at(2024, 3, 5, 0, 0, 0));

    let fractional = parse_iso_datetime("2024-01-01T12:00:00.250").unwrap();
    assert_eq!(fractional.and_utc().timestamp_subsec_millis(), 250);
}

// the wall-clock value is kept, the offset is dropped
#[test]
fn test_parse_iso_datetime_with_offset() {
    assert_eq!(
        parse_iso_datetime("2024-01-01T12:00:00+05:30").unwrap(),
        at(2024, 1, 1, 12, 0, 0)
    );
    assert_eq!(parse_iso_datetime("2024-01-01T12:00:00Z").unwrap(), at(2024, 1, 1, 12, 0, 0));

    // offsets also come without seconds
    assert_eq!(parse_iso_datetime("2024-01-01T12:00+05:30").unwrap(), at(2024, 1, 1, 12, 0, 0));
    assert_eq!(parse_iso_datetime("2024-01-01T12:00Z").unwrap(), at(2024, 1, 1, 12, 0, 0));
    assert_eq!(parse_iso_datetime("2024-01-01 09:15:30-04:00").unwrap(), at(2024, 1, 1, 9, 15, 30));
}

#[test]
fn test_parse_iso_datetime_hour_only() {
    assert_eq!(parse_iso_datetime("2024-01-01T12").unwrap(), at(2024, 1, 1, 12, 0, 0));
    assert_eq!(parse_iso_datetime("2024-01-01 07").unwrap(), at(2024, 1, 1, 7, 0, 0));
}

#[test]
fn test_parse_iso_datetime_rejects_garbage() {
    assert!(parse_iso_datetime("").is_err());
    assert!(parse_iso_datetime("01/02/2024").is_err());
    assert!(parse_iso_datetime("2024-13-01T00:00:00").is_err());
}

#[test]
fn test_parse_body_valid() {
    let reservation = parse_reservation_body(
        br#"{"user_id": 3, "cafe_id": 2, "date_time": "2024-01-01T12:00:00", "number_of_guests": 4}"#,
    )
    .unwrap();

    assert_eq!(reservation.user_id, 3);
    assert_eq!(reservation.cafe_id, 2);
    assert_eq!(reservation.number_of_guests, 4);
    assert_eq!(reservation.date_time, at(2024, 1, 1, 12, 0, 0));
}

// no sanity checks on the numbers themselves
#[test]
fn test_parse_body_accepts_odd_values() {
    let reservation = parse_reservation_body(
        br#"{"user_id": 999, "cafe_id": 999, "date_time": "1999-01-01", "number_of_guests": -3}"#,
    )
    .unwrap();

    assert_eq!(reservation.number_of_guests, -3);
}

#[test]
fn test_parse_body_missing_field() {
    let err = parse_reservation_body(br#"{"user_id": 1, "cafe_id": 1, "number_of_guests": 2}"#)
        .unwrap_err();
    assert!(format!("{:#}", err).contains("date_time"));
}

#[test]
fn test_parse_body_null_field() {
    assert!(parse_reservation_body(
        br#"{"user_id": null, "cafe_id": 1, "date_time": "2024-01-01T12:00:00", "number_of_guests": 2}"#
    )
    .is_err());
}

#[test]
fn test_parse_body_empty() {
    assert!(parse_reservation_body(b"").is_err());
}
