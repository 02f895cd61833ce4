use crate::domain::{DEFAULT_RESERVATION_STATUS, NewReservation, Reservation};
use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const RESERVATION_CREATED_MESSAGE: &str = "Reservation created successfully";

// `%.f` also matches when there is no fractional part
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const HOUR_ONLY_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

#[derive(sqlx::FromRow, PartialEq, Eq, Clone, Debug)]
pub struct DbReservation {
    pub id: i64,
    pub user_id: i64,
    pub cafe_id: i64,
    pub date_time: NaiveDateTime,
    pub number_of_guests: i64,
    pub status: Option<String>,
}

impl From<DbReservation> for Reservation {
    fn from(db_reservation: DbReservation) -> Self {
        Reservation {
            id: db_reservation.id,
            user_id: db_reservation.user_id,
            cafe_id: db_reservation.cafe_id,
            date_time: db_reservation.date_time,
            number_of_guests: db_reservation.number_of_guests,
            status: db_reservation
                .status
                .unwrap_or_else(|| DEFAULT_RESERVATION_STATUS.to_string()),
        }
    }
}

/// Body of `POST /api/reservations`. Every field is required.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ReservationRequest {
    pub user_id: i64,
    pub cafe_id: i64,
    pub date_time: String,
    pub number_of_guests: i64,
}

impl TryFrom<ReservationRequest> for NewReservation {
    type Error = anyhow::Error;

    fn try_from(request: ReservationRequest) -> Result<Self> {
        let date_time = parse_iso_datetime(&request.date_time)
            .with_context(|| format!("Invalid date_time '{}'", request.date_time))?;

        Ok(NewReservation {
            user_id: request.user_id,
            cafe_id: request.cafe_id,
            date_time,
            number_of_guests: request.number_of_guests,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct JsonMessage {
    pub message: String,
}

/// Parses the ISO-8601 shapes clients send for `date_time`.
///
/// Minutes and seconds may be left off. An explicit UTC offset (or `Z`) is
/// accepted but dropped: the wall-clock value is what gets stored.
pub fn parse_iso_datetime(raw: &str) -> Result<NaiveDateTime> {
    // tier 1: plain date-time, with or without seconds
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }

    // tier 2: date-time carrying an offset, a trailing `Z` is +00:00
    let with_offset = match raw.strip_suffix(['Z', 'z']) {
        Some(stripped) => format!("{}+00:00", stripped),
        None => raw.to_string(),
    };
    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Ok(dt.naive_local());
        }
    }

    // tier 3: hour only, chrono won't parse a time without minutes
    let with_minutes = format!("{}:00", raw);
    for format in HOUR_ONLY_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&with_minutes, format) {
            return Ok(dt);
        }
    }

    // tier 4: bare date, midnight
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow!("Failed to build midnight for {}", date));
    }

    Err(anyhow!("'{}' is not an ISO-8601 date or date-time", raw))
}
