use chrono::NaiveDateTime;

pub const DEFAULT_RESERVATION_STATUS: &str = "confirmed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i64,
    pub user_id: i64,
    pub cafe_id: i64,
    pub date_time: NaiveDateTime,
    pub number_of_guests: i64,
    pub status: String,
}

/// Nothing here is checked against the user or cafe tables, and the guest
/// count may be any integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub user_id: i64,
    pub cafe_id: i64,
    pub date_time: NaiveDateTime,
    pub number_of_guests: i64,
}
