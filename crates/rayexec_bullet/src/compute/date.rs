//! Conversions between instants and the day/second granularity epoch offsets
//! stored in date and datetime arrays.
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Utc};

pub const EPOCH_NAIVE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
    Some(date) => date,
    _ => unreachable!(),
};

pub const EPOCH_DAYS_FROM_CE: i32 = 719163;

/// Get the number of days since epoch for an instant.
///
/// Days are UTC calendar days, not days in the local timezone.
pub fn days_since_epoch(instant: &DateTime<Utc>) -> i32 {
    instant.date_naive().num_days_from_ce() - EPOCH_DAYS_FROM_CE
}

/// Get the date for some number of days since epoch.
pub fn days_to_date(days: u16) -> Option<NaiveDate> {
    EPOCH_NAIVE_DATE.checked_add_days(Days::new(days as u64))
}

/// Get the (UTC) datetime for some number of seconds since epoch.
pub fn seconds_to_datetime(secs: u32) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(secs as i64, 0).map(|dt| dt.naive_utc())
}
