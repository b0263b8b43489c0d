
use chrono::NaiveDate;

/// Fixed date used as "today" by the services under test.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
}
