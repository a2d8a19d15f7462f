use chrono::{Datelike, Local, NaiveDate};

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The day a yearly `month`/`day` anniversary falls on in `year`.
///
/// 29 February moves to 28 February in non-leap years.
pub fn occurrence_in_year(month: u32, day: u32, year: i32) -> Option<NaiveDate> {
    if month == 2 && day == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Whole calendar days from `today` to the next anniversary of `date`, 0 when it is today.
pub fn days_until_next(date: NaiveDate, today: NaiveDate) -> i64 {
    let (month, day) = (date.month(), date.day());
    let this_year = occurrence_in_year(month, day, today.year());
    let next = match this_year {
        Some(candidate) if candidate >= today => candidate,
        _ => match occurrence_in_year(month, day, today.year() + 1) {
            Some(candidate) => candidate,
            None => return 0,
        },
    };
    (next - today).num_days()
}
