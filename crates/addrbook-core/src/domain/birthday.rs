use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("birthday pattern compiles"));

/// A calendar date written as `DD.MM.YYYY` that is not after the day it was validated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str, today: NaiveDate) -> Result<Self, CoreError> {
        if !BIRTHDAY_PATTERN.is_match(raw) || !raw.is_ascii() {
            return Err(CoreError::InvalidBirthdayFormat(raw.to_string()));
        }
        let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| CoreError::InvalidBirthdayDate(raw.to_string()))?;
        Self::from_date(date, today)
    }

    pub fn from_date(date: NaiveDate, today: NaiveDate) -> Result<Self, CoreError> {
        if date > today {
            return Err(CoreError::BirthdayInFuture(
                date.format(BIRTHDAY_FORMAT).to_string(),
            ));
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
