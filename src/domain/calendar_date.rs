use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date without a time of day, stored as `YYYY-MM-DD`.
///
/// Content API date fields may carry a time component (`2026-01-01T00:00+08:00`);
/// only the date part is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::ParsingError("Date cannot be empty".into()));
        }
        // Accept a bare date or the date part of a timestamp
        let date_part = match value.split_once('T') {
            Some((date, _time)) => date,
            None => value,
        };
        NaiveDate::parse_from_str(date_part, DATE_FORMAT)
            .map(Self)
            .map_err(|_| Error::ParsingError(format!("{} is not a valid date", value)))
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> String {
        value.to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl AsRef<NaiveDate> for CalendarDate {
    fn as_ref(&self) -> &NaiveDate {
        &self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.format(DATE_FORMAT).fmt(f)
    }
}
