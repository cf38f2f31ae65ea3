use chrono::{DateTime, NaiveTime, TimeZone, Utc};

use crate::domain::CalendarDate;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days from `now` until the start of `date` (UTC), rounded up.
/// Zero or negative once the date has arrived or passed.
pub fn days_until(date: CalendarDate, now: DateTime<Utc>) -> i64 {
    let target = Utc.from_utc_datetime(&date.as_ref().and_time(NaiveTime::default()));
    let diff = target.timestamp_millis() - now.timestamp_millis();

    // Integer division truncates towards zero, which is already the ceiling for negatives
    let days = diff / MILLIS_PER_DAY;
    if diff % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Days until `date` from the current time
pub fn days_until_expiry(date: CalendarDate) -> i64 {
    days_until(date, Utc::now())
}

/// How close an expiry or payment date is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryLevel {
    /// Seven days or fewer left
    Urgent,
    /// Thirty days or fewer left
    Soon,
    Fresh,
}

impl ExpiryLevel {
    pub fn from_days(days: i64) -> Self {
        if days <= 7 {
            Self::Urgent
        } else if days <= 30 {
            Self::Soon
        } else {
            Self::Fresh
        }
    }

    /// Card color class
    pub fn color(&self) -> &'static str {
        match self {
            Self::Urgent => "red",
            Self::Soon => "yellow",
            Self::Fresh => "green",
        }
    }
}

/// Format an amount as New Taiwan dollars, e.g. `NT$ 1,234.5`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("NT$ {}", amount);
    }

    // At most three fraction digits, trailing zeros dropped
    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("NT$ {}{}", sign, grouped)
    } else {
        format!("NT$ {}{}.{}", sign, grouped, frac_part)
    }
}

/// Short zh-TW date, e.g. `2026/1/3`
pub fn format_date(date: CalendarDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}
