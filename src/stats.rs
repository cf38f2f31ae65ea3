use chrono::{DateTime, Utc};

use crate::domain::CalendarDate;
use crate::helpers::days_until;
use crate::model::{FoodItemFields, Record, SubscriptionFields};

/// Summary figures for the subscriptions page
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionStats {
    pub monthly_cost: f64,
    pub total: usize,
    /// Next payment within seven days
    pub due_soon: usize,
    /// Next payment within three days
    pub due_very_soon: usize,
}

impl SubscriptionStats {
    pub fn from_records(records: &[Record<SubscriptionFields>], now: DateTime<Utc>) -> Self {
        let remaining = |r: &Record<SubscriptionFields>| days_left(r.fields.data.next_payment, now);

        Self {
            monthly_cost: records.iter().map(|r| r.fields.data.price_or_zero()).sum(),
            total: records.len(),
            due_soon: records
                .iter()
                .filter(|r| remaining(*r).map_or(false, |d| d <= 7))
                .count(),
            due_very_soon: records
                .iter()
                .filter(|r| remaining(*r).map_or(false, |d| d <= 3))
                .count(),
        }
    }
}

/// Summary figures for the food inventory page
#[derive(Debug, Clone, PartialEq)]
pub struct FoodStats {
    pub total_value: f64,
    pub total: usize,
    /// Expiring within seven days
    pub expiring_soon: usize,
    /// Expiring within thirty days
    pub expiring_this_month: usize,
}

impl FoodStats {
    pub fn from_records(records: &[Record<FoodItemFields>], now: DateTime<Utc>) -> Self {
        let remaining = |r: &Record<FoodItemFields>| days_left(r.fields.data.expiry_date, now);

        Self {
            total_value: records.iter().map(|r| r.fields.data.value_or_zero()).sum(),
            total: records.len(),
            expiring_soon: records
                .iter()
                .filter(|r| remaining(*r).map_or(false, |d| d <= 7))
                .count(),
            expiring_this_month: records
                .iter()
                .filter(|r| remaining(*r).map_or(false, |d| d <= 30))
                .count(),
        }
    }
}

// Records without a date never count as due
fn days_left(date: Option<CalendarDate>, now: DateTime<Utc>) -> Option<i64> {
    date.map(|date| days_until(date, now))
}
