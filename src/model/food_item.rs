use serde::{Deserialize, Serialize};

use crate::domain::{CalendarDate, FoodCategory};

use super::{Entry, Fields, Record, Stamped};

/// Food item record fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FoodCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl FoodItemFields {
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn category_or_default(&self) -> FoodCategory {
        self.category.unwrap_or_default()
    }

    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or_default()
    }
}

impl Fields for FoodItemFields {
    fn merge(&mut self, patch: Self) {
        self.name = patch.name.or(self.name.take());
        self.category = patch.category.or(self.category.take());
        self.expiry_date = patch.expiry_date.or(self.expiry_date.take());
        self.value = patch.value.or(self.value.take());
    }
}

fn default_food_item(id: &str, name: &str, expiry_date: (i32, u32, u32)) -> Record<FoodItemFields> {
    let (year, month, day) = expiry_date;
    Entry::new(
        id,
        Stamped::unstamped(FoodItemFields {
            name: Some(name.into()),
            category: Some(FoodCategory::Snacks),
            expiry_date: CalendarDate::from_ymd(year, month, day),
            value: Some(50.0),
        }),
    )
}

pub fn default_food_items() -> Vec<Record<FoodItemFields>> {
    vec![
        default_food_item("food-default-1", "【張君雅】五香海苔休閒丸子", (2025, 2, 15)),
        default_food_item("food-default-2", "【張君雅】日式串燒休閒丸子", (2025, 2, 20)),
        default_food_item("food-default-3", "樂事洋芋片", (2025, 1, 30)),
    ]
}
