use serde::Deserialize;

use unicode_segmentation::UnicodeSegmentation;

use url::Url;

use crate::domain::{CalendarDate, FoodCategory};
use crate::error::{Error, Result};
use crate::model::{FoodItemFields, SubscriptionFields, DEFAULT_SUBSCRIPTION_ICON};

const MAX_NAME_LEN: usize = 256;

/// Raw subscription form submission, every value as typed by the user
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionForm {
    pub name: Option<String>,
    pub url: Option<String>,
    pub price: Option<String>,
    pub next_payment: Option<String>,
    pub icon: Option<String>,
}

impl TryFrom<SubscriptionForm> for SubscriptionFields {
    type Error = Error;

    fn try_from(form: SubscriptionForm) -> Result<Self> {
        let name = parse_name(form.name)?;
        let price = match non_blank(form.price) {
            Some(price) => parse_amount(&price, "Price")?,
            None => return Err(Error::ParsingError("Price is required".into())),
        };
        let next_payment = match non_blank(form.next_payment) {
            Some(date) => date.parse::<CalendarDate>()?,
            None => return Err(Error::ParsingError("Next payment date is required".into())),
        };
        // A submitted blank URL clears the stored one; `None` leaves it as is
        let url = match form.url.map(|url| url.trim().to_string()) {
            Some(url) if !url.is_empty() => {
                Url::parse(&url).map_err(|_| Error::ParsingError(format!("{} is not a valid URL", url)))?;
                Some(url)
            }
            url => url,
        };
        let icon = non_blank(form.icon).unwrap_or_else(|| DEFAULT_SUBSCRIPTION_ICON.into());

        Ok(Self {
            name: Some(name),
            url,
            price: Some(price),
            next_payment: Some(next_payment),
            icon: Some(icon),
        })
    }
}

/// Raw food item form submission
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemForm {
    pub name: Option<String>,
    pub category: Option<String>,
    pub expiry_date: Option<String>,
    pub value: Option<String>,
}

impl TryFrom<FoodItemForm> for FoodItemFields {
    type Error = Error;

    fn try_from(form: FoodItemForm) -> Result<Self> {
        let name = parse_name(form.name)?;
        let expiry_date = match non_blank(form.expiry_date) {
            Some(date) => date.parse::<CalendarDate>()?,
            None => return Err(Error::ParsingError("Expiry date is required".into())),
        };
        let category = non_blank(form.category)
            .map(|category| FoodCategory::from_code(&category))
            .unwrap_or_default();
        // An unreadable value counts as zero
        let value = non_blank(form.value)
            .and_then(|value| parse_amount(&value, "Value").ok())
            .unwrap_or_default();

        Ok(Self {
            name: Some(name),
            category: Some(category),
            expiry_date: Some(expiry_date),
            value: Some(value),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_name(name: Option<String>) -> Result<String> {
    let name = non_blank(name).ok_or_else(|| Error::ParsingError("Name is required".into()))?;
    if name.graphemes(true).count() > MAX_NAME_LEN {
        return Err(Error::ParsingError("Name too long".into()));
    }
    Ok(name)
}

fn parse_amount(value: &str, label: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(Error::ParsingError(format!(
            "{} must be a non-negative number",
            label
        ))),
    }
}
