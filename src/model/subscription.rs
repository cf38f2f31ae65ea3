use serde::{Deserialize, Serialize};

use crate::domain::CalendarDate;

use super::{Entry, Fields, Record, Stamped};

/// Icon shown for subscriptions that do not set their own
pub const DEFAULT_SUBSCRIPTION_ICON: &str = "📋";

/// Subscription record fields.
/// Every field is optional in storage; the `*_or_default` accessors apply render defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Monthly cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_payment: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SubscriptionFields {
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn url_or_default(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or_default()
    }

    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_SUBSCRIPTION_ICON)
    }
}

impl Fields for SubscriptionFields {
    fn merge(&mut self, patch: Self) {
        self.name = patch.name.or(self.name.take());
        self.url = patch.url.or(self.url.take());
        self.price = patch.price.or(self.price.take());
        self.next_payment = patch.next_payment.or(self.next_payment.take());
        self.icon = patch.icon.or(self.icon.take());
    }
}

fn default_subscription(
    id: &str,
    name: &str,
    url: &str,
    price: f64,
    next_payment: (i32, u32, u32),
    icon: &str,
) -> Record<SubscriptionFields> {
    let (year, month, day) = next_payment;
    Entry::new(
        id,
        Stamped::unstamped(SubscriptionFields {
            name: Some(name.into()),
            url: Some(url.into()),
            price: Some(price),
            next_payment: CalendarDate::from_ymd(year, month, day),
            icon: Some(icon.into()),
        }),
    )
}

pub fn default_subscriptions() -> Vec<Record<SubscriptionFields>> {
    vec![
        default_subscription(
            "default-1",
            "天晟/廣信聯/心臟內科",
            "https://www.tsmg.com.tw/index.php/main/schedule_time/detail",
            530.0,
            (2026, 1, 1),
            "🏥",
        ),
        default_subscription(
            "default-2",
            "Kiro Pro",
            "https://app.kiro.dev/account/usage",
            640.0,
            (2026, 1, 1),
            "💻",
        ),
        default_subscription(
            "default-3",
            "自然輸入法/已經取消訂閱",
            "https://service.iq.com.tw/AccountInfo",
            129.0,
            (2026, 1, 3),
            "🌿",
        ),
    ]
}
