use chrono::Utc;

use fengai::app::Dashboard;
use fengai::helpers::{days_until, format_currency, format_date, ExpiryLevel};
use fengai::model::{FoodItems, Subscriptions};
use fengai::settings::Settings;
use fengai::store::RecordStore;
use fengai::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    telemetry::init(settings.telemetry.log_filter())?;

    let store = RecordStore::new(settings.storage.storage());
    let client = settings.content.client()?;
    let mut dashboard = Dashboard::new(store, client);

    let now = Utc::now();

    let subscriptions = dashboard.load::<Subscriptions>().await;
    println!("訂閱 ({:?})", subscriptions.outcome);
    for record in &subscriptions.records {
        let fields = &record.fields.data;
        let next_payment = fields
            .next_payment
            .map(|date| format!("{} ({} 天)", format_date(date), days_until(date, now)))
            .unwrap_or_default();
        println!(
            "  {} {} {} /月 下次付款: {}",
            fields.icon_or_default(),
            fields.name_or_default(),
            format_currency(fields.price_or_zero()),
            next_payment,
        );
    }

    let food = dashboard.load::<FoodItems>().await;
    println!("食品 ({:?})", food.outcome);
    for record in &food.records {
        let fields = &record.fields.data;
        let expiry = fields
            .expiry_date
            .map(|date| {
                let days = days_until(date, now);
                format!(
                    "{} 還有 {} 天 [{}]",
                    format_date(date),
                    days,
                    ExpiryLevel::from_days(days).color()
                )
            })
            .unwrap_or_default();
        println!(
            "  {} ({}) {} 到期日: {}",
            fields.name_or_default(),
            fields.category_or_default().display_name(),
            format_currency(fields.value_or_zero()),
            expiry,
        );
    }

    let summary = dashboard.summary(now).await;
    println!(
        "每月費用 {} / 訂閱 {} / 7 天內付款 {} / 3 天內付款 {}",
        format_currency(summary.subscriptions.monthly_cost),
        summary.subscriptions.total,
        summary.subscriptions.due_soon,
        summary.subscriptions.due_very_soon,
    );
    println!(
        "食品總值 {} / 食品 {} / 7 天內到期 {} / 30 天內到期 {}",
        format_currency(summary.food.total_value),
        summary.food.total,
        summary.food.expiring_soon,
        summary.food.expiring_this_month,
    );

    Ok(())
}
