use claims::{assert_err, assert_none, assert_some};

use fengai::form::{FoodItemForm, SubscriptionForm};
use fengai::helpers::days_until_expiry;
use fengai::model::{FoodItems, Subscriptions};

use crate::helpers::{at, TestApp};

fn test_subscription_form() -> SubscriptionForm {
    SubscriptionForm {
        name: Some("Test".into()),
        url: None,
        price: Some("100".into()),
        next_payment: Some("2099-01-01".into()),
        icon: Some("🧪".into()),
    }
}

#[tokio::test]
async fn created_subscription_is_listed_with_positive_days_left() {
    let app = TestApp::spawn().await;
    let mut dashboard = app.dashboard();

    let created = dashboard
        .submit::<Subscriptions, _>(None, test_subscription_form())
        .expect("Failed to save subscription")
        .expect("Create always returns a record");

    let records = dashboard.store().list::<Subscriptions>();
    assert_eq!(vec![created.clone()], records);

    let fields = &records[0].fields.data;
    assert_eq!("Test", fields.name_or_default());
    assert_eq!(100.0, fields.price_or_zero());
    assert_eq!("🧪", fields.icon_or_default());
    assert_eq!(created.fields.created_at, created.fields.updated_at);
    assert!(days_until_expiry(fields.next_payment.unwrap()) > 0);
}

#[tokio::test]
async fn invalid_form_leaves_store_untouched() {
    let app = TestApp::spawn().await;
    let mut dashboard = app.dashboard();

    let form = SubscriptionForm {
        price: None,
        ..test_subscription_form()
    };

    assert_err!(dashboard.submit::<Subscriptions, _>(None, form));
    assert!(dashboard.store().list::<Subscriptions>().is_empty());
}

#[tokio::test]
async fn editing_form_updates_in_place() {
    let app = TestApp::spawn().await;
    app.mock_outage(1).await;
    let mut dashboard = app.dashboard();
    let seeded = dashboard.load::<FoodItems>().await.records;

    let form = FoodItemForm {
        name: Some("樂事洋芋片 (大包)".into()),
        category: Some("snacks".into()),
        expiry_date: Some("2026-03-01".into()),
        value: Some("89".into()),
    };
    let updated = dashboard
        .submit::<FoodItems, _>(Some(seeded[2].id()), form)
        .expect("Failed to save food item");

    let updated = assert_some!(updated);
    assert_eq!(Some(89.0), updated.fields.data.value);
    assert_some!(updated.fields.updated_at);

    let records = dashboard.store().list::<FoodItems>();
    assert_eq!(seeded[..2], records[..2]);
    assert_eq!(updated, records[2]);
}

#[tokio::test]
async fn editing_with_blank_url_clears_it() {
    let app = TestApp::spawn().await;
    let mut dashboard = app.dashboard();

    let form = SubscriptionForm {
        url: Some("https://netflix.com".into()),
        ..test_subscription_form()
    };
    let created = dashboard
        .submit::<Subscriptions, _>(None, form)
        .expect("Failed to save subscription")
        .expect("Create always returns a record");

    let form = SubscriptionForm {
        url: Some("".into()),
        ..test_subscription_form()
    };
    dashboard
        .submit::<Subscriptions, _>(Some(created.id()), form)
        .expect("Failed to save subscription");

    let records = dashboard.store().list::<Subscriptions>();
    assert_eq!(1, records.len());
    assert_eq!("", records[0].fields.data.url_or_default());
}

#[tokio::test]
async fn editing_missing_record_is_noop() {
    let app = TestApp::spawn().await;
    let mut dashboard = app.dashboard();

    let result = dashboard
        .submit::<Subscriptions, _>(Some(&"deleted-elsewhere".into()), test_subscription_form())
        .expect("Form is valid");

    assert_none!(result);
    assert!(dashboard.store().list::<Subscriptions>().is_empty());
}

#[tokio::test]
async fn removing_records() {
    let app = TestApp::spawn().await;
    app.mock_outage(1).await;
    let mut dashboard = app.dashboard();
    let seeded = dashboard.load::<Subscriptions>().await.records;

    assert!(dashboard.remove::<Subscriptions>(seeded[0].id()));
    assert!(!dashboard.remove::<Subscriptions>(seeded[0].id()));

    let remaining = dashboard.store().list::<Subscriptions>();
    assert_eq!(seeded[1..], remaining[..]);
}

#[tokio::test]
async fn summary_of_default_datasets() {
    let app = TestApp::spawn().await;
    app.mock_outage(2).await;
    let mut dashboard = app.dashboard();

    let summary = dashboard.summary(at("2025-12-30T00:00:00Z")).await;

    assert_eq!(1299.0, summary.subscriptions.monthly_cost);
    assert_eq!(3, summary.subscriptions.total);
    assert_eq!(3, summary.subscriptions.due_soon);
    assert_eq!(2, summary.subscriptions.due_very_soon);

    assert_eq!(150.0, summary.food.total_value);
    assert_eq!(3, summary.food.total);
    assert_eq!(3, summary.food.expiring_soon);
    assert_eq!(3, summary.food.expiring_this_month);
}
