use fengai::domain::FoodCategory;
use fengai::model::{Collection, FoodItems, Subscriptions};
use fengai::seed::SeedOutcome;

use crate::helpers::TestApp;

fn remote_food() -> serde_json::Value {
    serde_json::json!([
        {
            "sys": { "id": "5KsDBWseXY6QegucYAoacS", "type": "Entry", "revision": 2 },
            "fields": { "name": "燕麥奶", "category": "beverages", "expiryDate": "2026-04-01", "value": 89 }
        }
    ])
}

#[tokio::test]
async fn first_load_seeds_from_content_api_and_persists() {
    let app = TestApp::spawn().await;
    app.mock_entries("foodItem", remote_food(), 1).await;

    let loaded = app.dashboard().load::<FoodItems>().await;

    assert_eq!(SeedOutcome::Remote(1), loaded.outcome);
    assert_eq!("5KsDBWseXY6QegucYAoacS", loaded.records[0].id().as_ref());
    assert_eq!(
        Some(FoodCategory::Beverages),
        loaded.records[0].fields.data.category
    );
    assert!(app.data_dir.path().join("foodItems.json").exists());
}

#[tokio::test]
async fn later_loads_use_local_data_only() {
    let app = TestApp::spawn().await;
    app.mock_entries("foodItem", remote_food(), 1).await;

    app.dashboard().load::<FoodItems>().await;
    // A fresh dashboard over the same data directory, as on the next start
    let reloaded = app.dashboard().load::<FoodItems>().await;

    assert_eq!(SeedOutcome::Existing(1), reloaded.outcome);
}

#[tokio::test]
async fn outage_seeds_default_datasets_once() {
    let app = TestApp::spawn().await;
    app.mock_outage(2).await;

    let mut dashboard = app.dashboard();
    let subscriptions = dashboard.load::<Subscriptions>().await;
    let food = dashboard.load::<FoodItems>().await;

    assert_eq!(SeedOutcome::Default(3), subscriptions.outcome);
    assert_eq!(Subscriptions::defaults(), subscriptions.records);
    assert_eq!(SeedOutcome::Default(3), food.outcome);
    assert_eq!(FoodItems::defaults(), food.records);

    // The outage is not retried once defaults are stored
    let again = app.dashboard().load::<Subscriptions>().await;
    assert_eq!(SeedOutcome::Existing(3), again.outcome);
}

#[tokio::test]
async fn empty_content_api_seeds_defaults() {
    let app = TestApp::spawn().await;
    app.mock_entries("subscription", serde_json::json!([]), 1).await;

    let loaded = app.dashboard().load::<Subscriptions>().await;

    assert_eq!(SeedOutcome::Default(3), loaded.outcome);
    assert_eq!("default-1", loaded.records[0].id().as_ref());
}

#[tokio::test]
async fn corrupt_local_data_is_reseeded() {
    let app = TestApp::spawn().await;
    app.mock_outage(1).await;
    std::fs::write(app.data_dir.path().join("subscriptions.json"), "{oops")
        .expect("Failed to write corrupt data");

    let loaded = app.dashboard().load::<Subscriptions>().await;

    assert_eq!(SeedOutcome::Default(3), loaded.outcome);
}
