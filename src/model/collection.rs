use super::{FoodItemFields, Record, SubscriptionFields};
use super::{default_food_items, default_subscriptions, Fields};

/// A named collection of records in the local store
pub trait Collection {
    /// Key the collection is stored under
    const KEY: &'static str;
    /// Content type queried when seeding from the content API
    const CONTENT_TYPE: &'static str;

    type Fields: Fields;

    /// Built-in dataset used when the content API has nothing to offer
    fn defaults() -> Vec<Record<Self::Fields>>;
}

/// Recurring subscription payments
#[derive(Debug)]
pub struct Subscriptions;

impl Collection for Subscriptions {
    const KEY: &'static str = "subscriptions";
    const CONTENT_TYPE: &'static str = "subscription";

    type Fields = SubscriptionFields;

    fn defaults() -> Vec<Record<SubscriptionFields>> {
        default_subscriptions()
    }
}

/// Perishable food inventory
#[derive(Debug)]
pub struct FoodItems;

impl Collection for FoodItems {
    const KEY: &'static str = "foodItems";
    const CONTENT_TYPE: &'static str = "foodItem";

    type Fields = FoodItemFields;

    fn defaults() -> Vec<Record<FoodItemFields>> {
        default_food_items()
    }
}
