use chrono::{DateTime, Utc};

use crate::client::ContentClient;
use crate::domain::RecordId;
use crate::error::{Error, Result};
use crate::model::{Collection, FoodItems, Record, Subscriptions};
use crate::seed::{seed, SeedOutcome};
use crate::stats::{FoodStats, SubscriptionStats};
use crate::store::{RecordStore, Storage};

/// A collection as loaded for display
#[derive(Debug)]
pub struct Loaded<F> {
    pub outcome: SeedOutcome,
    pub records: Vec<Record<F>>,
}

/// Figures shown on the dashboard stat cards
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub subscriptions: SubscriptionStats,
    pub food: FoodStats,
}

/// The dashboard data layer: the local store plus the content API used to seed it
#[derive(Debug)]
pub struct Dashboard<S> {
    store: RecordStore<S>,
    client: ContentClient,
}

impl<S: Storage> Dashboard<S> {
    pub fn new(store: RecordStore<S>, client: ContentClient) -> Self {
        Self { store, client }
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    /// Load a collection, seeding it first if the local store has nothing
    pub async fn load<C: Collection>(&mut self) -> Loaded<C::Fields> {
        let outcome = seed::<C, S>(&mut self.store, &self.client).await;
        let records = self.store.list::<C>();
        tracing::debug!("Loaded {} {} ({:?})", records.len(), C::KEY, outcome);

        Loaded { outcome, records }
    }

    /// Validate a submitted form and create a record, or update `editing` if given.
    ///
    /// Returns `Ok(None)` when `editing` names a record that no longer exists.
    #[tracing::instrument(name = "Save form", skip(self, form), fields(key = C::KEY))]
    pub fn submit<C, Form>(
        &mut self,
        editing: Option<&RecordId>,
        form: Form,
    ) -> Result<Option<Record<C::Fields>>>
    where
        C: Collection,
        C::Fields: TryFrom<Form, Error = Error>,
    {
        let fields = <C::Fields as TryFrom<Form>>::try_from(form).map_err(|e| {
            tracing::warn!("Rejected {} form: {}", C::KEY, e);
            e
        })?;

        let record = match editing {
            Some(id) => self.store.update::<C>(id, fields),
            None => Some(self.store.create::<C>(fields)),
        };
        Ok(record)
    }

    /// Delete a record; the caller is expected to have confirmed this with the user
    pub fn remove<C: Collection>(&mut self, id: &RecordId) -> bool {
        self.store.delete::<C>(id)
    }

    /// Stat card figures for both collections, seeding them if needed
    pub async fn summary(&mut self, now: DateTime<Utc>) -> Summary {
        let subscriptions = self.load::<Subscriptions>().await.records;
        let food = self.load::<FoodItems>().await.records;

        Summary {
            subscriptions: SubscriptionStats::from_records(&subscriptions, now),
            food: FoodStats::from_records(&food, now),
        }
    }
}
