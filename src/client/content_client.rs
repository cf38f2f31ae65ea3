use std::time::Duration;

use reqwest::{Client, StatusCode};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use secrecy::Secret;

use url::Url;

use crate::domain::RecordId;
use crate::model::{Collection, Entry, FoodItemFields, FoodItems, Record, Stamped};
use crate::model::{SubscriptionFields, Subscriptions};

/// Errors returned by the content API
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Content API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Content API responded with {0}")]
    Status(StatusCode),
    #[error("Failed to decode content API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid content API url: {0}")]
    Url(#[from] url::ParseError),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Filters and paging for an entries query
#[derive(Debug, Default, Clone)]
pub struct EntryQuery {
    limit: Option<u32>,
    skip: Option<u32>,
    order: Option<String>,
    fields: Vec<(String, String)>,
}

impl EntryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of entries to return
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of entries to skip, for paging
    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Sort order, e.g. `fields.name` or `-sys.createdAt`
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Only entries whose field `name` equals `value`
    pub fn field_eq(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((format!("fields.{}", name), value.into()));
        self
    }

    fn params(&self, content_type: &str) -> Vec<(String, String)> {
        let mut params = vec![("content_type".to_string(), content_type.to_string())];
        if let Some(limit) = self.limit {
            params.push(("limit".into(), limit.to_string()));
        }
        if let Some(skip) = self.skip {
            params.push(("skip".into(), skip.to_string()));
        }
        if let Some(order) = &self.order {
            params.push(("order".into(), order.clone()));
        }
        params.extend(self.fields.iter().cloned());
        params
    }
}

#[derive(Debug, Deserialize)]
struct EntryCollection<F> {
    items: Vec<Entry<F>>,
}

/// Read-only client for the hosted content delivery API
#[derive(Debug)]
pub struct ContentClient {
    client: Client,

    api_entries_url: Url,
    api_access_token: Secret<String>,
}

impl ContentClient {
    pub fn new(
        api_base_url: Url,
        space_id: &str,
        environment: &str,
        api_access_token: Secret<String>,
        api_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(api_timeout).build()?;

        let api_entries_url = api_base_url
            .join(&format!("spaces/{}/environments/{}/", space_id, environment))?
            .join("entries")?;

        Ok(Self {
            client,
            api_entries_url,
            api_access_token,
        })
    }

    /// Fetch the entries of a content type matching `query`
    #[tracing::instrument(name = "Fetch entries from content API", skip(self))]
    pub async fn get_entries<F: DeserializeOwned>(
        &self,
        content_type: &str,
        query: &EntryQuery,
    ) -> GatewayResult<Vec<Entry<F>>> {
        let body = self
            .get(self.api_entries_url.clone(), &query.params(content_type))
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch {} entries: {}", content_type, e);
                e
            })?;

        let collection: EntryCollection<F> = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Failed to decode {} entries: {}", content_type, e);
            e
        })?;
        Ok(collection.items)
    }

    /// Fetch a single entry by id
    #[tracing::instrument(name = "Fetch entry from content API", skip(self))]
    pub async fn get_entry<F: DeserializeOwned>(&self, id: &RecordId) -> GatewayResult<Entry<F>> {
        let mut url = self.api_entries_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(id.as_ref());

        let body = self.get(url, &[]).await.map_err(|e| {
            tracing::error!("Failed to fetch entry {}: {}", id, e);
            e
        })?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Every remote entry of a collection's content type, shaped as local records
    pub async fn get_collection<C: Collection>(&self) -> GatewayResult<Vec<Record<C::Fields>>> {
        self.get_entries::<Stamped<C::Fields>>(C::CONTENT_TYPE, &EntryQuery::new())
            .await
    }

    pub async fn get_subscriptions(&self) -> GatewayResult<Vec<Record<SubscriptionFields>>> {
        self.get_collection::<Subscriptions>().await
    }

    pub async fn get_food_items(&self) -> GatewayResult<Vec<Record<FoodItemFields>>> {
        self.get_collection::<FoodItems>().await
    }

    async fn get(&self, url: Url, params: &[(String, String)]) -> GatewayResult<Vec<u8>> {
        use secrecy::ExposeSecret;

        let res = self
            .client
            .get(url)
            .bearer_auth(self.api_access_token.expose_secret())
            .query(params)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }
        Ok(res.bytes().await?.to_vec())
    }
}
