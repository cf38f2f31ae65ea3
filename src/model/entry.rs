use chrono::{DateTime, Utc};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::RecordId;

/// Entry metadata.
/// Content API entries carry more system fields than this; they are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    pub id: RecordId,
}

/// A content record in the `{ sys, fields }` shape shared by the content API and
/// the local record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<F> {
    pub sys: Sys,
    pub fields: F,
}

impl<F> Entry<F> {
    pub fn new(id: impl Into<RecordId>, fields: F) -> Self {
        Self {
            sys: Sys { id: id.into() },
            fields,
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.sys.id
    }
}

/// Record fields with the local bookkeeping timestamps alongside them.
///
/// Timestamps are absent on seeded records until they are first edited locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stamped<F> {
    #[serde(flatten)]
    pub data: F,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl<F> Stamped<F> {
    /// Fields without any timestamps, as delivered by the content API
    pub fn unstamped(data: F) -> Self {
        Self {
            data,
            created_at: None,
            updated_at: None,
        }
    }

    /// Fields for a record created at `now`
    pub fn created(data: F, now: DateTime<Utc>) -> Self {
        Self {
            data,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// A stored record
pub type Record<F> = Entry<Stamped<F>>;

/// Typed field set of a record.
pub trait Fields: Clone + Serialize + DeserializeOwned {
    /// Overwrite every field that is present in `patch`, keeping the rest
    fn merge(&mut self, patch: Self);
}
