use crate::client::ContentClient;
use crate::model::Collection;
use crate::store::{RecordStore, Storage};

/// Where the records of a collection came from on load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Local data already existed; the content API was not consulted
    Existing(usize),
    /// The empty collection was seeded with this many remote entries
    Remote(usize),
    /// The content API failed or had no entries; the built-in dataset was used
    Default(usize),
    /// Seed records could not be written, so the next load seeds again
    Unsaved(usize),
}

impl SeedOutcome {
    pub fn count(&self) -> usize {
        match self {
            Self::Existing(count)
            | Self::Remote(count)
            | Self::Default(count)
            | Self::Unsaved(count) => *count,
        }
    }
}

/// Populate an empty local collection once.
///
/// The content API is queried only when the local collection is empty. Remote entries
/// are stored if there are any; otherwise, or if the request fails, the built-in
/// dataset is stored so the next load finds local data and skips the API.
#[tracing::instrument(name = "Seed local collection", skip(store, client), fields(key = C::KEY))]
pub async fn seed<C, S>(store: &mut RecordStore<S>, client: &ContentClient) -> SeedOutcome
where
    C: Collection,
    S: Storage,
{
    let existing = store.list::<C>();
    if !existing.is_empty() {
        return SeedOutcome::Existing(existing.len());
    }

    match client.get_collection::<C>().await {
        Ok(remote) if !remote.is_empty() => {
            if !store.save::<C>(&remote) {
                tracing::warn!("Remote {} could not be stored locally", C::KEY);
                return SeedOutcome::Unsaved(remote.len());
            }
            tracing::info!("Seeded {} with {} remote entries", C::KEY, remote.len());
            SeedOutcome::Remote(remote.len())
        }
        result => {
            if let Err(e) = result {
                tracing::warn!("Falling back to default {}: {}", C::KEY, e);
            }
            let defaults = C::defaults();
            if !store.save::<C>(&defaults) {
                tracing::warn!("Default {} could not be stored locally", C::KEY);
                return SeedOutcome::Unsaved(defaults.len());
            }
            tracing::info!("Seeded {} with {} default records", C::KEY, defaults.len());
            SeedOutcome::Default(defaults.len())
        }
    }
}
