//! Settings Repository
//!
//! Passthrough storage for the presentation-only UI preferences blob.

use shared::models::UiSettings;

use super::RepoResult;
use crate::store::{BackOfficeStore, Bucket, SETTINGS_KEY};

#[derive(Clone)]
pub struct SettingsRepository {
    store: BackOfficeStore,
}

impl SettingsRepository {
    pub fn new(store: BackOfficeStore) -> Self {
        Self { store }
    }

    /// Stored settings, or the defaults if absent or malformed
    pub fn get(&self) -> RepoResult<UiSettings> {
        Ok(self
            .store
            .get(Bucket::Settings, SETTINGS_KEY)?
            .unwrap_or_default())
    }

    pub fn put(&self, settings: &UiSettings) -> RepoResult<()> {
        Ok(self.store.put(Bucket::Settings, SETTINGS_KEY, settings)?)
    }
}
