// src/profile_store.rs
use crate::error::StorageError;
use crate::models::{Profile, ProfileField};
use crate::storage::{ProfileStorage, PROFILE_KEY};
use std::sync::Arc;
use tracing::{info, warn};

pub const SAVED_NOTICE: &str = "Profile saved! You can now check recommended schemes below.";

/// In-memory profile plus the port it is persisted through.
///
/// Edits only touch the in-memory copy; `submit` writes the whole profile back.
pub struct ProfileStore {
    storage: Arc<dyn ProfileStorage>,
    profile: Profile,
}

impl ProfileStore {
    /// Reads the stored profile, falling back to an empty one.
    ///
    /// A stored value that cannot be read is logged and ignored so the
    /// dashboard still starts.
    pub async fn load(storage: Arc<dyn ProfileStorage>) -> Self {
        let profile = match storage.load(PROFILE_KEY).await {
            Ok(Some(profile)) => {
                info!("👤 Loaded saved citizen profile");
                profile
            }
            Ok(None) => Profile::default(),
            Err(e) => {
                warn!("Failed to load saved profile, starting empty: {}", e);
                Profile::default()
            }
        };
        Self { storage, profile }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        self.profile.set(field, value);
    }

    /// Replaces the in-memory profile, as a full form post does.
    pub fn replace(&mut self, profile: Profile) {
        self.profile = profile;
    }

    pub async fn submit(&self) -> Result<(), StorageError> {
        self.storage.save(PROFILE_KEY, &self.profile).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[tokio::test]
    async fn save_then_reload_reproduces_fields() {
        let storage: Arc<dyn ProfileStorage> = Arc::new(MemoryStorage::new());
        let mut store = ProfileStore::load(storage.clone()).await;
        assert_eq!(store.profile(), &Profile::default());

        store.set_field(ProfileField::FullName, "Lakshmi Devi");
        store.set_field(ProfileField::Age, "42");
        store.set_field(ProfileField::Income, "Below 2.5 Lakh");
        store.set_field(ProfileField::Occupation, "Farmer");
        store.set_field(ProfileField::Disability, "No");
        store.submit().await.unwrap();

        let reloaded = ProfileStore::load(storage).await;
        assert_eq!(reloaded.profile(), store.profile());
    }

    #[tokio::test]
    async fn edits_are_not_persisted_until_submit() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ProfileStore::load(storage.clone()).await;
        store.set_field(ProfileField::Location, "Nagpur");

        assert!(storage.raw(PROFILE_KEY).await.is_none());
        store.submit().await.unwrap();
        assert!(storage.raw(PROFILE_KEY).await.unwrap().contains("Nagpur"));
    }

    #[tokio::test]
    async fn corrupt_stored_profile_starts_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.insert_raw(PROFILE_KEY, "[]").await;
        let store = ProfileStore::load(storage).await;
        assert_eq!(store.profile(), &Profile::default());
    }
}
