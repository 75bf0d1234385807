//! Owner-keyed profile storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::Profile;

/// Persistence seam for parsed profiles. One profile per owner.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Stores the profile, replacing any previous one for the same owner.
    async fn save(&self, profile: Profile) -> Result<(), AppError>;

    async fn get(&self, user_id: Uuid) -> Result<Option<Profile>, AppError>;
}

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, Profile>>,
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn save(&self, profile: Profile) -> Result<(), AppError> {
        self.profiles.write().await.insert(profile.user_id, profile);
        Ok(())
    }

    async fn get(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::ProfileFields;

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = InMemoryProfileStore::default();
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_previous_profile() {
        let store = InMemoryProfileStore::default();
        let user_id = Uuid::new_v4();

        let first = Profile::new(user_id, ProfileFields::default());
        let second = Profile::new(
            user_id,
            ProfileFields {
                summary: Some("updated".to_string()),
                ..Default::default()
            },
        );
        store.save(first).await.unwrap();
        store.save(second.clone()).await.unwrap();

        assert_eq!(store.get(user_id).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_profiles_are_isolated_per_owner() {
        let store = InMemoryProfileStore::default();
        let alice = Profile::new(Uuid::new_v4(), ProfileFields::default());
        let bob = Profile::new(Uuid::new_v4(), ProfileFields::default());
        store.save(alice.clone()).await.unwrap();
        store.save(bob.clone()).await.unwrap();

        assert_eq!(store.get(alice.user_id).await.unwrap().unwrap().id, alice.id);
        assert_eq!(store.get(bob.user_id).await.unwrap().unwrap().id, bob.id);
    }
}
