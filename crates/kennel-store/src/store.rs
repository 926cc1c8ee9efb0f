//! # Store
//!
//! The composite store handed to every collaborator.
//!
//! ## Locking
//! One `tokio::sync::RwLock` covers users, pets and both id sequences.
//! Reads share it; every mutation holds it exclusively from its first check
//! to its last write, so cross-entity operations never interleave and there
//! is no lock ordering to get wrong.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::StoreResult;
use crate::registry::{Registry, StoreStats};
use crate::repository::{PetStore, UserStore};

/// Shared in-memory store of users and pets.
///
/// Cheap to clone; all clones see the same data.
///
/// ## Example
/// ```rust,ignore
/// let store = Store::new();
/// let owner = store.users().create(UserDraft::new("alice", "a@x.com", 30)).await?;
/// let pet = store.pets().create(PetDraft::new("Rex", owner.id)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    registry: Arc<RwLock<Registry>>,
}

impl Store {
    /// Creates an empty store. Both id sequences start at 1.
    pub fn new() -> Self {
        info!("Initializing in-memory store");
        Store {
            registry: Arc::new(RwLock::new(Registry::new())),
        }
    }

    /// Returns the user store.
    pub fn users(&self) -> UserStore {
        UserStore::new(self.registry.clone())
    }

    /// Returns the pet store.
    pub fn pets(&self) -> PetStore {
        PetStore::new(self.registry.clone())
    }

    /// Checks all cross-entity invariants and returns entity counts.
    ///
    /// ## Returns
    /// * `Ok(StoreStats)` - Store is consistent
    /// * `Err(StoreError::Invariant)` - First violation found
    pub async fn verify(&self) -> StoreResult<StoreStats> {
        let result = self.registry.read().await.verify();
        if let Err(err) = &result {
            warn!(error = %err, "Store integrity check failed");
        }
        result
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kennel_core::{PetDraft, UserDraft};

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = Store::new();
        let clone = store.clone();

        let user = store
            .users()
            .create(UserDraft::new("alice", "a@x.com", 30))
            .await
            .unwrap();
        clone
            .pets()
            .create(PetDraft::new("Rex", user.id))
            .await
            .unwrap();

        let seen = store.users().get(user.id).await.unwrap();
        assert_eq!(seen.pets.len(), 1);
    }

    #[tokio::test]
    async fn test_verify_reports_counts() {
        let store = Store::new();
        let user = store
            .users()
            .create(UserDraft::new("alice", "a@x.com", 30))
            .await
            .unwrap();
        store
            .pets()
            .create(PetDraft::new("Rex", user.id))
            .await
            .unwrap();

        let stats = store.verify().await.unwrap();
        assert_eq!(stats, StoreStats { users: 1, pets: 1 });
    }
}
