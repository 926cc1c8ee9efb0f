//! # User Store
//!
//! CRUD over users, with cascading delete into the pet store.
//!
//! ## Delete Cascade
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    users().delete(1)                                    │
//! │                                                                         │
//! │  write lock ──► user 1 exists? ── no ──► UserNotFound(1)               │
//! │                      │                                                  │
//! │                     yes                                                 │
//! │                      ▼                                                  │
//! │  snapshot pet ids owned by 1  [1, 3]                                   │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │  delete pet 1, delete pet 3   (normal pet delete path)                 │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │  remove user 1 ──► unlock                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use kennel_core::{CoreError, PetId, User, UserDraft, UserId};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::registry::{Registry, UserRecord};

/// Handle for user operations.
///
/// ## Usage
/// ```rust
/// use kennel_core::UserDraft;
/// use kennel_store::Store;
///
/// # async fn demo() -> kennel_store::StoreResult<()> {
/// let store = Store::new();
/// let alice = store.users().create(UserDraft::new("alice", "a@x.com", 30)).await?;
/// assert_eq!(alice.id.get(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UserStore {
    registry: Arc<RwLock<Registry>>,
}

impl UserStore {
    pub(crate) fn new(registry: Arc<RwLock<Registry>>) -> Self {
        UserStore { registry }
    }

    /// Snapshot of all users, ordered by id.
    pub async fn list(&self) -> StoreResult<Vec<User>> {
        let registry = self.registry.read().await;
        let users = registry.list_users()?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Gets a user with their current pets.
    pub async fn get(&self, id: UserId) -> StoreResult<User> {
        debug!(user_id = %id, "Fetching user");
        self.registry.read().await.get_user(id)
    }

    /// Creates a user with a fresh id and an empty pet list.
    ///
    /// ## Errors
    /// - `DuplicateUser` if the draft carries an id that is already taken
    pub async fn create(&self, draft: UserDraft) -> StoreResult<User> {
        let user = self.registry.write().await.create_user(draft)?;
        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Replaces name, email, age and pet order of an existing user.
    ///
    /// The draft's pet list may reorder the user's pets but can neither
    /// claim a pet owned by someone else nor drop an owned one; pets move
    /// between users only through the pet store.
    ///
    /// ## Errors
    /// - `UserNotFound` if `id` is absent
    /// - `ForeignPet` if the draft lists a pet the user does not own
    pub async fn update(&self, id: UserId, draft: UserDraft) -> StoreResult<User> {
        let user = self.registry.write().await.update_user(id, draft)?;
        info!(user_id = %id, pets = user.pets.len(), "User updated");
        Ok(user)
    }

    /// Deletes a user and every pet they own.
    ///
    /// Returns the number of pets removed by the cascade.
    pub async fn delete(&self, id: UserId) -> StoreResult<usize> {
        let removed = self.registry.write().await.delete_user(id)?;
        info!(user_id = %id, pets_removed = removed, "User deleted");
        Ok(removed)
    }
}

// =============================================================================
// Registry Operations
// =============================================================================

impl Registry {
    pub(crate) fn user_record(&self, id: UserId) -> Result<&UserRecord, CoreError> {
        self.users.get(&id).ok_or(CoreError::UserNotFound(id))
    }

    pub(crate) fn list_users(&self) -> StoreResult<Vec<User>> {
        self.users.values().map(|record| self.resolve(record)).collect()
    }

    pub(crate) fn get_user(&self, id: UserId) -> StoreResult<User> {
        let record = self.user_record(id)?;
        self.resolve(record)
    }

    pub(crate) fn create_user(&mut self, draft: UserDraft) -> StoreResult<User> {
        if let Some(requested) = draft.id {
            if self.users.contains_key(&requested) {
                return Err(CoreError::DuplicateUser(requested).into());
            }
        }

        let id = UserId::new(self.user_seq.next());
        let record = UserRecord {
            id,
            name: draft.name,
            email: draft.email,
            age: draft.age,
            pets: Vec::new(),
        };
        let user = self.resolve(&record)?;
        self.users.insert(id, record);
        Ok(user)
    }

    pub(crate) fn update_user(&mut self, id: UserId, draft: UserDraft) -> StoreResult<User> {
        let pets = self.reconcile_pet_list(id, &draft.pets)?;

        let record = self
            .users
            .get_mut(&id)
            .ok_or(CoreError::UserNotFound(id))?;
        record.name = draft.name;
        record.email = draft.email;
        record.age = draft.age;
        record.pets = pets;

        self.get_user(id)
    }

    pub(crate) fn delete_user(&mut self, id: UserId) -> StoreResult<usize> {
        self.user_record(id)?;

        // Pets go first so each pet delete can still find its owner.
        let removed = self.delete_pets_of(id)?;
        self.users.remove(&id);
        Ok(removed)
    }

    /// Builds the pet list for a user update.
    ///
    /// Listed pets come first in the requested order (duplicates collapsed),
    /// followed by owned pets the draft omitted, in their existing order.
    fn reconcile_pet_list(&self, id: UserId, requested: &[PetId]) -> StoreResult<Vec<PetId>> {
        let current = &self.user_record(id)?.pets;

        let mut seen = HashSet::with_capacity(current.len());
        let mut pets = Vec::with_capacity(current.len());
        for pet_id in requested {
            let owned = self
                .pets
                .get(pet_id)
                .is_some_and(|pet| pet.user_id == id);
            if !owned {
                return Err(CoreError::ForeignPet {
                    pet: *pet_id,
                    user: id,
                }
                .into());
            }
            if seen.insert(*pet_id) {
                pets.push(*pet_id);
            }
        }

        pets.extend(current.iter().copied().filter(|pet_id| !seen.contains(pet_id)));
        Ok(pets)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
