//! # Pet Store
//!
//! CRUD over pets. Every mutation also maintains the owning user's pet list.
//!
//! ## Ownership Transfer
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  pets().update(1, PetDraft { name: "Rex", user_id: 2 })                 │
//! │                                                                         │
//! │  Before                              After                              │
//! │  ──────                              ─────                              │
//! │  user 1: pets [1]                    user 1: pets []                    │
//! │  user 2: pets []                     user 2: pets [1]                   │
//! │  pet 1:  user_id 1                   pet 1:  user_id 2                  │
//! │                                                                         │
//! │  Same owner: removed then appended, so the pet appears exactly once.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use kennel_core::{CoreError, Pet, PetDraft, PetId, UserId};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::registry::Registry;

/// Handle for pet operations.
#[derive(Debug, Clone)]
pub struct PetStore {
    registry: Arc<RwLock<Registry>>,
}

impl PetStore {
    pub(crate) fn new(registry: Arc<RwLock<Registry>>) -> Self {
        PetStore { registry }
    }

    /// Snapshot of all pets, ordered by id.
    pub async fn list(&self) -> StoreResult<Vec<Pet>> {
        let pets = self.registry.read().await.list_pets();
        debug!(count = pets.len(), "Listed pets");
        Ok(pets)
    }

    pub async fn get(&self, id: PetId) -> StoreResult<Pet> {
        debug!(pet_id = %id, "Fetching pet");
        self.registry.read().await.get_pet(id)
    }

    /// Creates a pet and appends it to its owner's pet list.
    ///
    /// ## Errors
    /// - `OwnerNotFound` if `draft.user_id` does not exist
    /// - `DuplicatePet` if the draft carries an id that is already taken
    pub async fn create(&self, draft: PetDraft) -> StoreResult<Pet> {
        let pet = self.registry.write().await.create_pet(draft)?;
        info!(pet_id = %pet.id, user_id = %pet.user_id, "Pet created");
        Ok(pet)
    }

    /// Renames a pet and/or moves it to another owner.
    ///
    /// ## Errors
    /// - `PetNotFound` if `id` is absent
    /// - `OwnerNotFound` if the new owner does not exist
    pub async fn update(&self, id: PetId, draft: PetDraft) -> StoreResult<Pet> {
        let pet = self.registry.write().await.update_pet(id, draft)?;
        info!(pet_id = %id, user_id = %pet.user_id, "Pet updated");
        Ok(pet)
    }

    /// Deletes a pet and detaches it from its owner.
    pub async fn delete(&self, id: PetId) -> StoreResult<()> {
        let pet = self.registry.write().await.delete_pet(id)?;
        info!(pet_id = %id, user_id = %pet.user_id, "Pet deleted");
        Ok(())
    }

    /// Deletes every pet owned by `user_id`. Returns how many were removed.
    ///
    /// The user itself is left in place; an unknown user simply owns nothing.
    pub async fn delete_all_for_user(&self, user_id: UserId) -> StoreResult<usize> {
        let removed = self.registry.write().await.delete_pets_of(user_id)?;
        info!(user_id = %user_id, removed, "Pets deleted for user");
        Ok(removed)
    }
}

// =============================================================================
// Registry Operations
// =============================================================================

impl Registry {
    pub(crate) fn list_pets(&self) -> Vec<Pet> {
        self.pets.values().cloned().collect()
    }

    pub(crate) fn get_pet(&self, id: PetId) -> StoreResult<Pet> {
        self.pets
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::PetNotFound(id).into())
    }

    pub(crate) fn create_pet(&mut self, draft: PetDraft) -> StoreResult<Pet> {
        let owner = self
            .users
            .get_mut(&draft.user_id)
            .ok_or(CoreError::OwnerNotFound(draft.user_id))?;

        if let Some(requested) = draft.id {
            if self.pets.contains_key(&requested) {
                return Err(CoreError::DuplicatePet(requested).into());
            }
        }

        let id = PetId::new(self.pet_seq.next());
        let pet = Pet {
            id,
            name: draft.name,
            user_id: draft.user_id,
        };
        owner.pets.push(id);
        self.pets.insert(id, pet.clone());
        Ok(pet)
    }

    pub(crate) fn update_pet(&mut self, id: PetId, draft: PetDraft) -> StoreResult<Pet> {
        let old_owner = self
            .pets
            .get(&id)
            .ok_or(CoreError::PetNotFound(id))?
            .user_id;
        if !self.users.contains_key(&draft.user_id) {
            return Err(CoreError::OwnerNotFound(draft.user_id).into());
        }

        let updated = Pet {
            id,
            name: draft.name,
            user_id: draft.user_id,
        };
        self.pets.insert(id, updated.clone());
        self.detach(old_owner, id);
        if let Some(owner) = self.users.get_mut(&updated.user_id) {
            owner.pets.push(id);
        }
        Ok(updated)
    }

    pub(crate) fn delete_pet(&mut self, id: PetId) -> StoreResult<Pet> {
        let pet = self.pets.remove(&id).ok_or(CoreError::PetNotFound(id))?;
        self.detach(pet.user_id, id);
        Ok(pet)
    }

    /// Removes all pets owned by `user_id` through the normal delete path.
    pub(crate) fn delete_pets_of(&mut self, user_id: UserId) -> StoreResult<usize> {
        // Snapshot first; never delete while walking the live map.
        let owned: Vec<PetId> = self
            .pets
            .values()
            .filter(|pet| pet.user_id == user_id)
            .map(|pet| pet.id)
            .collect();

        for pet_id in &owned {
            self.delete_pet(*pet_id)?;
        }
        Ok(owned.len())
    }

    fn detach(&mut self, owner: UserId, pet: PetId) {
        if let Some(record) = self.users.get_mut(&owner) {
            record.pets.retain(|id| *id != pet);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
