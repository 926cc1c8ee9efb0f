//! # Registry
//!
//! The single consistency domain behind both stores.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Registry                                       │
//! │                                                                         │
//! │  users: BTreeMap<UserId, UserRecord>      pets: BTreeMap<PetId, Pet>    │
//! │  ┌───────────────────────────────┐        ┌─────────────────────────┐  │
//! │  │ 1 → alice, pets: [1, 3]  ─────┼───────►│ 1 → Rex    (user 1)     │  │
//! │  │ 2 → bob,   pets: [2]     ─────┼───────►│ 2 → Tom    (user 2)     │  │
//! │  └───────────────────────────────┘   └───►│ 3 → Fido   (user 1)     │  │
//! │                                           └─────────────────────────┘  │
//! │  user_seq: last assigned user id          pet_seq: last assigned pet id │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pets are canonical in `pets`. A user's `pets` list holds ids only and is
//! resolved to full values on every read. All mutating operations validate
//! every precondition first and only then touch state, so a failed call
//! leaves the registry exactly as it was.
//!
//! The operations themselves live next to the handle that exposes them:
//! user operations in `repository::user`, pet operations in
//! `repository::pet`.

use std::collections::{BTreeMap, HashSet};

use kennel_core::{Pet, PetId, User, UserId};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Id Sequence
// =============================================================================

/// Monotonic id counter. Incremented before assignment, so the first id is 1.
#[derive(Debug, Default)]
pub(crate) struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub(crate) fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    #[cfg(test)]
    pub(crate) fn last(&self) -> u64 {
        self.last
    }
}

// =============================================================================
// User Record
// =============================================================================

/// Stored form of a user: scalar fields plus the ids of owned pets.
#[derive(Debug, Clone)]
pub(crate) struct UserRecord {
    pub(crate) id: UserId,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) age: u8,
    pub(crate) pets: Vec<PetId>,
}

// =============================================================================
// Registry
// =============================================================================

#[derive(Debug, Default)]
pub(crate) struct Registry {
    pub(crate) users: BTreeMap<UserId, UserRecord>,
    pub(crate) pets: BTreeMap<PetId, Pet>,
    pub(crate) user_seq: IdSequence,
    pub(crate) pet_seq: IdSequence,
}

/// Entity counts reported by [`Registry::verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub users: usize,
    pub pets: usize,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Materializes a user record with its pets.
    pub(crate) fn resolve(&self, record: &UserRecord) -> StoreResult<User> {
        let pets = record
            .pets
            .iter()
            .map(|pet_id| {
                self.pets.get(pet_id).cloned().ok_or_else(|| {
                    StoreError::Invariant(format!(
                        "user {} lists pet {} which does not exist",
                        record.id, pet_id
                    ))
                })
            })
            .collect::<StoreResult<Vec<Pet>>>()?;

        Ok(User {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            age: record.age,
            pets,
        })
    }

    /// Checks every cross-entity invariant.
    ///
    /// ## Checks
    /// - every pet's owner exists
    /// - every user's list holds exactly the pets that name that user,
    ///   without duplicates
    /// - no id exceeds its sequence
    pub(crate) fn verify(&self) -> StoreResult<StoreStats> {
        for pet in self.pets.values() {
            let owner = self.users.get(&pet.user_id).ok_or_else(|| {
                StoreError::Invariant(format!(
                    "pet {} references missing user {}",
                    pet.id, pet.user_id
                ))
            })?;
            if !owner.pets.contains(&pet.id) {
                return Err(StoreError::Invariant(format!(
                    "pet {} is missing from the pet list of user {}",
                    pet.id, pet.user_id
                )));
            }
            if pet.id.get() > self.pet_seq.last {
                return Err(StoreError::Invariant(format!(
                    "pet {} was never assigned by the sequence",
                    pet.id
                )));
            }
        }

        for user in self.users.values() {
            let mut seen = HashSet::with_capacity(user.pets.len());
            for pet_id in &user.pets {
                if !seen.insert(*pet_id) {
                    return Err(StoreError::Invariant(format!(
                        "user {} lists pet {} twice",
                        user.id, pet_id
                    )));
                }
                match self.pets.get(pet_id) {
                    Some(pet) if pet.user_id == user.id => {}
                    Some(pet) => {
                        return Err(StoreError::Invariant(format!(
                            "user {} lists pet {} owned by user {}",
                            user.id, pet_id, pet.user_id
                        )))
                    }
                    None => {
                        return Err(StoreError::Invariant(format!(
                            "user {} lists pet {} which does not exist",
                            user.id, pet_id
                        )))
                    }
                }
            }
            if user.id.get() > self.user_seq.last {
                return Err(StoreError::Invariant(format!(
                    "user {} was never assigned by the sequence",
                    user.id
                )));
            }
        }

        Ok(StoreStats {
            users: self.users.len(),
            pets: self.pets.len(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
