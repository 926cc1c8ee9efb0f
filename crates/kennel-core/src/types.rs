//! # Domain Types
//!
//! Entities and identity types for users and their pets.
//!
//! ## Relationship
//! ```text
//! ┌─────────────────────┐          ┌─────────────────────┐
//! │        User         │ 1      * │         Pet         │
//! │  ─────────────────  │◄─────────│  ─────────────────  │
//! │  id (UserId)        │  user_id │  id (PetId)         │
//! │  name, email, age   │          │  name               │
//! │  pets: Vec<Pet>     │          │  user_id (FK)       │
//! └─────────────────────┘          └─────────────────────┘
//! ```
//!
//! A `User` value read from the store always carries the full, current list
//! of its pets. A `Pet` only knows its owner's id.
//!
//! Drafts (`UserDraft`, `PetDraft`) are candidates handed to the store for
//! create and update. The store ignores any id they carry except to detect
//! collisions on create.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Identity
// =============================================================================

/// Store-assigned identifier of a user. Never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct UserId(#[ts(type = "number")] u64);

impl UserId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        UserId(raw)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        UserId(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store-assigned identifier of a pet. Never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct PetId(#[ts(type = "number")] u64);

impl PetId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        PetId(raw)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PetId {
    fn from(raw: u64) -> Self {
        PetId(raw)
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Pet
// =============================================================================

/// A pet owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    /// Owning user. Always refers to a user that exists in the store.
    pub user_id: UserId,
}

// =============================================================================
// User
// =============================================================================

/// A user together with the pets they currently own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: u8,
    /// Owned pets in ownership order (oldest assignment first).
    pub pets: Vec<Pet>,
}

impl User {
    /// Returns true if `pet` is in this user's pet list.
    pub fn owns(&self, pet: PetId) -> bool {
        self.pets.iter().any(|p| p.id == pet)
    }

    /// Ids of the owned pets, in list order.
    pub fn pet_ids(&self) -> Vec<PetId> {
        self.pets.iter().map(|p| p.id).collect()
    }
}

// =============================================================================
// Drafts
// =============================================================================

/// Candidate user for create and update.
///
/// `pets` is only meaningful on update, where it lists the pets the caller
/// believes the user owns. Create always starts with an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub age: u8,
    pub pets: Vec<PetId>,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u8) -> Self {
        UserDraft {
            id: None,
            name: name.into(),
            email: email.into(),
            age,
            pets: Vec::new(),
        }
    }

    /// Sets an explicit id (checked for collisions on create).
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_pets(mut self, pets: Vec<PetId>) -> Self {
        self.pets = pets;
        self
    }
}

/// Candidate pet for create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetDraft {
    pub id: Option<PetId>,
    pub name: String,
    pub user_id: UserId,
}

impl PetDraft {
    pub fn new(name: impl Into<String>, user_id: UserId) -> Self {
        PetDraft {
            id: None,
            name: name.into(),
            user_id,
        }
    }

    /// Sets an explicit id (checked for collisions on create).
    pub fn with_id(mut self, id: PetId) -> Self {
        self.id = Some(id);
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: PetId = serde_json::from_str("42").unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_id_ordering_follows_raw_value() {
        assert!(UserId::new(1) < UserId::new(2));
        assert!(PetId::new(10) > PetId::new(9));
    }

    #[test]
    fn test_user_owns() {
        let user = User {
            id: UserId::new(1),
            name: "alice".to_string(),
            email: "a@x.com".to_string(),
            age: 30,
            pets: vec![Pet {
                id: PetId::new(3),
                name: "Rex".to_string(),
                user_id: UserId::new(1),
            }],
        };

        assert!(user.owns(PetId::new(3)));
        assert!(!user.owns(PetId::new(4)));
        assert_eq!(user.pet_ids(), vec![PetId::new(3)]);
    }

    #[test]
    fn test_pet_serializes_owner_as_camel_case() {
        let pet = Pet {
            id: PetId::new(2),
            name: "Tom".to_string(),
            user_id: UserId::new(9),
        };
        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["userId"], 9);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_draft_builders() {
        let draft = UserDraft::new("bob", "b@x.com", 40)
            .with_id(UserId::new(5))
            .with_pets(vec![PetId::new(1)]);
        assert_eq!(draft.id, Some(UserId::new(5)));
        assert_eq!(draft.pets, vec![PetId::new(1)]);

        let pet = PetDraft::new("Rex", UserId::new(5));
        assert_eq!(pet.id, None);
        assert_eq!(pet.user_id, UserId::new(5));
    }
}
