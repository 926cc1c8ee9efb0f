//! # Wire Types
//!
//! JSON shapes accepted and returned by the HTTP routes.
//!
//! ```text
//! UserDto                               PetDto
//! {                                     {
//!   "id": 1,                              "id": 1,
//!   "name": "alice",                      "name": "Rex",
//!   "email": "a@x.com",                   "userId": 1
//!   "age": 30,                          }
//!   "pets": [ PetDto, ... ]
//! }
//! ```
//!
//! Every field is optional at the serde level so that a missing field turns
//! into a `ValidationError::Required` instead of a deserialization failure.

use kennel_core::validation::{validate_age, validate_email, validate_name};
use kennel_core::{Pet, PetDraft, PetId, User, UserDraft, UserId, ValidationError};
use serde::{Deserialize, Serialize};

// =============================================================================
// Pet DTO
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDto {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub user_id: Option<u64>,
}

impl PetDto {
    /// Validates fields and builds a draft for the pet store.
    pub fn into_draft(self) -> Result<PetDraft, ValidationError> {
        let name = self.name.ok_or_else(|| ValidationError::required("name"))?;
        validate_name("name", &name)?;

        let user_id = self
            .user_id
            .ok_or_else(|| ValidationError::required("userId"))?;

        let draft = PetDraft::new(name, UserId::new(user_id));
        Ok(match self.id {
            Some(id) => draft.with_id(PetId::new(id)),
            None => draft,
        })
    }
}

impl From<Pet> for PetDto {
    fn from(pet: Pet) -> Self {
        PetDto {
            id: Some(pet.id.get()),
            name: Some(pet.name),
            user_id: Some(pet.user_id.get()),
        }
    }
}

// =============================================================================
// User DTO
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
    pub pets: Option<Vec<PetDto>>,
}

impl UserDto {
    /// Validates fields and builds a draft for the user store.
    ///
    /// Only the ids of the listed pets are kept; the store decides whether
    /// the user actually owns them.
    pub fn into_draft(self) -> Result<UserDraft, ValidationError> {
        let name = self.name.ok_or_else(|| ValidationError::required("name"))?;
        validate_name("name", &name)?;

        let email = self.email.ok_or_else(|| ValidationError::required("email"))?;
        validate_email(&email)?;

        let age = validate_age(self.age.ok_or_else(|| ValidationError::required("age"))?)?;

        let pets = self
            .pets
            .ok_or_else(|| ValidationError::required("pets"))?
            .into_iter()
            .map(|pet| {
                pet.id
                    .map(PetId::new)
                    .ok_or_else(|| ValidationError::required("pets.id"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let draft = UserDraft::new(name, email, age).with_pets(pets);
        Ok(match self.id {
            Some(id) => draft.with_id(UserId::new(id)),
            None => draft,
        })
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: Some(user.id.get()),
            name: Some(user.name),
            email: Some(user.email),
            age: Some(i64::from(user.age)),
            pets: Some(user.pets.into_iter().map(PetDto::from).collect()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
