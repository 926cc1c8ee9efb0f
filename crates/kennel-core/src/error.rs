//! # Error Types
//!
//! Domain-specific error types for kennel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kennel-core errors (this file)                                        │
//! │  ├── CoreError        - Referential and identity violations            │
//! │  └── ValidationError  - Field validation failures                      │
//! │                                                                         │
//! │  kennel-store errors (separate crate)                                  │
//! │  └── StoreError       - Wraps CoreError for store callers              │
//! │                                                                         │
//! │  kennel-api errors (in app)                                            │
//! │  └── ApiError         - What HTTP clients see (status + JSON body)     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Client    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every message names the offending entity and id so that the HTTP layer
//! can pass it through verbatim as the error detail.

use thiserror::Error;

use crate::types::{PetId, UserId};

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse classification used to pick an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Requested id is absent, or a referenced owner is absent.
    NotFound,
    /// An explicit id collides with an existing entity.
    Conflict,
    /// Input is structurally invalid (bad field, bad cross-reference).
    InvalidArgument,
}

// =============================================================================
// Core Error
// =============================================================================

/// Referential integrity and identity errors raised by the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("User with id {0} not found")]
    UserNotFound(UserId),

    #[error("Pet with id {0} not found")]
    PetNotFound(PetId),

    /// A pet names an owner that does not exist.
    ///
    /// ## When This Occurs
    /// - Creating a pet for a user id that was never assigned
    /// - Moving a pet to a user that has been deleted
    #[error("Pet cannot be assigned to user with id {0}, because the user does not exist")]
    OwnerNotFound(UserId),

    #[error("User with id {0} already exists")]
    DuplicateUser(UserId),

    #[error("Pet with id {0} already exists")]
    DuplicatePet(PetId),

    /// A user update lists a pet that the user does not own.
    #[error("Pet with id {pet} does not belong to user with id {user}")]
    ForeignPet { pet: PetId, user: UserId },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Classifies this error for status mapping.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::UserNotFound(_) | CoreError::PetNotFound(_) | CoreError::OwnerNotFound(_) => {
                ErrorKind::NotFound
            }
            CoreError::DuplicateUser(_) | CoreError::DuplicatePet(_) => ErrorKind::Conflict,
            CoreError::ForeignPet { .. } | CoreError::Validation(_) => ErrorKind::InvalidArgument,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the HTTP boundary before the store is called. The store itself
/// assumes every field is already valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
