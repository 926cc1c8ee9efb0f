//! # kennel-core: Domain Model for Kennel
//!
//! This crate holds the entities, identity types and field rules shared by
//! the store and the HTTP service. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kennel Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    kennel-api (axum)                            │   │
//! │  │    /users ──► UserDto ──► validate ──► UserDraft                │   │
//! │  │    /pets  ──► PetDto  ──► validate ──► PetDraft                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kennel-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   error   │  │ validation│                  │   │
//! │  │   │ User, Pet │  │ CoreError │  │   rules   │                  │   │
//! │  │   │ drafts    │  │ ErrorKind │  │   checks  │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              kennel-store (relational integrity)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities (User, Pet), ids and candidate drafts
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level rules enforced at the boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use kennel_core::validation::{validate_age, validate_email};
//! use kennel_core::UserDraft;
//!
//! validate_email("alice@example.com").unwrap();
//! let age = validate_age(30).unwrap();
//!
//! let draft = UserDraft::new("alice", "alice@example.com", age);
//! assert!(draft.pets.is_empty());
//! ```

pub mod error;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use types::*;

// =============================================================================
// Field Limits
// =============================================================================

/// Maximum length of a user or pet name, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length of an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

/// Youngest accepted user age.
pub const MIN_AGE: i64 = 1;

/// Oldest accepted user age.
pub const MAX_AGE: i64 = 100;
