//! # kennel-store: Relational Integrity Engine for Kennel
//!
//! In-memory registry of users and pets that keeps the two entities
//! consistent across independent create, update and delete calls.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kennel Data Flow                                 │
//! │                                                                         │
//! │  HTTP handler (POST /pets)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  kennel-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │   Registry   │  │   │
//! │  │   │  (store.rs)   │    │  (user, pet)  │    │              │  │   │
//! │  │   │               │    │               │    │ users, pets  │  │   │
//! │  │   │ Arc<RwLock<…>>│───►│ UserStore     │───►│ id sequences │  │   │
//! │  │   │               │    │ PetStore      │    │ pet lists    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! After every completed operation:
//! - every pet's owner exists
//! - every user's pet list is exactly the set of pets naming that user
//! - ids are unique per entity, assigned from 1 upward and never reused
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kennel_store::Store;
//!
//! let store = Store::new();
//! let alice = store.users().create(UserDraft::new("alice", "a@x.com", 30)).await?;
//! let rex = store.pets().create(PetDraft::new("Rex", alice.id)).await?;
//! store.users().delete(alice.id).await?; // Rex goes too
//! ```

pub mod error;
mod registry;
pub mod repository;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use registry::StoreStats;
pub use repository::{PetStore, UserStore};
pub use store::Store;
