//! # Repository Module
//!
//! The two entity stores, each a thin async handle over the shared registry.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                           │
//! │       │  store.users().delete(id)      store.pets().create(draft)       │
//! │       ▼                                      ▼                          │
//! │  UserStore ─────────────┐          ┌──── PetStore                       │
//! │                         ▼          ▼                                    │
//! │              Arc<RwLock<Registry>> (one lock, one consistency domain)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`UserStore`] - User CRUD and cascading delete
//! - [`PetStore`] - Pet CRUD and ownership transfer

pub mod pet;
pub mod user;

pub use pet::PetStore;
pub use user::UserStore;
