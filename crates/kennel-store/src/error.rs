//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (kennel-core)     StoreError::Invariant (this crate)        │
//! │       │                            │                                    │
//! │       └──────────┬─────────────────┘                                    │
//! │                  ▼                                                      │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in kennel-api) ← status code + JSON body                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kennel_core::{CoreError, ErrorKind};
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A caller-visible domain rule was violated (missing id, bad owner, ...).
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// The registry found itself inconsistent.
    ///
    /// ## When This Occurs
    /// Never, unless there is a bug in this crate. Surfaced instead of
    /// panicking so the HTTP layer can answer 500.
    #[error("Store invariant violated: {0}")]
    Invariant(String),
}

impl StoreError {
    /// Domain classification, or `None` for internal failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            StoreError::Domain(err) => Some(err.kind()),
            StoreError::Invariant(_) => None,
        }
    }

    /// Returns the wrapped domain error, if any.
    pub fn as_domain(&self) -> Option<&CoreError> {
        match self {
            StoreError::Domain(err) => Some(err),
            StoreError::Invariant(_) => None,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
