//! # Kennel API
//!
//! HTTP boundary for the kennel store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kennel API Server                                │
//! │                                                                         │
//! │  Client ───► axum (8080) ───► DTO validation ───► Store               │
//! │                  │                                  │                   │
//! │                  ◄────────── ApiError / JSON ◄──────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

use kennel_store::Store;

pub use config::{ApiConfig, ConfigError, LogFormat};
pub use error::{ApiError, ApiResult, ErrorBody};
pub use routes::router;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState { store }
    }
}
