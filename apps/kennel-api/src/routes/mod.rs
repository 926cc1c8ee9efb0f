//! # Routes
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET    /users          list            GET    /pets          list      │
//! │  POST   /users          create (201)    POST   /pets          create    │
//! │  GET    /users/{id}     read            GET    /pets/{id}     read      │
//! │  PUT    /users/{id}     update          PUT    /pets/{id}     update    │
//! │  DELETE /users/{id}     delete+cascade  DELETE /pets/{id}     delete    │
//! │                                                                         │
//! │  GET    /health         integrity check with entity counts              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod pets;
mod users;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::AppState;

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub users: usize,
    pub pets: usize,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(users::routes())
        .merge(pets::routes())
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check endpoint. Fails with 500 if the store is inconsistent.
async fn health_handler(State(state): State<AppState>) -> ApiResult<Json<HealthStatus>> {
    let stats = state.store.verify().await?;
    Ok(Json(HealthStatus {
        status: "OK".to_string(),
        users: stats.users,
        pets: stats.pets,
    }))
}
