//! `/users` handlers.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use kennel_core::UserId;
use tracing::{debug, info};

use crate::dto::UserDto;
use crate::error::ApiResult;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    debug!("GET /users");
    let users = state.store.users().list().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<UserDto>> {
    let Path(id) = id?;
    debug!(user_id = id, "GET /users/:id");
    let user = state.store.users().get(UserId::new(id)).await?;
    Ok(Json(user.into()))
}

async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserDto>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let Json(dto) = body?;
    debug!("POST /users");
    let draft = dto.into_draft()?;
    let user = state.store.users().create(draft).await?;
    info!(user_id = %user.id, "Created user via API");
    Ok((StatusCode::CREATED, Json(user.into())))
}

async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<UserDto>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let Path(id) = id?;
    let Json(dto) = body?;
    debug!(user_id = id, "PUT /users/:id");
    let draft = dto.into_draft()?;
    let user = state.store.users().update(UserId::new(id), draft).await?;
    info!(user_id = id, "Updated user via API");
    Ok(Json(user.into()))
}

async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    debug!(user_id = id, "DELETE /users/:id");
    let removed = state.store.users().delete(UserId::new(id)).await?;
    info!(user_id = id, pets_removed = removed, "Deleted user via API");
    Ok(StatusCode::OK)
}
