//! `/pets` handlers.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use kennel_core::PetId;
use tracing::{debug, info};

use crate::dto::PetDto;
use crate::error::ApiResult;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pets", get(list_pets).post(create_pet))
        .route("/pets/{id}", get(get_pet).put(update_pet).delete(delete_pet))
}

async fn list_pets(State(state): State<AppState>) -> ApiResult<Json<Vec<PetDto>>> {
    debug!("GET /pets");
    let pets = state.store.pets().list().await?;
    Ok(Json(pets.into_iter().map(PetDto::from).collect()))
}

async fn get_pet(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<PetDto>> {
    let Path(id) = id?;
    debug!(pet_id = id, "GET /pets/:id");
    let pet = state.store.pets().get(PetId::new(id)).await?;
    Ok(Json(pet.into()))
}

async fn create_pet(
    State(state): State<AppState>,
    body: Result<Json<PetDto>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PetDto>)> {
    let Json(dto) = body?;
    debug!("POST /pets");
    let draft = dto.into_draft()?;
    let pet = state.store.pets().create(draft).await?;
    info!(pet_id = %pet.id, user_id = %pet.user_id, "Created pet via API");
    Ok((StatusCode::CREATED, Json(pet.into())))
}

async fn update_pet(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<PetDto>, JsonRejection>,
) -> ApiResult<Json<PetDto>> {
    let Path(id) = id?;
    let Json(dto) = body?;
    debug!(pet_id = id, "PUT /pets/:id");
    let draft = dto.into_draft()?;
    let pet = state.store.pets().update(PetId::new(id), draft).await?;
    info!(pet_id = id, user_id = %pet.user_id, "Updated pet via API");
    Ok(Json(pet.into()))
}

async fn delete_pet(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    debug!(pet_id = id, "DELETE /pets/:id");
    state.store.pets().delete(PetId::new(id)).await?;
    info!(pet_id = id, "Deleted pet via API");
    Ok(StatusCode::OK)
}
