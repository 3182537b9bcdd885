use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post, put},
    Router,
};
use corral_domain::Animal;
use tracing::debug;

use crate::{
    dto::{AnimalResponse, CreateAnimalRequest, FavoriteRoomsRequest, UpdateAnimalRequest},
    error::ApiError,
    extract::{etag, idempotency_key, if_match},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/animals", post(create_animal))
        .route("/api/v1/animals/{id}", get(get_animal))
        .route("/api/v1/animals/{id}", put(update_animal))
        .route("/api/v1/animals/{id}", delete(delete_animal))
        .route("/api/v1/animals/{id}/move/{room_id}", post(move_animal))
        .route("/api/v1/animals/{id}/favorites", post(assign_favorites))
        .route("/api/v1/animals/{id}/favorites", delete(unassign_favorites))
}

/// Serializes an animal with its version exposed as a strong ETag.
fn animal_response(status: StatusCode, animal: Animal) -> Response {
    let version = animal.version;
    let mut response = (status, Json(AnimalResponse::from(animal))).into_response();
    response.headers_mut().insert(header::ETAG, etag(version));
    response
}

async fn create_animal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateAnimalRequest>,
) -> Result<Response, ApiError> {
    let key = idempotency_key(&headers)?;
    let animal = state
        .create_animal
        .execute(req.title, req.located, key)
        .await?;

    debug!(animal_id = %animal.id, "Animal created via API");
    Ok(animal_response(StatusCode::CREATED, animal))
}

async fn get_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let animal = state.get_animal.execute(&id).await?;
    Ok(animal_response(StatusCode::OK, animal))
}

async fn update_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<UpdateAnimalRequest>,
) -> Result<Response, ApiError> {
    let animal = state
        .update_animal
        .execute(&id, req.title, req.located, if_match(&headers))
        .await?;
    Ok(animal_response(StatusCode::OK, animal))
}

async fn delete_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    state.delete_animal.execute(&id, if_match(&headers)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn move_animal(
    State(state): State<AppState>,
    Path((id, room_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let animal = state
        .move_animal
        .assign(&id, &room_id, if_match(&headers))
        .await?;
    Ok(animal_response(StatusCode::OK, animal))
}

async fn assign_favorites(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<FavoriteRoomsRequest>,
) -> Result<Response, ApiError> {
    let animal = state
        .animal_favorites
        .assign(&id, req.room_ids, if_match(&headers))
        .await?;
    Ok(animal_response(StatusCode::OK, animal))
}

async fn unassign_favorites(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<FavoriteRoomsRequest>,
) -> Result<Response, ApiError> {
    let animal = state
        .animal_favorites
        .unassign(&id, req.room_ids, if_match(&headers))
        .await?;
    Ok(animal_response(StatusCode::OK, animal))
}
