use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post, put},
    Router,
};
use corral_domain::{PageRequest, Room};

use crate::{
    dto::{
        AnimalResponse, CreateRoomRequest, FavoriteRoomCountResponse, PageResponse, RoomResponse,
        UpdateRoomRequest,
    },
    error::ApiError,
    extract::{etag, idempotency_key, if_match},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/rooms", post(create_room))
        // Registered before the {id} routes so "favorites" is not taken as an id.
        .route("/api/v1/rooms/favorites", get(favorite_room_counts))
        .route("/api/v1/rooms/{id}", get(get_room))
        .route("/api/v1/rooms/{id}", put(update_room))
        .route("/api/v1/rooms/{id}", delete(delete_room))
        .route("/api/v1/rooms/{id}/animals", get(list_animals))
        .route("/api/v1/rooms/{id}/animals/{animal_id}", post(place_animal))
        .route(
            "/api/v1/rooms/{id}/animals/{animal_id}",
            delete(remove_animal),
        )
}

fn room_response(status: StatusCode, room: Room) -> Response {
    let version = room.version;
    let mut response = (status, Json(RoomResponse::from(room))).into_response();
    response.headers_mut().insert(header::ETAG, etag(version));
    response
}

async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateRoomRequest>,
) -> Result<Response, ApiError> {
    let key = idempotency_key(&headers)?;
    let room = state.create_room.execute(req.title, key).await?;
    Ok(room_response(StatusCode::CREATED, room))
}

async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let room = state.get_room.execute(&id).await?;
    Ok(room_response(StatusCode::OK, room))
}

async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Response, ApiError> {
    let room = state
        .update_room
        .execute(&id, req.title, if_match(&headers))
        .await?;
    Ok(room_response(StatusCode::OK, room))
}

async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    state.delete_room.execute(&id, if_match(&headers)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_animals(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(page): Query<PageRequest>,
) -> Result<Json<PageResponse<AnimalResponse>>, ApiError> {
    let page = state.list_animals_in_room.execute(&id, page).await?;
    Ok(Json(page.into()))
}

async fn place_animal(
    State(state): State<AppState>,
    Path((id, animal_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    state
        .move_animal
        .assign(&animal_id, &id, if_match(&headers))
        .await?;
    Ok(StatusCode::OK)
}

async fn remove_animal(
    State(state): State<AppState>,
    Path((id, animal_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    state
        .move_animal
        .remove(&animal_id, &id, if_match(&headers))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn favorite_room_counts(
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteRoomCountResponse>>, ApiError> {
    let counts = state.favorite_room_counts.execute().await?;
    Ok(Json(counts.into_iter().map(Into::into).collect()))
}
