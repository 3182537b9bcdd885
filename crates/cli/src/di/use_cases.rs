use super::Repositories;
use corral_api::AppState;
use corral_application::use_cases::{
    AnimalFavoritesUseCase, CreateAnimalUseCase, CreateRoomUseCase, DeleteAnimalUseCase,
    DeleteRoomUseCase, FavoriteRoomCountsUseCase, GetAnimalUseCase, GetRoomUseCase,
    ListAnimalsInRoomUseCase, MoveAnimalUseCase, UpdateAnimalUseCase, UpdateRoomUseCase,
};
use std::sync::Arc;

pub fn build_app_state(repos: &Repositories) -> AppState {
    AppState {
        create_animal: Arc::new(CreateAnimalUseCase::new(
            repos.animals.clone(),
            repos.idempotency.clone(),
        )),
        get_animal: Arc::new(GetAnimalUseCase::new(repos.animals.clone())),
        update_animal: Arc::new(UpdateAnimalUseCase::new(repos.animals.clone())),
        delete_animal: Arc::new(DeleteAnimalUseCase::new(repos.animals.clone())),
        move_animal: Arc::new(MoveAnimalUseCase::new(
            repos.animals.clone(),
            repos.rooms.clone(),
        )),
        animal_favorites: Arc::new(AnimalFavoritesUseCase::new(
            repos.animals.clone(),
            repos.rooms.clone(),
        )),
        create_room: Arc::new(CreateRoomUseCase::new(
            repos.rooms.clone(),
            repos.idempotency.clone(),
        )),
        get_room: Arc::new(GetRoomUseCase::new(repos.rooms.clone())),
        update_room: Arc::new(UpdateRoomUseCase::new(repos.rooms.clone())),
        delete_room: Arc::new(DeleteRoomUseCase::new(repos.rooms.clone())),
        list_animals_in_room: Arc::new(ListAnimalsInRoomUseCase::new(
            repos.rooms.clone(),
            repos.queries.clone(),
            repos.breaker.clone(),
        )),
        favorite_room_counts: Arc::new(FavoriteRoomCountsUseCase::new(
            repos.queries.clone(),
            repos.breaker.clone(),
        )),
        cache: repos.cache.clone(),
        breaker: repos.breaker.clone(),
    }
}
