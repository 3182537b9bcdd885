use corral_application::use_cases::{
    AnimalFavoritesUseCase, CreateAnimalUseCase, CreateRoomUseCase, DeleteAnimalUseCase,
    DeleteRoomUseCase, FavoriteRoomCountsUseCase, GetAnimalUseCase, GetRoomUseCase,
    ListAnimalsInRoomUseCase, MoveAnimalUseCase, UpdateAnimalUseCase, UpdateRoomUseCase,
};
use corral_application::{CircuitBreaker, TieredCache};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_animal: Arc<CreateAnimalUseCase>,
    pub get_animal: Arc<GetAnimalUseCase>,
    pub update_animal: Arc<UpdateAnimalUseCase>,
    pub delete_animal: Arc<DeleteAnimalUseCase>,
    pub move_animal: Arc<MoveAnimalUseCase>,
    pub animal_favorites: Arc<AnimalFavoritesUseCase>,
    pub create_room: Arc<CreateRoomUseCase>,
    pub get_room: Arc<GetRoomUseCase>,
    pub update_room: Arc<UpdateRoomUseCase>,
    pub delete_room: Arc<DeleteRoomUseCase>,
    pub list_animals_in_room: Arc<ListAnimalsInRoomUseCase>,
    pub favorite_room_counts: Arc<FavoriteRoomCountsUseCase>,
    pub cache: Arc<TieredCache>,
    pub breaker: Arc<CircuitBreaker>,
}
