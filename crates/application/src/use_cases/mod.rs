pub mod animals;
pub mod idempotency;
pub mod rooms;

pub use animals::{
    AnimalFavoritesUseCase, CreateAnimalUseCase, DeleteAnimalUseCase, GetAnimalUseCase,
    MoveAnimalUseCase, UpdateAnimalUseCase,
};
pub use idempotency::PurgeExpiredKeysUseCase;
pub use rooms::{
    CreateRoomUseCase, DeleteRoomUseCase, FavoriteRoomCountsUseCase, GetRoomUseCase,
    ListAnimalsInRoomUseCase, UpdateRoomUseCase,
};
