pub mod create;
pub mod delete;
pub mod favorites;
pub mod get;
pub mod list_animals;
pub mod update;

pub use create::CreateRoomUseCase;
pub use delete::DeleteRoomUseCase;
pub use favorites::FavoriteRoomCountsUseCase;
pub use get::GetRoomUseCase;
pub use list_animals::ListAnimalsInRoomUseCase;
pub use update::UpdateRoomUseCase;
