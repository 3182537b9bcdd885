pub mod create;
pub mod delete;
pub mod favorites;
pub mod get;
pub mod placement;
pub mod update;

pub use create::CreateAnimalUseCase;
pub use delete::DeleteAnimalUseCase;
pub use favorites::AnimalFavoritesUseCase;
pub use get::GetAnimalUseCase;
pub use placement::MoveAnimalUseCase;
pub use update::UpdateAnimalUseCase;
