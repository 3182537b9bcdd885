//! Corral Domain Layer
pub mod animal;
pub mod config;
pub mod document;
pub mod errors;
pub mod page;
pub mod room;

pub use animal::Animal;
pub use config::{CliOverrides, Config, ConfigError};
pub use document::{validate_if_match, Document};
pub use errors::DomainError;
pub use page::{Page, PageRequest, SortOrder};
pub use room::{FavoriteRoomCount, Room};
