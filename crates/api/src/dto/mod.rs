pub mod animal;
pub mod room;

pub use animal::{
    AnimalResponse, CreateAnimalRequest, FavoriteRoomsRequest, UpdateAnimalRequest,
};
pub use room::{
    CreateRoomRequest, FavoriteRoomCountResponse, PageResponse, RoomResponse, UpdateRoomRequest,
};
