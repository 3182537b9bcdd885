pub mod animals;
pub mod health;
pub mod rooms;
