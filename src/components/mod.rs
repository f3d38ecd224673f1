pub mod explorer;
pub mod verify;
pub mod world;
