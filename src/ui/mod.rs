pub mod messages;
pub mod tiles;
