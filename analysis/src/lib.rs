pub mod duels;
pub mod feed;
pub mod game;
