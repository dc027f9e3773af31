pub mod game_locks;
pub mod games;
pub mod stats;
pub mod users;
