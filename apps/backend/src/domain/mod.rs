//! Domain layer: pure darts match logic, no I/O.

pub mod engine;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests_engine;
#[cfg(test)]
mod tests_props_engine;
#[cfg(test)]
mod tests_stats;

// Re-exports for ergonomics
pub use engine::{is_legal_dart, process_throw};
pub use state::{GamePlayer, GameSettings, GameState, GameStatus, Throw, TurnStatus};
pub use stats::reconstruct_statistics;
