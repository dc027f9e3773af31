//! Per-game write locks.
//!
//! A throw submission loads the game, runs the engine and persists the
//! result as separate steps; two submissions interleaving those steps on
//! the same game would each persist a state computed from a stale load.
//! The registry hands out one async mutex per game id so submissions for
//! the same game run strictly one after another while different games
//! proceed in parallel.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct GameLockRegistry {
    locks: Arc<DashMap<i64, Arc<Mutex<()>>>>,
}

impl GameLockRegistry {
    pub fn new() -> Self {
        Self {
            locks: Arc::new(DashMap::new()),
        }
    }

    /// The lock for a game, created on first use. Callers hold the guard
    /// across the whole load-mutate-persist cycle.
    pub fn lock_for(&self, game_id: i64) -> Arc<Mutex<()>> {
        self.locks
            .entry(game_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
