use sea_orm::DatabaseConnection;

use crate::services::game_locks::GameLockRegistry;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Per-game locks serializing throw submissions
    pub game_locks: GameLockRegistry,
}

impl AppState {
    /// Create a new AppState with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db: Some(db),
            game_locks: GameLockRegistry::new(),
        }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn new_without_db() -> Self {
        Self {
            db: None,
            game_locks: GameLockRegistry::new(),
        }
    }

    /// Borrow the database connection if one is configured
    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
