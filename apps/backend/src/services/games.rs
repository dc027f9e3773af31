//! Match lifecycle: creation, lookup and throw submission.

use std::collections::HashSet;

use crate::db::{require_db, txn::with_txn};
use crate::domain::engine;
use crate::domain::state::{GameSettings, GameState, GameStatus, Throw};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::{games as games_repo, throws as throws_repo, users as users_repo};
use crate::state::app_state::AppState;

const ALLOWED_TOTALS: [u16; 2] = [301, 501];
const ALLOWED_BEST_OF: [u8; 3] = [1, 3, 5];
const MAX_PLAYERS: usize = 4;

fn validate_settings(settings: &GameSettings, user_ids: &[i64]) -> Result<(), AppError> {
    if !ALLOWED_TOTALS.contains(&settings.total_points) {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "total_points must be 301 or 501",
        ));
    }
    if !ALLOWED_BEST_OF.contains(&settings.best_of_sets) {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "best_of_sets must be 1, 3 or 5",
        ));
    }
    if user_ids.is_empty() || user_ids.len() > MAX_PLAYERS {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("a game takes between 1 and {MAX_PLAYERS} players"),
        ));
    }
    let distinct: HashSet<i64> = user_ids.iter().copied().collect();
    if distinct.len() != user_ids.len() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "player list contains duplicate users",
        ));
    }
    Ok(())
}

/// Game domain service.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Create a new match. Every listed user must exist; players are seated
    /// in the order given and the first one throws first.
    pub async fn create_game(
        &self,
        state: &AppState,
        settings: GameSettings,
        user_ids: Vec<i64>,
    ) -> Result<GameState, AppError> {
        validate_settings(&settings, &user_ids)?;

        with_txn(state, |txn| {
            Box::pin(async move {
                for user_id in &user_ids {
                    users_repo::require_user(txn, *user_id).await?;
                }
                Ok(games_repo::create_game(txn, &settings, &user_ids).await?)
            })
        })
        .await
    }

    pub async fn get_game(&self, state: &AppState, game_id: i64) -> Result<GameState, AppError> {
        let db = require_db(state)?;
        Ok(games_repo::require_game(db, game_id).await?)
    }

    /// Submit one dart throw.
    ///
    /// The per-game lock is held across the whole load-engine-persist cycle
    /// so concurrent submissions for the same game serialize; the
    /// transaction makes the throw row and the state update land together.
    pub async fn submit_throw(
        &self,
        state: &AppState,
        game_id: i64,
        user_id: i64,
        points: i16,
        multiplier: i16,
    ) -> Result<(Throw, GameState), AppError> {
        let lock = state.game_locks.lock_for(game_id);
        let _guard = lock.lock().await;

        with_txn(state, |txn| {
            Box::pin(async move {
                let mut game = games_repo::require_game(txn, game_id).await?;
                let was_pending = game.status == GameStatus::Pending;

                let throw = engine::process_throw(&mut game, user_id, points, multiplier)?;

                // The first accepted throw activates a pending match. The
                // engine only ever moves status forward to Finished, so this
                // cannot overwrite a finish.
                if was_pending && game.status == GameStatus::Pending {
                    game.status = GameStatus::Active;
                }

                let throw = throws_repo::insert_throw(txn, &throw).await?;
                games_repo::update_game(txn, &game).await?;

                Ok((throw, game))
            })
        })
        .await
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
