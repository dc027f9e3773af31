//! Per-game statistics assembly.

use std::collections::HashMap;

use serde::Serialize;

use crate::adapters::players_sea;
use crate::db::require_db;
use crate::domain::stats::{reconstruct_statistics, OverallStats, SetStats};
use crate::error::AppError;
use crate::repos::{games as games_repo, throws as throws_repo};
use crate::state::app_state::AppState;

/// Statistics for one game as served over HTTP: the reconstructed figures
/// decorated with user names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameStatisticsResponse {
    pub game_id: i64,
    pub total_sets_played: usize,
    pub players: Vec<PlayerStatisticsResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStatisticsResponse {
    pub user_id: i64,
    pub user_name: String,
    pub overall: OverallStats,
    pub sets: Vec<SetStats>,
}

/// Statistics domain service.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Reconstruct per-set statistics for a game from its throw history.
    ///
    /// Read-only: works on any game in any status and does not take the
    /// per-game lock, so a long statistics read never delays play.
    pub async fn game_statistics(
        &self,
        state: &AppState,
        game_id: i64,
    ) -> Result<GameStatisticsResponse, AppError> {
        let db = require_db(state)?;

        let game = games_repo::require_game(db, game_id).await?;
        let throws = throws_repo::list_throws(db, game_id).await?;

        let names: HashMap<i64, String> = players_sea::find_with_users(db, game_id)
            .await?
            .into_iter()
            .filter_map(|(player, user)| user.map(|u| (player.user_id, u.name)))
            .collect();

        let stats = reconstruct_statistics(&throws, &game.settings, &game.players);

        let players = stats
            .players
            .into_iter()
            .map(|p| PlayerStatisticsResponse {
                user_id: p.user_id,
                user_name: names.get(&p.user_id).cloned().unwrap_or_default(),
                overall: p.overall,
                sets: p.sets,
            })
            .collect();

        Ok(GameStatisticsResponse {
            game_id,
            total_sets_played: stats.total_sets_played,
            players,
        })
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}
