//! User management and career statistics.

use serde::Serialize;

use crate::adapters::{games_sea, players_sea};
use crate::db::{require_db, txn::with_txn};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::errors::ErrorCode;
use crate::repos::{throws as throws_repo, users as users_repo};
use crate::state::app_state::AppState;

/// Lifetime statistics for one user, aggregated over finished games only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserCareerStats {
    pub user_id: i64,
    pub name: String,
    pub total_games: u64,
    pub wins: u64,
    pub total_throws: u32,
    pub total_points: u32,
    pub average_3_dart: f64,
}

const MAX_NAME_CHARS: usize = 100;

/// Trim and length-check a username. Length is counted in characters,
/// not bytes, so multibyte names are not cut short.
fn validate_name(name: &str) -> Result<&str, AppError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("name must be between 1 and {MAX_NAME_CHARS} characters"),
        ));
    }
    Ok(name)
}

/// User domain service.
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create_user(
        &self,
        state: &AppState,
        name: &str,
    ) -> Result<users_repo::User, AppError> {
        let name = validate_name(name)?.to_string();
        with_txn(state, |txn| {
            Box::pin(async move {
                // Friendly pre-check; the unique index is the real guarantee
                // and races surface as the same conflict via the DbErr
                // mapping.
                if users_repo::find_by_name(txn, &name).await?.is_some() {
                    return Err(DomainError::conflict(
                        ConflictKind::DuplicateUsername,
                        format!("Username '{name}' already taken"),
                    )
                    .into());
                }
                Ok(users_repo::create(txn, &name).await?)
            })
        })
        .await
    }

    pub async fn get_user(
        &self,
        state: &AppState,
        user_id: i64,
    ) -> Result<users_repo::User, AppError> {
        let db = require_db(state)?;
        Ok(users_repo::require_user(db, user_id).await?)
    }

    pub async fn list_users(&self, state: &AppState) -> Result<Vec<users_repo::User>, AppError> {
        let db = require_db(state)?;
        Ok(users_repo::list(db).await?)
    }

    pub async fn delete_user(&self, state: &AppState, user_id: i64) -> Result<(), AppError> {
        with_txn(state, |txn| {
            Box::pin(async move { Ok(users_repo::delete(txn, user_id).await?) })
        })
        .await
    }

    /// Career aggregates across finished games. Busts count as thrown darts
    /// worth zero points, same as in per-game statistics.
    pub async fn career_stats(
        &self,
        state: &AppState,
        user_id: i64,
    ) -> Result<UserCareerStats, AppError> {
        let db = require_db(state)?;

        let user = users_repo::require_user(db, user_id).await?;
        let total_games = players_sea::count_finished_games_for_user(db, user_id).await?;
        let wins = games_sea::count_wins_for_user(db, user_id).await?;
        let throws = throws_repo::list_user_throws_in_finished_games(db, user_id).await?;

        let total_throws = throws.len() as u32;
        let total_points: u32 = throws
            .iter()
            .filter(|t| t.valid)
            .map(|t| t.points as u32 * t.multiplier as u32)
            .sum();
        let average_3_dart = if total_throws == 0 {
            0.0
        } else {
            (total_points as f64 / total_throws as f64) * 3.0
        };

        Ok(UserCareerStats {
            user_id: user.id,
            name: user.name,
            total_games,
            wins,
            total_throws,
            total_points,
            average_3_dart,
        })
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}
