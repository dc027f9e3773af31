//! Throw repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::throws_sea as throws_adapter;
use crate::domain::state::Throw;
use crate::entities::throws;
use crate::errors::domain::DomainError;

impl From<throws::Model> for Throw {
    fn from(model: throws::Model) -> Self {
        Self {
            game_id: model.game_id,
            user_id: model.user_id,
            points: model.points as u8,
            multiplier: model.multiplier as u8,
            valid: model.valid,
            score_after: model.score_after as u16,
            created_at: model.created_at,
        }
    }
}

pub async fn insert_throw<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    throw: &Throw,
) -> Result<Throw, DomainError> {
    let model = throws_adapter::insert(
        conn,
        throws_adapter::ThrowInsert {
            game_id: throw.game_id,
            user_id: throw.user_id,
            points: throw.points as i16,
            multiplier: throw.multiplier as i16,
            valid: throw.valid,
            score_after: throw.score_after as i16,
            created_at: throw.created_at,
        },
    )
    .await?;
    Ok(Throw::from(model))
}

/// Chronological throw history of a game.
pub async fn list_throws<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Throw>, DomainError> {
    let models = throws_adapter::list_by_game(conn, game_id).await?;
    Ok(models.into_iter().map(Throw::from).collect())
}

/// A user's throws across finished games, for career statistics.
pub async fn list_user_throws_in_finished_games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Throw>, DomainError> {
    let models = throws_adapter::list_by_user_in_finished_games(conn, user_id).await?;
    Ok(models.into_iter().map(Throw::from).collect())
}
