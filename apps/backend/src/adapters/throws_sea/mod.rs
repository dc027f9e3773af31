//! SeaORM adapter for the throws table - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{games, throws};

/// DTO for appending one throw to a game's history.
#[derive(Debug, Clone)]
pub struct ThrowInsert {
    pub game_id: i64,
    pub user_id: i64,
    pub points: i16,
    pub multiplier: i16,
    pub valid: bool,
    pub score_after: i16,
    pub created_at: time::OffsetDateTime,
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ThrowInsert,
) -> Result<throws::Model, sea_orm::DbErr> {
    let throw = throws::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        user_id: Set(dto.user_id),
        points: Set(dto.points),
        multiplier: Set(dto.multiplier),
        valid: Set(dto.valid),
        score_after: Set(dto.score_after),
        created_at: Set(dto.created_at),
    };
    throw.insert(conn).await
}

/// Full throw history of a game in chronological order.
///
/// The id tiebreak keeps ordering stable when timestamps collide.
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<throws::Model>, sea_orm::DbErr> {
    throws::Entity::find()
        .filter(throws::Column::GameId.eq(game_id))
        .order_by_asc(throws::Column::CreatedAt)
        .order_by_asc(throws::Column::Id)
        .all(conn)
        .await
}

/// A user's throws across finished games, for career statistics.
pub async fn list_by_user_in_finished_games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<throws::Model>, sea_orm::DbErr> {
    let rows = throws::Entity::find()
        .filter(throws::Column::UserId.eq(user_id))
        .find_also_related(games::Entity)
        .filter(games::Column::Status.eq(games::GameStatus::Finished))
        .order_by_asc(throws::Column::CreatedAt)
        .order_by_asc(throws::Column::Id)
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|(t, _)| t).collect())
}
