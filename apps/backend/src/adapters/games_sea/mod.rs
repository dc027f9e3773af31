//! SeaORM adapter for the games table - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, GameUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = games::ActiveModel {
        id: NotSet,
        status: Set(games::GameStatus::Pending),
        total_points: Set(dto.total_points),
        best_of_sets: Set(dto.best_of_sets),
        double_out: Set(dto.double_out),
        winner_id: Set(None),
        current_player_index: Set(0),
        current_throw_number: Set(0),
        current_turn_points: Set(0),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    game.insert(conn).await
}

/// Number of finished games this user won.
pub async fn count_wins_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::WinnerId.eq(user_id))
        .filter(games::Column::Status.eq(games::GameStatus::Finished))
        .count(conn)
        .await
}

/// Apply a cursor/status update and return the updated row.
pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    let mut game = games::ActiveModel {
        id: Set(dto.id),
        ..Default::default()
    };

    if let Some(status) = dto.status {
        game.status = Set(status);
    }
    if let Some(winner_id) = dto.winner_id {
        game.winner_id = Set(Some(winner_id));
    }
    if let Some(player_index) = dto.current_player_index {
        game.current_player_index = Set(player_index);
    }
    if let Some(throw_number) = dto.current_throw_number {
        game.current_throw_number = Set(throw_number);
    }
    if let Some(turn_points) = dto.current_turn_points {
        game.current_turn_points = Set(turn_points);
    }

    game.update(conn).await
}
