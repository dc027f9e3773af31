//! SeaORM adapter for the game_players table - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{game_players, games, users};

pub async fn insert_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    turn_order: i16,
    current_points: i16,
) -> Result<game_players::Model, sea_orm::DbErr> {
    let player = game_players::ActiveModel {
        game_id: Set(game_id),
        user_id: Set(user_id),
        turn_order: Set(turn_order),
        sets_won: Set(0),
        current_points: Set(current_points),
    };
    player.insert(conn).await
}

/// All players of a game in seating order.
pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<game_players::Model>, sea_orm::DbErr> {
    game_players::Entity::find()
        .filter(game_players::Column::GameId.eq(game_id))
        .order_by_asc(game_players::Column::TurnOrder)
        .all(conn)
        .await
}

/// Players of a game in seating order, each paired with its user row.
pub async fn find_with_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<(game_players::Model, Option<users::Model>)>, sea_orm::DbErr> {
    game_players::Entity::find()
        .filter(game_players::Column::GameId.eq(game_id))
        .order_by_asc(game_players::Column::TurnOrder)
        .find_also_related(users::Entity)
        .all(conn)
        .await
}

/// Overwrite a player's mutable columns (sets won, countdown score).
pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    sets_won: i16,
    current_points: i16,
) -> Result<game_players::Model, sea_orm::DbErr> {
    let player = game_players::ActiveModel {
        game_id: Set(game_id),
        user_id: Set(user_id),
        sets_won: Set(sets_won),
        current_points: Set(current_points),
        ..Default::default()
    };
    player.update(conn).await
}

/// Number of finished games this user took part in.
pub async fn count_finished_games_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    game_players::Entity::find()
        .filter(game_players::Column::UserId.eq(user_id))
        .find_also_related(games::Entity)
        .filter(games::Column::Status.eq(games::GameStatus::Finished))
        .count(conn)
        .await
}
