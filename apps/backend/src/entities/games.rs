use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Match lifecycle, stored as text so it reads the same on every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum GameStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "FINISHED")]
    Finished,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub status: GameStatus,
    #[sea_orm(column_name = "total_points", column_type = "SmallInteger")]
    pub total_points: i16,
    #[sea_orm(column_name = "best_of_sets", column_type = "SmallInteger")]
    pub best_of_sets: i16,
    #[sea_orm(column_name = "double_out")]
    pub double_out: bool,
    #[sea_orm(column_name = "winner_id")]
    pub winner_id: Option<i64>,
    #[sea_orm(column_name = "current_player_index", column_type = "SmallInteger")]
    pub current_player_index: i16,
    #[sea_orm(column_name = "current_throw_number", column_type = "SmallInteger")]
    pub current_throw_number: i16,
    #[sea_orm(column_name = "current_turn_points", column_type = "SmallInteger")]
    pub current_turn_points: i16,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::WinnerId",
        to = "super::users::Column::Id"
    )]
    Winner,
    #[sea_orm(has_many = "super::game_players::Entity")]
    GamePlayers,
    #[sea_orm(has_many = "super::throws::Entity")]
    Throws,
}

impl Related<super::game_players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePlayers.def()
    }
}

impl Related<super::throws::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Throws.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
