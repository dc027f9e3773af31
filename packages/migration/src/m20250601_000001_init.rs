use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    Status,
    TotalPoints,
    BestOfSets,
    DoubleOut,
    WinnerId,
    CurrentPlayerIndex,
    CurrentThrowNumber,
    CurrentTurnPoints,
    CreatedAt,
}

#[derive(Iden)]
enum GamePlayers {
    Table,
    GameId,
    UserId,
    TurnOrder,
    SetsWon,
    CurrentPoints,
}

#[derive(Iden)]
enum Throws {
    Table,
    Id,
    GameId,
    UserId,
    Points,
    Multiplier,
    Valid,
    ScoreAfter,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_users_name")
                    .table(Users::Table)
                    .col(Users::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // games
        //
        // Status is stored as text (PENDING / ACTIVE / FINISHED) so the same
        // schema works on Postgres and SQLite. The turn cursor lives inline on
        // the game row; per-player tallies live in game_players.
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Games::Status).string().not_null())
                    .col(ColumnDef::new(Games::TotalPoints).small_integer().not_null())
                    .col(ColumnDef::new(Games::BestOfSets).small_integer().not_null())
                    .col(
                        ColumnDef::new(Games::DoubleOut)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Games::WinnerId).big_integer().null())
                    .col(
                        ColumnDef::new(Games::CurrentPlayerIndex)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::CurrentThrowNumber)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::CurrentTurnPoints)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_winner_id")
                            .from(Games::Table, Games::WinnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_games_status")
                    .table(Games::Table)
                    .col(Games::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_games_winner")
                    .table(Games::Table)
                    .col(Games::WinnerId)
                    .to_owned(),
            )
            .await?;

        // game_players (composite primary key: one row per seat per game)
        manager
            .create_table(
                Table::create()
                    .table(GamePlayers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GamePlayers::GameId).big_integer().not_null())
                    .col(ColumnDef::new(GamePlayers::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(GamePlayers::TurnOrder)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GamePlayers::SetsWon)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GamePlayers::CurrentPoints)
                            .small_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(GamePlayers::GameId)
                            .col(GamePlayers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_players_game_id")
                            .from(GamePlayers::Table, GamePlayers::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_players_user_id")
                            .from(GamePlayers::Table, GamePlayers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_players_user")
                    .table(GamePlayers::Table)
                    .col(GamePlayers::UserId)
                    .to_owned(),
            )
            .await?;

        // throws (append-only history; ordering is by created_at, id as tiebreak)
        manager
            .create_table(
                Table::create()
                    .table(Throws::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Throws::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Throws::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Throws::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Throws::Points).small_integer().not_null())
                    .col(ColumnDef::new(Throws::Multiplier).small_integer().not_null())
                    .col(
                        ColumnDef::new(Throws::Valid)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Throws::ScoreAfter).small_integer().not_null())
                    .col(
                        ColumnDef::new(Throws::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_throws_game_id")
                            .from(Throws::Table, Throws::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_throws_user_id")
                            .from(Throws::Table, Throws::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_throws_game")
                    .table(Throws::Table)
                    .col(Throws::GameId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_throws_user")
                    .table(Throws::Table)
                    .col(Throws::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_throws_created")
                    .table(Throws::Table)
                    .col(Throws::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in dependency order
        manager
            .drop_table(Table::drop().table(Throws::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GamePlayers::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
