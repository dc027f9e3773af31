//! Game repository functions for domain layer.
//!
//! A game is stored across two tables: the games row carries the rule
//! parameters and the turn cursor, and game_players carries one row per
//! seat. These functions assemble and persist the in-memory
//! `domain::GameState` from and to those rows.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::games_sea as games_adapter;
use crate::adapters::players_sea as players_adapter;
use crate::domain::state::{GamePlayer, GameSettings, GameState, GameStatus, TurnStatus};
use crate::entities::game_players;
use crate::entities::games::{self, GameStatus as DbGameStatus};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

pub fn status_to_db(status: GameStatus) -> DbGameStatus {
    match status {
        GameStatus::Pending => DbGameStatus::Pending,
        GameStatus::Active => DbGameStatus::Active,
        GameStatus::Finished => DbGameStatus::Finished,
    }
}

pub fn status_from_db(status: DbGameStatus) -> GameStatus {
    match status {
        DbGameStatus::Pending => GameStatus::Pending,
        DbGameStatus::Active => GameStatus::Active,
        DbGameStatus::Finished => GameStatus::Finished,
    }
}

impl From<game_players::Model> for GamePlayer {
    fn from(model: game_players::Model) -> Self {
        Self {
            user_id: model.user_id,
            turn_order: model.turn_order as u8,
            sets_won: model.sets_won as u8,
            current_points: model.current_points as u16,
        }
    }
}

fn assemble(game: games::Model, players: Vec<game_players::Model>) -> Result<GameState, DomainError> {
    if players.is_empty() {
        return Err(DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Game {} has no players", game.id),
        ));
    }

    Ok(GameState {
        id: game.id,
        status: status_from_db(game.status),
        settings: GameSettings {
            total_points: game.total_points as u16,
            best_of_sets: game.best_of_sets as u8,
            double_out: game.double_out,
        },
        players: players.into_iter().map(GamePlayer::from).collect(),
        current_turn: TurnStatus {
            player_index: game.current_player_index as u8,
            throw_number: game.current_throw_number as u8,
            current_turn_points: game.current_turn_points as u16,
        },
        winner_id: game.winner_id,
    })
}

pub async fn find_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<GameState>, DomainError> {
    let Some(game) = games_adapter::find_by_id(conn, game_id).await? else {
        return Ok(None);
    };
    let players = players_adapter::find_by_game(conn, game_id).await?;
    Ok(Some(assemble(game, players)?))
}

/// Find game by ID or return error if not found.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<GameState, DomainError> {
    find_game(conn, game_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found")))
}

/// Insert a new game and its seats. Players are seated in the order given,
/// each starting at the full countdown total.
pub async fn create_game(
    txn: &DatabaseTransaction,
    settings: &GameSettings,
    user_ids: &[i64],
) -> Result<GameState, DomainError> {
    let game = games_adapter::create_game(
        txn,
        games_adapter::GameCreate::new(
            settings.total_points as i16,
            settings.best_of_sets as i16,
            settings.double_out,
        ),
    )
    .await?;

    let mut players = Vec::with_capacity(user_ids.len());
    for (seat, user_id) in user_ids.iter().enumerate() {
        let player = players_adapter::insert_player(
            txn,
            game.id,
            *user_id,
            seat as i16,
            settings.total_points as i16,
        )
        .await?;
        players.push(player);
    }

    assemble(game, players)
}

/// Persist the full mutable state of a game after the engine ran.
pub async fn update_game(
    txn: &DatabaseTransaction,
    state: &GameState,
) -> Result<(), DomainError> {
    let mut update = games_adapter::GameUpdate::new(state.id)
        .with_status(status_to_db(state.status))
        .with_cursor(
            state.current_turn.player_index as i16,
            state.current_turn.throw_number as i16,
            state.current_turn.current_turn_points as i16,
        );
    if let Some(winner_id) = state.winner_id {
        update = update.with_winner(winner_id);
    }
    games_adapter::update_game(txn, update).await?;

    for player in &state.players {
        players_adapter::update_player(
            txn,
            state.id,
            player.user_id,
            player.sets_won as i16,
            player.current_points as i16,
        )
        .await?;
    }

    Ok(())
}
