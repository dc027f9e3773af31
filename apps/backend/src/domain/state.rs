use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Darts thrown per turn before the next player is up.
pub const THROWS_PER_TURN: u8 = 3;

/// Overall match lifecycle.
///
/// A game is created `Pending`, flips to `Active` when the first throw is
/// accepted (caller bookkeeping, the engine does not gate on it), and becomes
/// `Finished` exactly once, inside the engine, when a player reaches the
/// required number of set wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Pending,
    Active,
    Finished,
}

/// Match settings, immutable once the game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Starting score per leg: 301 or 501.
    pub total_points: u16,
    /// Best-of-N sets: 1, 3 or 5.
    pub best_of_sets: u8,
    /// Require the checkout throw to be a double.
    pub double_out: bool,
}

impl GameSettings {
    /// Majority of `best_of_sets` needed to win the match.
    pub fn sets_needed(&self) -> u8 {
        (self.best_of_sets + 1) / 2
    }
}

/// One seat in a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlayer {
    pub user_id: i64,
    /// Turn-order index, 0-based, unique per match.
    pub turn_order: u8,
    pub sets_won: u8,
    /// Points remaining in the active leg.
    pub current_points: u16,
}

/// Turn cursor: whose turn it is and how far into it they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStatus {
    /// Index into the player sequence, always `< player count`.
    pub player_index: u8,
    /// Darts thrown so far this turn: 0, 1 or 2 at entry to a throw.
    pub throw_number: u8,
    /// Real points folded into this turn so far; reset every turn.
    pub current_turn_points: u16,
}

impl TurnStatus {
    pub fn start() -> Self {
        Self {
            player_index: 0,
            throw_number: 0,
            current_turn_points: 0,
        }
    }
}

/// Entire match container, sufficient for pure engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub id: i64,
    pub status: GameStatus,
    pub settings: GameSettings,
    /// Seats in turn order; exclusively owned by the game.
    pub players: Vec<GamePlayer>,
    pub current_turn: TurnStatus,
    /// Set only when `status == Finished`, and never again after that.
    pub winner_id: Option<i64>,
}

impl GameState {
    /// Fresh match: every player starts the first leg at `total_points`,
    /// the turn cursor at seat 0.
    pub fn new(id: i64, settings: GameSettings, user_ids: &[i64]) -> Self {
        let players = user_ids
            .iter()
            .enumerate()
            .map(|(order, &user_id)| GamePlayer {
                user_id,
                turn_order: order as u8,
                sets_won: 0,
                current_points: settings.total_points,
            })
            .collect();
        Self {
            id,
            status: GameStatus::Pending,
            settings,
            players,
            current_turn: TurnStatus::start(),
            winner_id: None,
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.current_turn.player_index as usize]
    }
}

/// One dart throw, append-only once recorded.
///
/// `score_after` is the thrower's remaining score immediately after the throw
/// was applied, or the reverted start-of-turn score when `valid == false`
/// (bust). `created_at` is used only for chronological ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Throw {
    pub game_id: i64,
    pub user_id: i64,
    /// Segment hit: 0 (miss), 1..=20, or 25 (bull).
    pub points: u8,
    /// 1, 2 or 3.
    pub multiplier: u8,
    /// False when the throw busted.
    pub valid: bool,
    pub score_after: u16,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
