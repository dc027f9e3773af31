//! DTOs for games_sea adapter.

use crate::entities::games::GameStatus;

/// DTO for creating a new game row.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub total_points: i16,
    pub best_of_sets: i16,
    pub double_out: bool,
}

impl GameCreate {
    pub fn new(total_points: i16, best_of_sets: i16, double_out: bool) -> Self {
        Self {
            total_points,
            best_of_sets,
            double_out,
        }
    }
}

/// DTO for updating the mutable cursor of a game after a throw.
///
/// Rule parameters (total_points, best_of_sets, double_out) are immutable
/// once the game exists and are deliberately absent here.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: i64,
    pub status: Option<GameStatus>,
    pub winner_id: Option<i64>,
    pub current_player_index: Option<i16>,
    pub current_throw_number: Option<i16>,
    pub current_turn_points: Option<i16>,
}

impl GameUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            status: None,
            winner_id: None,
            current_player_index: None,
            current_throw_number: None,
            current_turn_points: None,
        }
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_winner(mut self, user_id: i64) -> Self {
        self.winner_id = Some(user_id);
        self
    }

    pub fn with_cursor(
        mut self,
        player_index: i16,
        throw_number: i16,
        turn_points: i16,
    ) -> Self {
        self.current_player_index = Some(player_index);
        self.current_throw_number = Some(throw_number);
        self.current_turn_points = Some(turn_points);
        self
    }
}
