//! Scoring engine: converts a single dart throw into a state transition.
//!
//! `process_throw` is a pure, synchronous function over an in-memory
//! `GameState` snapshot. It performs no I/O and never suspends; persistence
//! and per-game serialization are the caller's concern. Every failure path
//! returns before the first mutation, so a rejected throw leaves the game
//! untouched.

use time::OffsetDateTime;

use crate::domain::state::{GameState, GameStatus, Throw, THROWS_PER_TURN};
use crate::errors::domain::{DomainError, ValidationKind};

/// Dartboard legality predicate over a (points, multiplier) pair.
///
/// The whole rule set is one match table: miss must be a plain 1x,
/// segments 1-20 take any multiplier, the bull cannot be tripled,
/// everything else is not a physical dartboard outcome.
pub fn is_legal_dart(points: i16, multiplier: i16) -> bool {
    match (points, multiplier) {
        (0, 1) => true,
        (1..=20, 1..=3) => true,
        (25, 1 | 2) => true,
        _ => false,
    }
}

/// Process a single dart throw for the player whose turn it is.
///
/// Failure modes, checked in this order with the game untouched on any of
/// them: the match already finished, the caller is not the current turn
/// holder, or the dart value is not a legal dartboard outcome.
///
/// On success the game is mutated in place (score update, bust revert,
/// checkout, set/match progression, turn advancement) and the resulting
/// `Throw` record is returned for the caller to persist.
pub fn process_throw(
    game: &mut GameState,
    user_id: i64,
    points: i16,
    multiplier: i16,
) -> Result<Throw, DomainError> {
    if game.status == GameStatus::Finished {
        return Err(DomainError::validation(
            ValidationKind::GameFinished,
            "game is already finished",
        ));
    }

    let idx = game.current_turn.player_index as usize;
    if game.players[idx].user_id != user_id {
        return Err(DomainError::validation(
            ValidationKind::NotPlayersTurn,
            format!("user {user_id} is not the current turn holder"),
        ));
    }

    if !is_legal_dart(points, multiplier) {
        return Err(DomainError::validation(
            ValidationKind::InvalidThrow,
            format!("({points} x{multiplier}) is not a legal dart"),
        ));
    }

    let real = (points * multiplier) as u16;
    // Observed before this throw is folded in; needed for the bust revert.
    let turn_points_before = game.current_turn.current_turn_points;
    let score_before = game.players[idx].current_points;

    game.current_turn.throw_number += 1;
    game.current_turn.current_turn_points += real;

    let remaining = score_before as i32 - real as i32;
    let double_out = game.settings.double_out;

    let mut throw = Throw {
        game_id: game.id,
        user_id,
        points: points as u8,
        multiplier: multiplier as u8,
        valid: true,
        score_after: score_before,
        created_at: OffsetDateTime::now_utc(),
    };

    // Outcome classification: overshoot always busts; with double-out a
    // remainder of 1 is unfinishable and a finish without a double busts.
    let is_bust = remaining < 0
        || (remaining == 1 && double_out)
        || (remaining == 0 && double_out && multiplier != 2);

    if remaining == 0 && !is_bust {
        // Checkout: the leg is won. Win handling owns any turn advancement.
        game.players[idx].current_points = 0;
        throw.score_after = 0;
        handle_set_win(game, idx);
        return Ok(throw);
    }

    if is_bust {
        // Revert to the score at the start of the turn, not merely the score
        // before this throw. Earlier valid throws this turn were applied
        // optimistically; adding back everything folded into the turn so far
        // recovers the turn's opening score exactly.
        let turn_start_score = score_before + turn_points_before;
        game.players[idx].current_points = turn_start_score;
        throw.valid = false;
        throw.score_after = turn_start_score;
        game.current_turn.current_turn_points = 0;
        advance_turn(game);
    } else {
        game.players[idx].current_points = remaining as u16;
        throw.score_after = remaining as u16;
        if game.current_turn.throw_number >= THROWS_PER_TURN {
            advance_turn(game);
        }
    }

    Ok(throw)
}

/// Set/match progression after a checkout.
///
/// The winner's tally increases by exactly one. If that reaches the majority
/// of `best_of_sets` the match ends on the spot; otherwise every player is
/// reset for a fresh leg and the seat after the set winner leads it.
fn handle_set_win(game: &mut GameState, winner_idx: usize) {
    let total_points = game.settings.total_points;
    let sets_needed = game.settings.sets_needed();

    let winner = &mut game.players[winner_idx];
    winner.sets_won += 1;

    if winner.sets_won >= sets_needed {
        game.status = GameStatus::Finished;
        game.winner_id = Some(winner.user_id);
    } else {
        for player in &mut game.players {
            player.current_points = total_points;
        }
        advance_turn(game);
    }
}

/// Advance to the next player in turn order.
///
/// The only place `player_index` is mutated: on bust, on 3rd-throw
/// completion, and as part of set progression.
fn advance_turn(game: &mut GameState) {
    game.current_turn.throw_number = 0;
    game.current_turn.current_turn_points = 0;
    game.current_turn.player_index =
        (game.current_turn.player_index + 1) % game.players.len() as u8;
}
