use crate::domain::engine::{is_legal_dart, process_throw};
use crate::domain::state::{GameSettings, GameState, GameStatus};
use crate::errors::domain::{DomainError, ValidationKind};

fn settings(total_points: u16, best_of_sets: u8, double_out: bool) -> GameSettings {
    GameSettings {
        total_points,
        best_of_sets,
        double_out,
    }
}

fn game(total_points: u16, best_of_sets: u8, double_out: bool, user_ids: &[i64]) -> GameState {
    GameState::new(1, settings(total_points, best_of_sets, double_out), user_ids)
}

fn validation_kind(err: DomainError) -> ValidationKind {
    match err {
        DomainError::Validation(kind, _) => kind,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn dart_legality_table() {
    // miss
    assert!(is_legal_dart(0, 1));
    assert!(!is_legal_dart(0, 2));
    assert!(!is_legal_dart(0, 3));
    // segments
    assert!(is_legal_dart(1, 1));
    assert!(is_legal_dart(20, 3));
    assert!(!is_legal_dart(21, 1));
    assert!(!is_legal_dart(-1, 1));
    // bull: single and double only
    assert!(is_legal_dart(25, 1));
    assert!(is_legal_dart(25, 2));
    assert!(!is_legal_dart(25, 3));
    // multiplier range
    assert!(!is_legal_dart(20, 0));
    assert!(!is_legal_dart(20, 4));
    // non-segment values
    assert!(!is_legal_dart(22, 1));
    assert!(!is_legal_dart(24, 2));
}

#[test]
fn valid_throw_updates_score_and_turn() {
    let mut g = game(501, 1, false, &[10]);

    let throw = process_throw(&mut g, 10, 20, 3).unwrap();

    assert!(throw.valid);
    assert_eq!(throw.score_after, 441);
    assert_eq!(g.players[0].current_points, 441);
    assert_eq!(g.current_turn.throw_number, 1);
    assert_eq!(g.current_turn.current_turn_points, 60);
    assert_eq!(g.current_turn.player_index, 0);
}

#[test]
fn third_throw_passes_the_turn() {
    let mut g = game(501, 1, false, &[10, 11]);

    process_throw(&mut g, 10, 20, 1).unwrap();
    process_throw(&mut g, 10, 19, 1).unwrap();
    assert_eq!(g.current_turn.player_index, 0);

    process_throw(&mut g, 10, 18, 1).unwrap();
    assert_eq!(g.players[0].current_points, 501 - 57);
    assert_eq!(g.current_turn.player_index, 1);
    assert_eq!(g.current_turn.throw_number, 0);
    assert_eq!(g.current_turn.current_turn_points, 0);
}

#[test]
fn miss_counts_as_a_thrown_dart() {
    let mut g = game(301, 1, false, &[10, 11]);

    let throw = process_throw(&mut g, 10, 0, 1).unwrap();
    assert!(throw.valid);
    assert_eq!(throw.score_after, 301);
    assert_eq!(g.current_turn.throw_number, 1);
    assert_eq!(g.current_turn.current_turn_points, 0);
}

#[test]
fn checkout_finishes_best_of_one() {
    // Scenario: one player at 40 doubles out in a best-of-1 match.
    let mut g = game(501, 1, false, &[10]);
    g.players[0].current_points = 40;

    let throw = process_throw(&mut g, 10, 20, 2).unwrap();

    assert!(throw.valid);
    assert_eq!(throw.score_after, 0);
    assert_eq!(g.players[0].current_points, 0);
    assert_eq!(g.players[0].sets_won, 1);
    assert_eq!(g.status, GameStatus::Finished);
    assert_eq!(g.winner_id, Some(10));
}

#[test]
fn overshoot_busts_and_reverts_the_whole_turn() {
    // Two valid throws are folded in optimistically, then the third busts:
    // the score reverts to the turn's opening value, not the pre-throw one.
    let mut g = game(501, 1, false, &[10, 11]);
    g.players[0].current_points = 100;

    process_throw(&mut g, 10, 20, 3).unwrap();
    assert_eq!(g.players[0].current_points, 40);

    let throw = process_throw(&mut g, 10, 20, 3).unwrap();

    assert!(!throw.valid);
    assert_eq!(throw.score_after, 100);
    assert_eq!(g.players[0].current_points, 100);
    assert_eq!(g.current_turn.player_index, 1);
    assert_eq!(g.current_turn.throw_number, 0);
    assert_eq!(g.current_turn.current_turn_points, 0);
}

#[test]
fn remaining_one_busts_only_under_double_out() {
    let mut g = game(501, 1, true, &[10, 11]);
    g.players[0].current_points = 21;

    let throw = process_throw(&mut g, 10, 20, 1).unwrap();
    assert!(!throw.valid);
    assert_eq!(g.players[0].current_points, 21);
    assert_eq!(g.current_turn.player_index, 1);

    let mut g = game(501, 1, false, &[10, 11]);
    g.players[0].current_points = 21;

    let throw = process_throw(&mut g, 10, 20, 1).unwrap();
    assert!(throw.valid);
    assert_eq!(g.players[0].current_points, 1);
}

#[test]
fn double_out_rejects_single_checkout() {
    // Scenario: player at 20 hits a plain 20; remaining is 0 but the dart
    // was not a double, so the throw busts and the score stays put.
    let mut g = game(501, 1, true, &[10, 11]);
    g.players[0].current_points = 20;

    let throw = process_throw(&mut g, 10, 20, 1).unwrap();

    assert!(!throw.valid);
    assert_eq!(throw.score_after, 20);
    assert_eq!(g.players[0].current_points, 20);
    assert_eq!(g.status, GameStatus::Pending);
    assert_eq!(g.current_turn.player_index, 1);
}

#[test]
fn double_out_rejects_triple_checkout() {
    let mut g = game(501, 1, true, &[10, 11]);
    g.players[0].current_points = 60;

    let throw = process_throw(&mut g, 10, 20, 3).unwrap();
    assert!(!throw.valid);
    assert_eq!(g.players[0].current_points, 60);
}

#[test]
fn double_out_accepts_double_and_double_bull() {
    let mut g = game(501, 1, true, &[10]);
    g.players[0].current_points = 40;
    let throw = process_throw(&mut g, 10, 20, 2).unwrap();
    assert!(throw.valid);
    assert_eq!(g.status, GameStatus::Finished);

    let mut g = game(501, 1, true, &[10]);
    g.players[0].current_points = 50;
    let throw = process_throw(&mut g, 10, 25, 2).unwrap();
    assert!(throw.valid);
    assert_eq!(g.status, GameStatus::Finished);
    assert_eq!(g.winner_id, Some(10));
}

#[test]
fn without_double_out_any_exact_finish_checks_out() {
    for (points, multiplier, start) in [(20i16, 1i16, 20u16), (20, 3, 60), (25, 1, 25)] {
        let mut g = game(501, 1, false, &[10]);
        g.players[0].current_points = start;

        let throw = process_throw(&mut g, 10, points, multiplier).unwrap();
        assert!(throw.valid);
        assert_eq!(g.status, GameStatus::Finished);
    }
}

#[test]
fn finished_game_rejects_throws_untouched() {
    let mut g = game(501, 1, false, &[10]);
    g.players[0].current_points = 20;
    process_throw(&mut g, 10, 20, 1).unwrap();
    assert_eq!(g.status, GameStatus::Finished);

    let before = g.clone();
    let err = process_throw(&mut g, 10, 20, 1).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::GameFinished);
    assert_eq!(g, before);
}

#[test]
fn wrong_user_is_rejected_untouched() {
    let mut g = game(501, 3, false, &[10, 11]);

    let before = g.clone();
    let err = process_throw(&mut g, 11, 20, 1).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::NotPlayersTurn);
    assert_eq!(g, before);
}

#[test]
fn illegal_darts_are_rejected_untouched() {
    let mut g = game(501, 3, false, &[10, 11]);
    let before = g.clone();

    for (points, multiplier) in [(21, 1), (25, 3), (0, 2), (-5, 1), (20, 0), (20, 4)] {
        let err = process_throw(&mut g, 10, points, multiplier).unwrap_err();
        assert_eq!(validation_kind(err), ValidationKind::InvalidThrow);
        assert_eq!(g, before);
    }
}

#[test]
fn turn_order_check_comes_before_dart_legality() {
    let mut g = game(501, 3, false, &[10, 11]);

    // An illegal dart from the wrong user reports the turn problem.
    let err = process_throw(&mut g, 11, 99, 9).unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::NotPlayersTurn);
}

#[test]
fn set_win_resets_players_and_hands_the_lead_over() {
    let mut g = game(301, 3, false, &[10, 11]);
    g.players[0].current_points = 40;
    g.players[1].current_points = 117;

    let throw = process_throw(&mut g, 10, 20, 2).unwrap();
    assert!(throw.valid);
    assert_eq!(throw.score_after, 0);

    // One set in the bag, match continues on a fresh leg.
    assert_eq!(g.players[0].sets_won, 1);
    assert_eq!(g.status, GameStatus::Pending);
    assert_eq!(g.winner_id, None);

    // Everyone back to the full countdown, seat after the winner leads.
    assert_eq!(g.players[0].current_points, 301);
    assert_eq!(g.players[1].current_points, 301);
    assert_eq!(g.current_turn.player_index, 1);
    assert_eq!(g.current_turn.throw_number, 0);
    assert_eq!(g.current_turn.current_turn_points, 0);
}

#[test]
fn best_of_three_ends_after_two_set_wins() {
    let mut g = game(301, 3, false, &[10, 11]);

    // First set to player 10.
    g.players[0].current_points = 40;
    process_throw(&mut g, 10, 20, 2).unwrap();
    assert_eq!(g.status, GameStatus::Pending);

    // Player 11 leads the second leg; burn their turn with misses.
    process_throw(&mut g, 11, 0, 1).unwrap();
    process_throw(&mut g, 11, 0, 1).unwrap();
    process_throw(&mut g, 11, 0, 1).unwrap();

    // Second set to player 10 ends the match.
    g.players[0].current_points = 40;
    process_throw(&mut g, 10, 20, 2).unwrap();

    assert_eq!(g.players[0].sets_won, 2);
    assert_eq!(g.status, GameStatus::Finished);
    assert_eq!(g.winner_id, Some(10));
}

#[test]
fn sets_needed_is_the_majority() {
    assert_eq!(settings(501, 1, false).sets_needed(), 1);
    assert_eq!(settings(501, 3, false).sets_needed(), 2);
    assert_eq!(settings(501, 5, false).sets_needed(), 3);
}

#[test]
fn four_player_rotation_wraps_around() {
    let mut g = game(501, 1, false, &[1, 2, 3, 4]);

    for user_id in [1i64, 2, 3, 4] {
        for _ in 0..3 {
            process_throw(&mut g, user_id, 5, 1).unwrap();
        }
    }

    // Back to the first seat after a full round.
    assert_eq!(g.current_turn.player_index, 0);
    for player in &g.players {
        assert_eq!(player.current_points, 501 - 15);
    }
}
