use proptest::prelude::*;

use crate::domain::engine::process_throw;
use crate::domain::state::{GameSettings, GameState, GameStatus};

/// Any legal dartboard outcome.
fn arb_dart() -> impl Strategy<Value = (i16, i16)> {
    prop_oneof![
        Just((0i16, 1i16)),
        (1i16..=20, 1i16..=3),
        (Just(25i16), 1i16..=2),
    ]
}

fn fresh_game(double_out: bool, player_count: usize) -> GameState {
    let user_ids: Vec<i64> = (1..=player_count as i64).collect();
    GameState::new(
        1,
        GameSettings {
            total_points: 301,
            best_of_sets: 3,
            double_out,
        },
        &user_ids,
    )
}

proptest! {
    /// Any sequence of legal darts keeps the game inside its invariants:
    /// the turn cursor stays in range, no score exceeds the starting total,
    /// a bust reverts the thrower to the turn's opening score, and the
    /// returned record always agrees with the state.
    #[test]
    fn legal_dart_sequences_preserve_invariants(
        darts in prop::collection::vec(arb_dart(), 1..80),
        double_out in any::<bool>(),
        player_count in 1usize..=4,
    ) {
        let mut g = fresh_game(double_out, player_count);
        let total = g.settings.total_points;

        for (points, multiplier) in darts {
            if g.status == GameStatus::Finished {
                break;
            }

            let idx = g.current_turn.player_index as usize;
            let user_id = g.players[idx].user_id;
            let turn_start = g.players[idx].current_points + g.current_turn.current_turn_points;

            prop_assert!(g.current_turn.throw_number <= 2);

            let throw = process_throw(&mut g, user_id, points, multiplier).unwrap();

            if throw.score_after != 0 {
                // A checkout may have reset the leg already; everywhere else
                // the record must agree with the thrower's score.
                prop_assert_eq!(throw.score_after, g.players[idx].current_points);
            }
            if !throw.valid {
                prop_assert_eq!(g.players[idx].current_points, turn_start);
            }

            prop_assert!((g.current_turn.player_index as usize) < g.player_count());
            prop_assert!(g.current_turn.throw_number <= 3);
            for player in &g.players {
                prop_assert!(player.current_points <= total);
            }
        }

        if g.status == GameStatus::Finished {
            prop_assert!(g.winner_id.is_some());
            let winner = g.winner_id.unwrap();
            let winner_sets = g
                .players
                .iter()
                .find(|p| p.user_id == winner)
                .map(|p| p.sets_won)
                .unwrap();
            prop_assert!(winner_sets >= g.settings.sets_needed());
        } else {
            prop_assert!(g.winner_id.is_none());
        }
    }

    /// Rejected throws never mutate the game.
    #[test]
    fn illegal_darts_leave_the_game_untouched(
        points in -5i16..=30,
        multiplier in -1i16..=5,
    ) {
        prop_assume!(!crate::domain::engine::is_legal_dart(points, multiplier));

        let mut g = fresh_game(false, 2);
        let before = g.clone();

        let user_id = g.current_player().user_id;
        prop_assert!(process_throw(&mut g, user_id, points, multiplier).is_err());
        prop_assert_eq!(g, before);
    }
}
