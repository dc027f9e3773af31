use time::OffsetDateTime;

use crate::domain::state::{GamePlayer, GameSettings, Throw};
use crate::domain::stats::reconstruct_statistics;

fn settings(total_points: u16) -> GameSettings {
    GameSettings {
        total_points,
        best_of_sets: 3,
        double_out: false,
    }
}

fn players(user_ids: &[i64]) -> Vec<GamePlayer> {
    user_ids
        .iter()
        .enumerate()
        .map(|(order, &user_id)| GamePlayer {
            user_id,
            turn_order: order as u8,
            sets_won: 0,
            current_points: 0,
        })
        .collect()
}

fn throw(user_id: i64, points: u8, multiplier: u8, valid: bool, score_after: u16) -> Throw {
    Throw {
        game_id: 1,
        user_id,
        points,
        multiplier,
        valid,
        score_after,
        created_at: OffsetDateTime::UNIX_EPOCH,
    }
}

#[test]
fn empty_history_yields_no_sets() {
    let stats = reconstruct_statistics(&[], &settings(501), &players(&[10, 11]));

    assert_eq!(stats.total_sets_played, 0);
    assert_eq!(stats.players.len(), 2);
    for p in &stats.players {
        assert_eq!(p.overall.total_throws, 0);
        assert_eq!(p.overall.total_points, 0);
        assert_eq!(p.overall.average_3_dart, 0.0);
        assert!(p.sets.is_empty());
    }
}

#[test]
fn two_checkouts_by_two_users_yield_two_attributed_sets() {
    // Set 1 goes to user 10, set 2 to user 11.
    let throws = vec![
        throw(10, 20, 3, true, 241),
        throw(11, 20, 1, true, 281),
        throw(10, 25, 2, true, 191),
        throw(10, 20, 3, true, 131),
        throw(10, 20, 3, true, 71),
        throw(10, 20, 3, true, 11),
        throw(10, 11, 1, true, 0),
        // Fresh leg.
        throw(11, 20, 3, true, 241),
        throw(11, 20, 3, true, 181),
        throw(11, 20, 3, true, 121),
        throw(11, 20, 3, true, 61),
        throw(11, 20, 3, true, 1),
        throw(11, 1, 1, true, 0),
    ];

    let stats = reconstruct_statistics(&throws, &settings(301), &players(&[10, 11]));

    assert_eq!(stats.total_sets_played, 2);

    let p10 = &stats.players[0];
    let p11 = &stats.players[1];
    assert_eq!(p10.user_id, 10);
    assert_eq!(p11.user_id, 11);

    assert!(p10.sets[0].won_set);
    assert!(!p10.sets[1].won_set);
    assert!(!p11.sets[0].won_set);
    assert!(p11.sets[1].won_set);

    assert_eq!(p10.sets[0].set_number, 1);
    assert_eq!(p10.sets[1].set_number, 2);

    // User 10 threw all 301 points of set 1 and nothing in set 2.
    assert_eq!(p10.sets[0].total_points, 301);
    assert_eq!(p10.sets[1].total_throws, 0);
    assert_eq!(p10.sets[1].total_points, 0);
    assert_eq!(p10.sets[1].average_3_dart, 0.0);
}

#[test]
fn overall_is_the_sum_of_sets_with_a_recomputed_average() {
    let throws = vec![
        throw(10, 20, 3, true, 241),
        throw(10, 20, 3, true, 181),
        throw(10, 20, 3, true, 121),
        throw(10, 20, 3, true, 61),
        throw(10, 20, 3, true, 1),
        throw(10, 1, 1, true, 0),
        // Second leg, left open.
        throw(10, 19, 1, true, 282),
        throw(10, 7, 1, true, 275),
    ];

    let stats = reconstruct_statistics(&throws, &settings(301), &players(&[10]));

    assert_eq!(stats.total_sets_played, 2);
    let p = &stats.players[0];

    let set_throws: u32 = p.sets.iter().map(|s| s.total_throws).sum();
    let set_points: u32 = p.sets.iter().map(|s| s.total_points).sum();
    assert_eq!(p.overall.total_throws, set_throws);
    assert_eq!(p.overall.total_points, set_points);
    assert_eq!(p.overall.total_throws, 8);
    assert_eq!(p.overall.total_points, 327);

    let expected = (327.0 / 8.0) * 3.0;
    assert!((p.overall.average_3_dart - expected).abs() < 1e-9);
}

#[test]
fn busts_count_throws_but_no_points() {
    let throws = vec![
        throw(10, 20, 3, true, 241),
        // Bust: reverted, recorded invalid.
        throw(10, 20, 3, false, 301),
        throw(10, 5, 1, true, 296),
    ];

    let stats = reconstruct_statistics(&throws, &settings(301), &players(&[10]));

    let p = &stats.players[0];
    assert_eq!(p.overall.total_throws, 3);
    assert_eq!(p.overall.total_points, 65);
    let expected = (65.0 / 3.0) * 3.0;
    assert!((p.overall.average_3_dart - expected).abs() < 1e-9);
}

#[test]
fn score_back_at_total_splits_the_set_retroactively() {
    // Both players are mid-countdown when user 10's score shows up back at
    // the starting total: a new set began without a recorded checkout. The
    // boundary throw opens the new set rather than closing the old one.
    let throws = vec![
        throw(10, 20, 3, true, 241),
        throw(11, 20, 1, true, 281),
        throw(10, 0, 1, true, 301),
        throw(10, 20, 3, true, 241),
    ];

    let stats = reconstruct_statistics(&throws, &settings(301), &players(&[10, 11]));

    assert_eq!(stats.total_sets_played, 2);

    let p10 = &stats.players[0];
    let p11 = &stats.players[1];

    // First set: one throw each, nobody won it.
    assert_eq!(p10.sets[0].total_throws, 1);
    assert_eq!(p11.sets[0].total_throws, 1);
    assert!(!p10.sets[0].won_set);
    assert!(!p11.sets[0].won_set);

    // Second set: the boundary miss plus the follow-up throw.
    assert_eq!(p10.sets[1].total_throws, 2);
    assert_eq!(p10.sets[1].total_points, 60);
    assert_eq!(p11.sets[1].total_throws, 0);
}

#[test]
fn leading_misses_do_not_split_a_fresh_set() {
    // A miss on the very first throw leaves the score at the total with the
    // baseline still at the total; that is not evidence of a new set.
    let throws = vec![
        throw(10, 0, 1, true, 301),
        throw(10, 0, 1, true, 301),
        throw(10, 20, 3, true, 241),
    ];

    let stats = reconstruct_statistics(&throws, &settings(301), &players(&[10]));

    assert_eq!(stats.total_sets_played, 1);
    assert_eq!(stats.players[0].sets[0].total_throws, 3);
}

#[test]
fn open_trailing_set_is_still_reported() {
    let throws = vec![
        throw(10, 20, 3, true, 241),
        throw(10, 20, 3, true, 181),
    ];

    let stats = reconstruct_statistics(&throws, &settings(301), &players(&[10]));

    assert_eq!(stats.total_sets_played, 1);
    let set = &stats.players[0].sets[0];
    assert_eq!(set.total_throws, 2);
    assert_eq!(set.total_points, 120);
    assert!(!set.won_set);
}
