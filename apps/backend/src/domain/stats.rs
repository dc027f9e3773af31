//! Statistics reconstruction from the raw throw history.
//!
//! No explicit set/leg identifier is persisted per throw, so set boundaries
//! are inferred from the score trail: a throw with `score_after == 0` closes
//! a set, and a score jumping back to the starting total from strictly
//! inside the countdown is evidence a new set silently began. The heuristic
//! is kept bit-compatible with histories already stored by earlier versions
//! of this service.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::state::{GamePlayer, GameSettings, Throw};

/// Aggregate statistics for one game, per player and per detected set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameStatistics {
    pub total_sets_played: usize,
    /// One entry per player, in turn order.
    pub players: Vec<PlayerGameStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerGameStats {
    pub user_id: i64,
    pub overall: OverallStats,
    pub sets: Vec<SetStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverallStats {
    pub total_throws: u32,
    pub total_points: u32,
    pub average_3_dart: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetStats {
    /// 1-based set number.
    pub set_number: usize,
    pub total_throws: u32,
    pub total_points: u32,
    pub average_3_dart: f64,
    pub won_set: bool,
}

/// Reconstruct per-set and per-player statistics from a chronologically
/// ordered throw history.
///
/// Every throw counts toward `total_throws`; only valid throws contribute
/// points (a bust is a thrown dart worth nothing). Overall figures are sums
/// across sets with the 3-dart average recomputed from the summed totals,
/// never an average of averages.
pub fn reconstruct_statistics(
    throws: &[Throw],
    settings: &GameSettings,
    players: &[GamePlayer],
) -> GameStatistics {
    let sets = detect_set_boundaries(throws, settings.total_points, players);

    let mut stats: Vec<PlayerGameStats> = players
        .iter()
        .map(|p| PlayerGameStats {
            user_id: p.user_id,
            overall: OverallStats::default(),
            sets: Vec::with_capacity(sets.len()),
        })
        .collect();

    for (set_idx, set_throws) in sets.iter().enumerate() {
        let per_player = tally_set(set_throws);
        let winner = find_set_winner(set_throws);

        for player_stats in &mut stats {
            let tally = per_player
                .get(&player_stats.user_id)
                .copied()
                .unwrap_or_default();

            player_stats.sets.push(SetStats {
                set_number: set_idx + 1,
                total_throws: tally.throws,
                total_points: tally.points,
                average_3_dart: three_dart_average(tally.points, tally.throws),
                won_set: winner == Some(player_stats.user_id),
            });

            player_stats.overall.total_throws += tally.throws;
            player_stats.overall.total_points += tally.points;
        }
    }

    for player_stats in &mut stats {
        player_stats.overall.average_3_dart = three_dart_average(
            player_stats.overall.total_points,
            player_stats.overall.total_throws,
        );
    }

    GameStatistics {
        total_sets_played: sets.len(),
        players: stats,
    }
}

/// Group the throw history into per-set buckets.
///
/// A per-player baseline of "last known score" starts at `total_points`.
/// `score_after == 0` closes the current bucket (that thrower won the set).
/// A `score_after` back at `total_points` while the thrower's baseline was
/// strictly between 0 and `total_points` means a new set began without this
/// player ever reaching 0: the prior bucket closes excluding this throw,
/// which instead opens the next one.
fn detect_set_boundaries<'a>(
    throws: &'a [Throw],
    total_points: u16,
    players: &[GamePlayer],
) -> Vec<Vec<&'a Throw>> {
    let mut sets: Vec<Vec<&Throw>> = Vec::new();
    if throws.is_empty() {
        return sets;
    }

    let mut current: Vec<&Throw> = Vec::new();
    let mut baselines: HashMap<i64, u16> = players
        .iter()
        .map(|p| (p.user_id, total_points))
        .collect();

    for throw in throws {
        current.push(throw);

        if throw.score_after == 0 {
            sets.push(std::mem::take(&mut current));
            for score in baselines.values_mut() {
                *score = total_points;
            }
            continue;
        }

        if let Some(&prev) = baselines.get(&throw.user_id) {
            if throw.score_after == total_points
                && prev < total_points
                && prev > 0
                && current.len() > 1
            {
                // This throw belongs to the new set, not the one it closes.
                current.pop();
                sets.push(std::mem::take(&mut current));
                current.push(throw);
                for score in baselines.values_mut() {
                    *score = total_points;
                }
            }
        }

        baselines.insert(throw.user_id, throw.score_after);
    }

    if !current.is_empty() {
        sets.push(current);
    }

    sets
}

#[derive(Debug, Clone, Copy, Default)]
struct SetTally {
    throws: u32,
    points: u32,
}

fn tally_set(set_throws: &[&Throw]) -> HashMap<i64, SetTally> {
    let mut tallies: HashMap<i64, SetTally> = HashMap::new();

    for throw in set_throws {
        let tally = tallies.entry(throw.user_id).or_default();
        tally.throws += 1;
        // Busts count toward the throw total but score nothing.
        if throw.valid {
            tally.points += throw.points as u32 * throw.multiplier as u32;
        }
    }

    tallies
}

/// The set's winner is whichever user's throw within the bucket reached 0.
fn find_set_winner(set_throws: &[&Throw]) -> Option<i64> {
    set_throws
        .iter()
        .find(|t| t.score_after == 0)
        .map(|t| t.user_id)
}

fn three_dart_average(points: u32, throws: u32) -> f64 {
    if throws == 0 {
        return 0.0;
    }
    (points as f64 / throws as f64) * 3.0
}
