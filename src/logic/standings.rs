//! Standings: rank competitors from the full set of round-robin results.

use crate::models::{Competitor, Fixture, StandingsRow};

/// Recompute every competitor's record from scratch and rank them.
///
/// 1. Start from the roster with all stats cleared (stats on the input are ignored).
/// 2. For each fixture with both scores set, add points both ways; the higher score
///    gets a win and the other a loss. An equal score only adds points.
/// 3. Fixtures with a missing score are skipped.
/// 4. Sort by wins, then point differential, both descending. The sort is stable, so
///    competitors still level keep their roster order.
pub fn compute_standings(competitors: &[Competitor], fixtures: &[Fixture]) -> Vec<StandingsRow> {
    let mut records: Vec<(usize, Competitor)> = competitors
        .iter()
        .map(Competitor::with_cleared_stats)
        .enumerate()
        .collect();

    for fixture in fixtures {
        let (Some(s1), Some(s2)) = (fixture.score_1, fixture.score_2) else {
            continue;
        };
        let (i, j) = (fixture.team_1_index, fixture.team_2_index);
        if i == j || i >= records.len() || j >= records.len() {
            log::warn!("Skipping fixture with invalid pairing ({}, {})", i, j);
            continue;
        }
        records[i].1.record_result(s1, s2);
        records[j].1.record_result(s2, s1);
    }

    records.sort_by(|(_, a), (_, b)| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.point_differential().cmp(&a.point_differential()))
    });

    records
        .into_iter()
        .enumerate()
        .map(|(pos, (index, competitor))| StandingsRow {
            rank: pos + 1,
            index,
            point_differential: competitor.point_differential(),
            competitor,
        })
        .collect()
}
