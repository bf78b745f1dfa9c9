//! Playoffs: fixed 4-seed bracket (1 v 4, 2 v 3, winners meet in the championship).

use crate::models::{
    Bracket, PlayoffMatch, PlayoffPairing, Side, StandingsRow, SEMIFINAL_1_PENDING,
    SEMIFINAL_2_PENDING, TBD,
};

/// Seed indices (into the standings) of each semifinal: (side one, side two).
const SEMIFINAL_1_SEEDS: (usize, usize) = (0, 3);
const SEMIFINAL_2_SEEDS: (usize, usize) = (1, 2);

/// Winning side of a playoff match; None if a score is unset or the scores are level.
pub fn resolve_playoff(playoff_match: &PlayoffMatch) -> Option<Side> {
    playoff_match.winner()
}

/// Name of the competitor at standings position `seed`, or "TBD" if there is none
/// (or the name is empty).
fn seed_name(standings: &[StandingsRow], seed: usize) -> String {
    standings
        .get(seed)
        .map(StandingsRow::name)
        .filter(|name| !name.is_empty())
        .unwrap_or(TBD)
        .to_string()
}

fn pairing(standings: &[StandingsRow], (seed_1, seed_2): (usize, usize)) -> PlayoffPairing {
    PlayoffPairing {
        team_1: seed_name(standings, seed_1),
        team_2: seed_name(standings, seed_2),
    }
}

/// Advancing name from a semifinal, or `pending` while it is unresolved.
fn semifinal_winner(
    standings: &[StandingsRow],
    semifinal: &PlayoffMatch,
    (seed_1, seed_2): (usize, usize),
    pending: &str,
) -> String {
    match resolve_playoff(semifinal) {
        Some(Side::One) => seed_name(standings, seed_1),
        Some(Side::Two) => seed_name(standings, seed_2),
        None => pending.to_string(),
    }
}

/// Resolve every bracket node from ranked standings and the three playoff results.
///
/// The champion is only set when the championship itself is decided; it is then the
/// name shown for the winning side of the championship.
pub fn resolve_bracket(
    standings: &[StandingsRow],
    semifinal1: &PlayoffMatch,
    semifinal2: &PlayoffMatch,
    championship: &PlayoffMatch,
) -> Bracket {
    let semifinal_1_winner =
        semifinal_winner(standings, semifinal1, SEMIFINAL_1_SEEDS, SEMIFINAL_1_PENDING);
    let semifinal_2_winner =
        semifinal_winner(standings, semifinal2, SEMIFINAL_2_SEEDS, SEMIFINAL_2_PENDING);

    let champion = match resolve_playoff(championship) {
        Some(Side::One) => Some(semifinal_1_winner.clone()),
        Some(Side::Two) => Some(semifinal_2_winner.clone()),
        None => None,
    };

    Bracket {
        semifinal_1: pairing(standings, SEMIFINAL_1_SEEDS),
        semifinal_2: pairing(standings, SEMIFINAL_2_SEEDS),
        championship: PlayoffPairing {
            team_1: semifinal_1_winner.clone(),
            team_2: semifinal_2_winner.clone(),
        },
        semifinal_1_winner,
        semifinal_2_winner,
        champion,
    }
}
