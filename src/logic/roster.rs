//! Roster setup: the initial competitor list for a tournament.

use crate::models::{Competitor, CompetitorId};

/// Build `count` competitors with ids 1..=count, named `Team {id}`, all stats zero.
/// A count of 0 yields an empty roster.
pub fn init_roster(count: usize) -> Vec<Competitor> {
    (1..=CompetitorId::MAX).take(count).map(Competitor::new).collect()
}
