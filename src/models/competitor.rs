//! Competitor and StandingsRow data structures.

use serde::{Deserialize, Serialize};

/// Stable 1-based identity, assigned once at roster creation.
pub type CompetitorId = u32;

/// A team entered in the tournament. Stats are always recomputed from fixtures.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub points_for: u64,
    pub points_against: u64,
}

impl Competitor {
    /// Create a competitor named `Team {id}` with zeroed stats.
    pub fn new(id: CompetitorId) -> Self {
        Self {
            id,
            name: format!("Team {id}"),
            wins: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
        }
    }

    /// Same competitor with every stat set back to zero (name and id kept).
    pub fn with_cleared_stats(&self) -> Self {
        Self {
            wins: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
            ..self.clone()
        }
    }

    /// Saturates at the `i64` bounds; real totals stay far below them.
    pub fn point_differential(&self) -> i64 {
        let points_for = i64::try_from(self.points_for).unwrap_or(i64::MAX);
        let points_against = i64::try_from(self.points_against).unwrap_or(i64::MAX);
        points_for.saturating_sub(points_against)
    }

    /// Record a completed fixture from this competitor's point of view.
    pub fn record_result(&mut self, scored: u32, conceded: u32) {
        self.points_for += u64::from(scored);
        self.points_against += u64::from(conceded);
        if scored > conceded {
            self.wins += 1;
        } else if conceded > scored {
            self.losses += 1;
        }
    }
}

/// One ranked line of the standings table. Always derived, never stored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Position of the competitor in the roster (what fixtures refer to).
    pub index: usize,
    #[serde(flatten)]
    pub competitor: Competitor,
    pub point_differential: i64,
}

impl StandingsRow {
    pub fn name(&self) -> &str {
        &self.competitor.name
    }
}
