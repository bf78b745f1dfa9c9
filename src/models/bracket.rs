//! Resolved view of the fixed 4-seed playoff bracket.

use serde::{Deserialize, Serialize};

/// Shown for a seed that does not exist (fewer than 4 competitors) or has no name.
pub const TBD: &str = "TBD";
/// Shown in the championship while semifinal 1 is unresolved.
pub const SEMIFINAL_1_PENDING: &str = "Winner SF1";
/// Shown in the championship while semifinal 2 is unresolved.
pub const SEMIFINAL_2_PENDING: &str = "Winner SF2";

/// Display names of the two sides of a playoff match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayoffPairing {
    pub team_1: String,
    pub team_2: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    /// Seed #1 vs seed #4.
    pub semifinal_1: PlayoffPairing,
    /// Seed #2 vs seed #3.
    pub semifinal_2: PlayoffPairing,
    pub semifinal_1_winner: String,
    pub semifinal_2_winner: String,
    /// Semifinal 1 winner vs semifinal 2 winner (placeholders while pending).
    pub championship: PlayoffPairing,
    /// None until the championship has a strictly greater score on one side.
    pub champion: Option<String>,
}
