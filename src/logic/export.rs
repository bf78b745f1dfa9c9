//! CSV export of the standings table.

use crate::models::{StandingsRow, TournamentError};

const HEADER: [&str; 7] = [
    "Rank",
    "Team",
    "Wins",
    "Losses",
    "Points For",
    "Points Against",
    "Differential",
];

/// Render standings as CSV, one row per competitor in rank order.
/// Positive differentials carry a leading `+`.
pub fn standings_csv(standings: &[StandingsRow]) -> Result<String, TournamentError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(HEADER)
        .map_err(|e| TournamentError::Export(e.to_string()))?;
    for row in standings {
        let c = &row.competitor;
        let differential = if row.point_differential > 0 {
            format!("+{}", row.point_differential)
        } else {
            row.point_differential.to_string()
        };
        writer
            .write_record([
                row.rank.to_string(),
                c.name.clone(),
                c.wins.to_string(),
                c.losses.to_string(),
                c.points_for.to_string(),
                c.points_against.to_string(),
                differential,
            ])
            .map_err(|e| TournamentError::Export(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TournamentError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TournamentError::Export(e.to_string()))
}
