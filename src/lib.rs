//! Tournament score sheet: round robin standings and a 4-seed playoff bracket.

pub mod logic;
pub mod models;

pub use logic::{
    compute_standings, generate_fixtures, init_roster, parse_score, resolve_bracket,
    resolve_playoff, standings_csv,
};
pub use models::{
    Bracket, Competitor, CompetitorId, Fixture, PlayoffMatch, PlayoffMatches, PlayoffPairing,
    PlayoffRound, Score, Side, StandingsRow, Tournament, TournamentError, TournamentId,
    DEFAULT_COMPETITORS, MAX_COMPETITORS, SEMIFINAL_1_PENDING, SEMIFINAL_2_PENDING, TBD,
};
