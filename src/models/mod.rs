//! Data structures for the score sheet: competitors, fixtures, playoff matches, tournament state.

mod bracket;
mod competitor;
mod game;
mod tournament;

pub use bracket::{Bracket, PlayoffPairing, SEMIFINAL_1_PENDING, SEMIFINAL_2_PENDING, TBD};
pub use competitor::{Competitor, CompetitorId, StandingsRow};
pub use game::{Fixture, PlayoffMatch, PlayoffMatches, PlayoffRound, Score, Side};
pub use tournament::{Tournament, TournamentError, TournamentId, DEFAULT_COMPETITORS, MAX_COMPETITORS};
