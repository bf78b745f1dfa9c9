//! Tournament engine: roster, fixtures, standings, playoffs, plus the score input boundary.

mod export;
mod fixtures;
mod playoffs;
mod roster;
mod scores;
mod standings;

pub use export::standings_csv;
pub use fixtures::generate_fixtures;
pub use playoffs::{resolve_bracket, resolve_playoff};
pub use roster::init_roster;
pub use scores::parse_score;
pub use standings::compute_standings;
