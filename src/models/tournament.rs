//! Tournament: the caller-held snapshot of competitors, fixtures and playoff scores.

use crate::logic::{
    compute_standings, generate_fixtures, init_roster, parse_score, resolve_bracket, standings_csv,
};
use crate::models::bracket::Bracket;
use crate::models::competitor::{Competitor, StandingsRow};
use crate::models::game::{Fixture, PlayoffMatches, PlayoffRound, Side};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Largest roster accepted when (re)configuring a tournament.
pub const MAX_COMPETITORS: usize = 64;

/// Roster size used when none is given.
pub const DEFAULT_COMPETITORS: usize = 4;

/// Errors that can occur while editing a tournament.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Requested roster is larger than `MAX_COMPETITORS`.
    TooManyCompetitors { max: usize, requested: usize },
    /// No competitor at this roster index.
    CompetitorNotFound(usize),
    /// No fixture at this index.
    FixtureNotFound(usize),
    /// Score text is neither empty nor a non-negative integer.
    InvalidScore(String),
    /// Writing the standings export failed.
    Export(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::TooManyCompetitors { max, requested } => {
                write!(f, "At most {} teams are supported (requested {})", max, requested)
            }
            TournamentError::CompetitorNotFound(index) => write!(f, "No team at position {}", index),
            TournamentError::FixtureNotFound(index) => write!(f, "No match at position {}", index),
            TournamentError::InvalidScore(text) => write!(f, "Score must be a whole number, got {:?}", text),
            TournamentError::Export(reason) => write!(f, "Could not export standings: {}", reason),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full working set of one tournament. Standings and bracket are derived on demand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// When the current roster was created (reset and reconfigure refresh it).
    pub created_at: DateTime<Utc>,
    /// Never reordered; fixtures refer to competitors by position.
    pub competitors: Vec<Competitor>,
    pub fixtures: Vec<Fixture>,
    pub playoffs: PlayoffMatches,
}

impl Tournament {
    /// Create a tournament with `count` competitors, every fixture and playoff score unset.
    pub fn new(count: usize) -> Result<Self, TournamentError> {
        check_count(count)?;
        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            competitors: init_roster(count),
            fixtures: generate_fixtures(count),
            playoffs: PlayoffMatches::default(),
        })
    }

    pub fn competitor_count(&self) -> usize {
        self.competitors.len()
    }

    /// Replace competitors, fixtures and playoff scores with a fresh set for `count` teams.
    /// On error nothing is changed.
    pub fn configure(&mut self, count: usize) -> Result<(), TournamentError> {
        check_count(count)?;
        self.competitors = init_roster(count);
        self.fixtures = generate_fixtures(count);
        self.playoffs = PlayoffMatches::default();
        self.created_at = Utc::now();
        log::info!("Tournament {} configured with {} team(s)", self.id, count);
        Ok(())
    }

    /// Discard names and every score, keeping the current team count.
    pub fn reset(&mut self) {
        let count = self.competitor_count();
        self.competitors = init_roster(count);
        self.fixtures = generate_fixtures(count);
        self.playoffs = PlayoffMatches::default();
        self.created_at = Utc::now();
        log::info!("Tournament {} reset ({} team(s))", self.id, count);
    }

    /// Change a competitor's display name. Any text is accepted, including empty.
    pub fn rename_competitor(&mut self, index: usize, name: impl Into<String>) -> Result<(), TournamentError> {
        let competitor = self
            .competitors
            .get_mut(index)
            .ok_or(TournamentError::CompetitorNotFound(index))?;
        competitor.name = name.into();
        Ok(())
    }

    /// Set one side of a round-robin fixture from free-form text. Empty text clears it.
    pub fn set_fixture_score(&mut self, fixture_index: usize, side: Side, value: &str) -> Result<(), TournamentError> {
        let score = parse_score(value)?;
        let fixture = self
            .fixtures
            .get_mut(fixture_index)
            .ok_or(TournamentError::FixtureNotFound(fixture_index))?;
        *fixture.score_mut(side) = score;
        log::debug!("Tournament {} fixture {} {:?} score -> {:?}", self.id, fixture_index, side, score);
        Ok(())
    }

    /// Set one side of a playoff match from free-form text. Empty text clears it.
    pub fn set_playoff_score(&mut self, round: PlayoffRound, side: Side, value: &str) -> Result<(), TournamentError> {
        let score = parse_score(value)?;
        *self.playoffs.get_mut(round).score_mut(side) = score;
        log::debug!("Tournament {} {:?} {:?} score -> {:?}", self.id, round, side, score);
        Ok(())
    }

    /// Ranked standings, recomputed from every fixture.
    pub fn standings(&self) -> Vec<StandingsRow> {
        compute_standings(&self.competitors, &self.fixtures)
    }

    /// Playoff bracket seeded from fresh standings.
    pub fn bracket(&self) -> Bracket {
        let standings = self.standings();
        resolve_bracket(
            &standings,
            &self.playoffs.semifinal1,
            &self.playoffs.semifinal2,
            &self.playoffs.championship,
        )
    }

    /// Current standings as CSV text.
    pub fn standings_csv(&self) -> Result<String, TournamentError> {
        standings_csv(&self.standings())
    }
}

fn check_count(count: usize) -> Result<(), TournamentError> {
    if count > MAX_COMPETITORS {
        return Err(TournamentError::TooManyCompetitors {
            max: MAX_COMPETITORS,
            requested: count,
        });
    }
    Ok(())
}
