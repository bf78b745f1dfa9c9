//! Scores, sides, round-robin fixtures and the three fixed playoff matches.

use serde::{Deserialize, Serialize};

/// A reported score. Unset scores are `None`, never zero.
pub type Score = u32;

/// Which side of a pairing (team 1 or team 2).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    One,
    Two,
}

impl Side {
    /// Side with the strictly greater score, if both scores are set.
    pub fn from_scores(score_1: Option<Score>, score_2: Option<Score>) -> Option<Self> {
        let (s1, s2) = (score_1?, score_2?);
        if s1 > s2 {
            Some(Side::One)
        } else if s2 > s1 {
            Some(Side::Two)
        } else {
            None
        }
    }
}

/// One round-robin pairing, referencing competitors by roster index.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// Always less than `team_2_index`.
    pub team_1_index: usize,
    pub team_2_index: usize,
    pub score_1: Option<Score>,
    pub score_2: Option<Score>,
}

impl Fixture {
    pub fn new(team_1_index: usize, team_2_index: usize) -> Self {
        Self {
            team_1_index,
            team_2_index,
            score_1: None,
            score_2: None,
        }
    }

    /// Both scores reported.
    pub fn is_complete(&self) -> bool {
        self.score_1.is_some() && self.score_2.is_some()
    }

    /// Decided winner, used to highlight the match. Ties and incomplete fixtures have none.
    pub fn winner(&self) -> Option<Side> {
        Side::from_scores(self.score_1, self.score_2)
    }

    pub fn score_mut(&mut self, side: Side) -> &mut Option<Score> {
        match side {
            Side::One => &mut self.score_1,
            Side::Two => &mut self.score_2,
        }
    }
}

/// Fixed bracket node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayoffRound {
    /// Seed #1 vs seed #4.
    Semifinal1,
    /// Seed #2 vs seed #3.
    Semifinal2,
    /// Semifinal 1 winner vs semifinal 2 winner.
    Championship,
}

/// Scores for one playoff node.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayoffMatch {
    pub score_1: Option<Score>,
    pub score_2: Option<Score>,
}

impl PlayoffMatch {
    pub fn new(score_1: Option<Score>, score_2: Option<Score>) -> Self {
        Self { score_1, score_2 }
    }

    /// A tie never resolves a bracket node.
    pub fn winner(&self) -> Option<Side> {
        Side::from_scores(self.score_1, self.score_2)
    }

    pub fn score_mut(&mut self, side: Side) -> &mut Option<Score> {
        match side {
            Side::One => &mut self.score_1,
            Side::Two => &mut self.score_2,
        }
    }
}

/// The three playoff nodes of a tournament. Starts fully unset.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayoffMatches {
    pub semifinal1: PlayoffMatch,
    pub semifinal2: PlayoffMatch,
    pub championship: PlayoffMatch,
}

impl PlayoffMatches {
    pub fn get(&self, round: PlayoffRound) -> &PlayoffMatch {
        match round {
            PlayoffRound::Semifinal1 => &self.semifinal1,
            PlayoffRound::Semifinal2 => &self.semifinal2,
            PlayoffRound::Championship => &self.championship,
        }
    }

    pub fn get_mut(&mut self, round: PlayoffRound) -> &mut PlayoffMatch {
        match round {
            PlayoffRound::Semifinal1 => &mut self.semifinal1,
            PlayoffRound::Semifinal2 => &mut self.semifinal2,
            PlayoffRound::Championship => &mut self.championship,
        }
    }
}
