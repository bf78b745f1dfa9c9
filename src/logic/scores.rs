//! Input boundary: turn free-form score text into an optional score.

use crate::models::{Score, TournamentError};

/// Parse score text as typed by a user.
///
/// Empty (or whitespace-only) text is `None`, which is distinct from `"0"`.
/// Anything else must be a non-negative integer.
pub fn parse_score(text: &str) -> Result<Option<Score>, TournamentError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<Score>()
        .map(Some)
        .map_err(|_| TournamentError::InvalidScore(text.to_string()))
}
