use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Difficulty, Mode, PlayerName, Score, ValidationError};

/// A validated request to record a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub player_name: PlayerName,
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub score: Score,
}

impl ScoreSubmission {
    /// Parses a submit body. Fields are checked in a fixed order (name, mode,
    /// difficulty, score) and the first failure is reported.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        let payload: Value =
            serde_json::from_slice(body).map_err(|_| ValidationError::MalformedBody)?;

        let player_name = PlayerName::parse(string_field(&payload, "playerName"))?;
        let mode = string_field(&payload, "mode").parse()?;
        let difficulty = string_field(&payload, "difficulty").parse()?;
        let score = payload
            .get("score")
            .ok_or(ValidationError::Score)
            .and_then(Score::from_json)?;

        Ok(Self {
            player_name,
            mode,
            difficulty,
            score,
        })
    }
}

// non-string fields read as empty so they fail the same check as a blank value
fn string_field<'a>(payload: &'a Value, key: &str) -> &'a str {
    payload.get(key).and_then(Value::as_str).unwrap_or("")
}
