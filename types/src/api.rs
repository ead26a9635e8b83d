//! JSON bodies exchanged with the game client.

use serde::{Deserialize, Serialize};

use crate::{Difficulty, Mode};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub ok: bool,
    pub updated: bool,
}

impl SubmitResponse {
    pub fn new(updated: bool) -> Self {
        Self { ok: true, updated }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub player_name: String,
    pub score: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub ok: bool,
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub limit: i64,
    pub offset: i64,
    pub total: i64,
    /// Always serialized, as `null` when the player has no entry.
    pub player_rank: Option<i64>,
    pub entries: Vec<EntryView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}
