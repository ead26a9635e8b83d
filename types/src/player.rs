use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

pub const MAX_NAME_LENGTH: usize = 32;

/// A trimmed, non-empty player name of at most [`MAX_NAME_LENGTH`] UTF-16
/// code units, the length browsers report for the same string.
///
/// The name is the player's identity within a (mode, difficulty) board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.encode_utf16().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::PlayerName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}
