use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

pub const MAX_SCORE: i64 = 100_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Score(i64);

impl Score {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (0..=MAX_SCORE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::Score)
        }
    }

    /// Accepts any JSON number with an integral value, so `80` and `80.0` are
    /// both a score of 80.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let number = value.as_number().ok_or(ValidationError::Score)?;
        if let Some(int) = number.as_i64() {
            return Self::new(int);
        }
        match number.as_f64() {
            Some(float) if float.fract() == 0.0 && float >= 0.0 && float <= MAX_SCORE as f64 => {
                Ok(Self(float as i64))
            }
            _ => Err(ValidationError::Score),
        }
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Score {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for i64 {
    fn from(score: Score) -> Self {
        score.0
    }
}
