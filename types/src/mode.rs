use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// The game variants a score can be recorded under.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Endless rating guesses, one miss by more than half a star ends the run.
    Guess,
    /// Best of ten rating guesses.
    Guess10,
    /// Pick whether the left professor is rated higher or lower.
    HigherLower,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Guess, Mode::Guess10, Mode::HigherLower];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Guess => "guess",
            Mode::Guess10 => "guess10",
            Mode::HigherLower => "higherlower",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or(ValidationError::Mode)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Reads an optional query value, where a missing or empty value means
    /// [`Difficulty::Normal`].
    pub fn from_param(param: Option<&str>) -> Result<Self, ValidationError> {
        match param {
            None | Some("") => Ok(Difficulty::default()),
            Some(value) => value.parse(),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == s)
            .ok_or(ValidationError::Difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing_is_exact() {
        assert_eq!("guess10".parse::<Mode>(), Ok(Mode::Guess10));
        assert_eq!("higherlower".parse::<Mode>(), Ok(Mode::HigherLower));
        assert_eq!("Guess".parse::<Mode>(), Err(ValidationError::Mode));
        assert_eq!(" guess".parse::<Mode>(), Err(ValidationError::Mode));
        assert_eq!("".parse::<Mode>(), Err(ValidationError::Mode));
    }

    #[test]
    fn test_difficulty_param_defaults_to_normal() {
        assert_eq!(Difficulty::from_param(None), Ok(Difficulty::Normal));
        assert_eq!(Difficulty::from_param(Some("")), Ok(Difficulty::Normal));
        assert_eq!(Difficulty::from_param(Some("hard")), Ok(Difficulty::Hard));
        assert_eq!(
            Difficulty::from_param(Some("insane")),
            Err(ValidationError::Difficulty)
        );
    }

    #[test]
    fn test_serde_uses_wire_spelling() {
        let json = serde_json::to_string(&Mode::HigherLower).unwrap();
        assert_eq!(json, "\"higherlower\"");
        let difficulty: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(difficulty, Difficulty::Easy);
    }
}
