use std::{fmt::Display, fs::read_to_string, path::Path};

use rand::{seq::SliceRandom, Rng};
use serde::Deserialize;
use thiserror::Error;
use types::Difficulty;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Could not read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed roster: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Roster has no professors")]
    Empty,
}

/// One student review as scraped, all fields optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingComment {
    pub comment: Option<String>,
    pub class: Option<String>,
    pub date: Option<String>,
    pub clarity_rating: Option<f64>,
    pub difficulty_rating: Option<f64>,
    pub grade: Option<String>,
    pub textbook: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RatingComment {
    /// The grade the reviewer got, hidden on hard difficulty.
    pub fn visible_grade(&self, difficulty: Difficulty) -> Option<&str> {
        match difficulty {
            Difficulty::Hard => None,
            _ => self.grade.as_deref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Professor {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub rating: f64,
    pub difficulty: f64,
    pub ratings: Vec<RatingComment>,
}

impl Display for Professor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.department)
    }
}

impl Professor {
    /// Up to `count` distinct reviews in random order.
    pub fn sample_comments<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<&RatingComment> {
        self.ratings.choose_multiple(rng, count).collect()
    }
}

#[derive(Deserialize)]
struct RawEntry {
    professor: RawProfessor,
    #[serde(default)]
    ratings: Vec<RatingComment>,
}

#[derive(Deserialize)]
struct RawProfessor {
    legacy_id: i64,
    first_name: String,
    last_name: String,
    department: String,
    avg_rating: f64,
    avg_difficulty: f64,
}

impl From<RawEntry> for Professor {
    fn from(entry: RawEntry) -> Self {
        let raw = entry.professor;
        Self {
            id: raw.legacy_id,
            name: format!("{} {}", raw.first_name, raw.last_name),
            department: raw.department,
            rating: raw.avg_rating,
            difficulty: raw.avg_difficulty,
            ratings: entry.ratings,
        }
    }
}

/// The pool of professors questions are drawn from.
#[derive(Clone, Debug)]
pub struct Roster {
    professors: Vec<Professor>,
}

impl Roster {
    pub fn new(professors: Vec<Professor>) -> Result<Self, RosterError> {
        if professors.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { professors })
    }

    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let entries: Vec<RawEntry> = serde_json::from_str(json)?;
        Self::new(entries.into_iter().map(Professor::from).collect())
    }

    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let roster = Self::from_json(&read_to_string(path)?)?;
        log::info!("Loaded {} professors from {}", roster.len(), path.display());
        Ok(roster)
    }

    pub fn len(&self) -> usize {
        self.professors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.professors.is_empty()
    }

    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    /// Draws with replacement, so the same professor can come up twice in a
    /// row.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &Professor {
        // never empty, checked in new
        &self.professors[rng.gen_range(0..self.professors.len())]
    }
}
