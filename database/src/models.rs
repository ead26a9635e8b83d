use chrono::{DateTime, Utc};
use types::{Difficulty, EntryView, Mode, PageRequest};

/// One (mode, difficulty) leaderboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub mode: Mode,
    pub difficulty: Difficulty,
}

impl Board {
    pub fn new(mode: Mode, difficulty: Difficulty) -> Self {
        Self { mode, difficulty }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRecord {
    pub player_name: String,
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub score: i64,
    pub updated_at: DateTime<Utc>,
}

impl LeaderboardRecord {
    pub fn board(&self) -> Board {
        Board::new(self.mode, self.difficulty)
    }

    /// Whether `self` ranks strictly ahead of `other`: a higher score, or the
    /// same score reached earlier.
    pub fn ranks_ahead_of(&self, other: &LeaderboardRecord) -> bool {
        self.score > other.score
            || (self.score == other.score && self.updated_at < other.updated_at)
    }
}

impl From<LeaderboardRecord> for EntryView {
    fn from(record: LeaderboardRecord) -> Self {
        Self {
            player_name: record.player_name,
            score: record.score,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new row was created or an existing one got a strictly higher score.
    Recorded,
    /// The stored score was already at least as high.
    Unchanged,
}

impl SubmitOutcome {
    pub fn updated(self) -> bool {
        matches!(self, SubmitOutcome::Recorded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardPage {
    pub board: Board,
    pub page: PageRequest,
    pub total: i64,
    pub player_rank: Option<i64>,
    pub entries: Vec<LeaderboardRecord>,
}
