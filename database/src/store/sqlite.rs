use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use types::{PageRequest, PlayerName, ScoreSubmission};

use super::LeaderboardStore;
use crate::models::{Board, LeaderboardRecord, SubmitOutcome};
use crate::{retry_with_backoff, DatabaseConfig, DatabaseError};

const CONNECT_RETRIES: usize = 3;
const CONNECT_BACKOFF: Duration = Duration::from_millis(250);

// Insert, or raise the stored score when the new one is strictly higher. A
// skipped DO UPDATE reports zero changed rows.
const UPSERT_BEST_SCORE: &str = "INSERT INTO leaderboard_entries (player_name, mode, difficulty, score, updated_at)
     VALUES (?, ?, ?, ?, ?)
     ON CONFLICT (player_name, mode, difficulty) DO UPDATE
     SET score = excluded.score, updated_at = excluded.updated_at
     WHERE excluded.score > leaderboard_entries.score";

pub struct SqliteLeaderboard {
    pool: SqlitePool,
}

impl SqliteLeaderboard {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the pool, retrying with backoff, and brings the schema up to date.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let pool = retry_with_backoff(
            "Opening leaderboard database",
            || config.create_pool(),
            CONNECT_RETRIES,
            CONNECT_BACKOFF,
        )
        .await?;

        let store = Self::new(pool);
        store.run_migrations().await?;
        tracing::info!("Leaderboard database ready at {}", config.url);
        Ok(store)
    }

    pub async fn run_migrations(&self) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// [`LeaderboardStore::submit`] with an explicit timestamp.
    pub async fn submit_at(
        &self,
        submission: &ScoreSubmission,
        at: DateTime<Utc>,
    ) -> Result<SubmitOutcome, DatabaseError> {
        let result = sqlx::query(UPSERT_BEST_SCORE)
            .bind(submission.player_name.as_str())
            .bind(submission.mode.as_str())
            .bind(submission.difficulty.as_str())
            .bind(submission.score.value())
            .bind(at.timestamp_micros())
            .execute(&self.pool)
            .await?;

        let outcome = if result.rows_affected() > 0 {
            SubmitOutcome::Recorded
        } else {
            SubmitOutcome::Unchanged
        };
        tracing::debug!(
            "{} scored {} in {}/{}: {:?}",
            submission.player_name,
            submission.score,
            submission.mode,
            submission.difficulty,
            outcome
        );
        Ok(outcome)
    }
}

fn record_from_row(row: &SqliteRow) -> Result<LeaderboardRecord, DatabaseError> {
    let mode: String = row.try_get("mode")?;
    let difficulty: String = row.try_get("difficulty")?;
    let micros: i64 = row.try_get("updated_at")?;

    Ok(LeaderboardRecord {
        player_name: row.try_get("player_name")?,
        mode: mode
            .parse()
            .map_err(|_| DatabaseError::CorruptRow(format!("unknown mode {mode:?}")))?,
        difficulty: difficulty
            .parse()
            .map_err(|_| DatabaseError::CorruptRow(format!("unknown difficulty {difficulty:?}")))?,
        score: row.try_get("score")?,
        updated_at: DateTime::from_timestamp_micros(micros)
            .ok_or_else(|| DatabaseError::CorruptRow(format!("bad timestamp {micros}")))?,
    })
}

#[async_trait]
impl LeaderboardStore for SqliteLeaderboard {
    async fn submit(&self, submission: &ScoreSubmission) -> Result<SubmitOutcome, DatabaseError> {
        self.submit_at(submission, Utc::now()).await
    }

    async fn top_entries(
        &self,
        board: Board,
        page: PageRequest,
    ) -> Result<Vec<LeaderboardRecord>, DatabaseError> {
        let rows = sqlx::query(
            "SELECT player_name, mode, difficulty, score, updated_at FROM leaderboard_entries
             WHERE mode = ? AND difficulty = ?
             ORDER BY score DESC, updated_at ASC, player_name ASC
             LIMIT ? OFFSET ?",
        )
        .bind(board.mode.as_str())
        .bind(board.difficulty.as_str())
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(record_from_row).collect()
    }

    async fn count_entries(&self, board: Board) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar(
            "SELECT COUNT(*) FROM leaderboard_entries WHERE mode = ? AND difficulty = ?",
        )
        .bind(board.mode.as_str())
        .bind(board.difficulty.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn find_entry(
        &self,
        board: Board,
        player: &PlayerName,
    ) -> Result<Option<LeaderboardRecord>, DatabaseError> {
        let row = sqlx::query(
            "SELECT player_name, mode, difficulty, score, updated_at FROM leaderboard_entries
             WHERE player_name = ? AND mode = ? AND difficulty = ?",
        )
        .bind(player.as_str())
        .bind(board.mode.as_str())
        .bind(board.difficulty.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(record_from_row).transpose()
    }

    async fn rank_of(&self, entry: &LeaderboardRecord) -> Result<i64, DatabaseError> {
        let ahead: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM leaderboard_entries
             WHERE mode = ? AND difficulty = ?
             AND (score > ? OR (score = ? AND updated_at < ?))",
        )
        .bind(entry.mode.as_str())
        .bind(entry.difficulty.as_str())
        .bind(entry.score)
        .bind(entry.score)
        .bind(entry.updated_at.timestamp_micros())
        .fetch_one(&self.pool)
        .await?;
        Ok(ahead + 1)
    }
}
