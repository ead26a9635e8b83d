use async_trait::async_trait;
use types::{PageRequest, PlayerName, ScoreSubmission};

use crate::models::{Board, LeaderboardPage, LeaderboardRecord, SubmitOutcome};
use crate::DatabaseError;

#[async_trait]
pub trait LeaderboardStore: Send + Sync {
    /// Keeps the best score per (player, mode, difficulty). Must be a single
    /// atomic step so concurrent submissions converge on the maximum.
    async fn submit(&self, submission: &ScoreSubmission) -> Result<SubmitOutcome, DatabaseError>;

    /// Entries ordered by score descending, then earliest `updated_at`.
    async fn top_entries(
        &self,
        board: Board,
        page: PageRequest,
    ) -> Result<Vec<LeaderboardRecord>, DatabaseError>;

    async fn count_entries(&self, board: Board) -> Result<i64, DatabaseError>;

    async fn find_entry(
        &self,
        board: Board,
        player: &PlayerName,
    ) -> Result<Option<LeaderboardRecord>, DatabaseError>;

    /// 1-based rank: one plus the number of entries that rank strictly ahead.
    async fn rank_of(&self, entry: &LeaderboardRecord) -> Result<i64, DatabaseError>;

    async fn query(
        &self,
        board: Board,
        page: PageRequest,
        player: Option<&PlayerName>,
    ) -> Result<LeaderboardPage, DatabaseError> {
        let entries = self.top_entries(board, page).await?;
        let total = self.count_entries(board).await?;

        let player_rank = match player {
            Some(player) => match self.find_entry(board, player).await? {
                Some(entry) => Some(self.rank_of(&entry).await?),
                None => None,
            },
            None => None,
        };

        Ok(LeaderboardPage {
            board,
            page,
            total,
            player_rank,
            entries,
        })
    }
}
