use database::{LeaderboardStore, SubmitOutcome};
use rand::Rng;
use types::PlayerName;

use crate::session::GameSession;

/// Sends the session's score to the leaderboard. Failures are logged and
/// swallowed so a broken leaderboard never interrupts play; resubmitting the
/// same score is harmless because only a strictly higher score changes a row.
pub async fn record_final_score<R: Rng>(
    store: &dyn LeaderboardStore,
    player_name: &str,
    session: &GameSession<R>,
) -> Option<SubmitOutcome> {
    let submission = match PlayerName::parse(player_name)
        .and_then(|player| session.final_submission(&player))
    {
        Ok(submission) => submission,
        Err(err) => {
            log::warn!("Not submitting score {}: {err}", session.score());
            return None;
        }
    };

    match store.submit(&submission).await {
        Ok(outcome) => {
            log::info!(
                "Submitted {} for {} in {}/{}: {outcome:?}",
                submission.score,
                submission.player_name,
                submission.mode,
                submission.difficulty
            );
            Some(outcome)
        }
        Err(err) => {
            log::error!("Failed to submit leaderboard score: {err}");
            None
        }
    }
}
