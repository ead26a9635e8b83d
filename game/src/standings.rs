use database::{Board, LeaderboardPage, LeaderboardStore};
use types::{Difficulty, Mode, PageRequest, PlayerName};

/// Top of one board plus the player's own rank. Read failures are logged and
/// give `None`, like a failed submission.
pub async fn fetch_standings(
    store: &dyn LeaderboardStore,
    mode: Mode,
    difficulty: Difficulty,
    player_name: &str,
) -> Option<LeaderboardPage> {
    // an unusable name just means no rank
    let player = PlayerName::parse(player_name).ok();
    match store
        .query(
            Board::new(mode, difficulty),
            PageRequest::default(),
            player.as_ref(),
        )
        .await
    {
        Ok(page) => Some(page),
        Err(err) => {
            log::error!("Failed to load {mode}/{difficulty} leaderboard: {err}");
            None
        }
    }
}

/// Terminal rendering of a board. The player's rank is called out only when
/// they fall below the listed entries.
pub fn render_standings(page: &LeaderboardPage) -> String {
    let mut lines = vec![format!(
        "{}/{} ({} players)",
        page.board.mode, page.board.difficulty, page.total
    )];

    if page.entries.is_empty() {
        lines.push("  No scores yet. Be the first!".to_string());
        return lines.join("\n");
    }

    let last_listed = page.page.offset + page.entries.len() as i64;
    if let Some(rank) = page.player_rank.filter(|&rank| rank > last_listed) {
        lines.push(format!("  Your rank: #{rank}"));
    }
    for (i, entry) in page.entries.iter().enumerate() {
        lines.push(format!(
            "  {:>2}. {} {}",
            page.page.offset + i as i64 + 1,
            entry.player_name,
            entry.score
        ));
    }
    lines.join("\n")
}
