use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS},
        StatusCode,
    },
    response::IntoResponse,
    Json,
};
use database::Board;
use types::{
    Difficulty, EntryView, LeaderboardResponse, Mode, PageRequest, PlayerName, ScoreSubmission,
    SubmitResponse,
};

use crate::{error::ApiError, state::AppState};

/// Raw query pairs in request order, so the first occurrence of a key wins.
type QueryPairs = Vec<(String, String)>;

fn first<'a>(pairs: &'a QueryPairs, key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

pub async fn leaderboard_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let store = state.store()?;

    let mode: Mode = first(&params, "mode").unwrap_or("").parse()?;
    let difficulty = Difficulty::from_param(first(&params, "difficulty"))?;
    let page = PageRequest::from_params(first(&params, "limit"), first(&params, "offset"));
    // a name that could never have been stored just means "no rank"
    let player = first(&params, "playerName").and_then(|name| PlayerName::parse(name).ok());

    let result = store
        .query(Board::new(mode, difficulty), page, player.as_ref())
        .await?;

    Ok(Json(LeaderboardResponse {
        ok: true,
        mode,
        difficulty,
        limit: page.limit,
        offset: page.offset,
        total: result.total,
        player_rank: result.player_rank,
        entries: result.entries.into_iter().map(EntryView::from).collect(),
    }))
}

pub async fn submit_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, ApiError> {
    let store = state.store()?;
    let submission = ScoreSubmission::from_json(&body)?;
    let outcome = store.submit(&submission).await?;

    if outcome.updated() {
        tracing::info!(
            "New best for {} in {}/{}: {}",
            submission.player_name,
            submission.mode,
            submission.difficulty,
            submission.score
        );
    }
    Ok(Json(SubmitResponse::new(outcome.updated())))
}

fn preflight(methods: &'static str) -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_METHODS, methods),
            (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

pub async fn leaderboard_preflight() -> impl IntoResponse {
    preflight("GET, OPTIONS")
}

pub async fn submit_preflight() -> impl IntoResponse {
    preflight("POST, OPTIONS")
}
