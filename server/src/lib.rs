//! HTTP front end for the trivia leaderboard.
//!
//! Two endpoints, both answering CORS preflights and carrying
//! `Access-Control-Allow-Origin: *` on every response:
//!
//! - `GET /api/leaderboard` ranked page for a (mode, difficulty) board, plus
//!   the rank of an optional `playerName`
//! - `POST /api/submit` keeps a player's best score

use std::sync::Arc;

use axum::{
    http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue},
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::info;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::ServerConfig;
use routes::{leaderboard_handler, leaderboard_preflight, submit_handler, submit_preflight};
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/leaderboard",
            get(leaderboard_handler).options(leaderboard_preflight),
        )
        .route("/api/submit", post(submit_handler).options(submit_preflight))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: ServerConfig) -> std::io::Result<()> {
    info!("Opening database...");
    let state = AppState::connect(&config.database).await;

    let address = config.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
