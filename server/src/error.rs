use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DatabaseError;
use thiserror::Error;
use types::{ErrorResponse, ValidationError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database not configured")]
    StoreUnavailable,

    #[error("Database error")]
    Database(#[from] DatabaseError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreUnavailable | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(err) => tracing::debug!("Rejected request: {err}"),
            ApiError::StoreUnavailable => tracing::warn!("Request arrived with no database attached"),
            ApiError::Database(err) => tracing::error!("Leaderboard storage failed: {err}"),
        }

        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
