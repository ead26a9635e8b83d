use thiserror::Error;

/// A request that was rejected before touching storage.
///
/// The `Display` text is what clients see in the `error` field, so keep the
/// wording stable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid JSON body")]
    MalformedBody,

    #[error("Invalid player name")]
    PlayerName,

    #[error("Invalid game mode")]
    Mode,

    #[error("Invalid difficulty")]
    Difficulty,

    #[error("Invalid score")]
    Score,
}
