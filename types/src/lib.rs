pub mod api;
pub mod error;
pub mod mode;
pub mod page;
pub mod player;
pub mod score;
pub mod submission;

pub use api::{EntryView, ErrorResponse, LeaderboardResponse, SubmitResponse};
pub use error::ValidationError;
pub use mode::{Difficulty, Mode};
pub use page::PageRequest;
pub use player::PlayerName;
pub use score::Score;
pub use submission::ScoreSubmission;
