pub mod professor;
pub mod session;
pub mod standings;
pub mod submit;

pub use professor::{Professor, RatingComment, Roster, RosterError};
pub use session::{Choice, GameError, GameSession, RoundOutcome};
pub use standings::{fetch_standings, render_standings};
pub use submit::record_final_score;
