pub mod sqlite;
pub mod traits;

pub use sqlite::SqliteLeaderboard;
pub use traits::LeaderboardStore;
