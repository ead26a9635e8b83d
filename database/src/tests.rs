mod store_tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use types::{Difficulty, Mode, PageRequest, PlayerName, Score, ScoreSubmission};

    use crate::*;

    pub async fn setup_test_db() -> SqliteLeaderboard {
        SqliteLeaderboard::connect(&DatabaseConfig::new("sqlite::memory:"))
            .await
            .expect("Failed to create test database")
    }

    fn submission(name: &str, mode: Mode, difficulty: Difficulty, score: i64) -> ScoreSubmission {
        ScoreSubmission {
            player_name: PlayerName::parse(name).unwrap(),
            mode,
            difficulty,
            score: Score::new(score).unwrap(),
        }
    }

    fn guess_normal(name: &str, score: i64) -> ScoreSubmission {
        submission(name, Mode::Guess, Difficulty::Normal, score)
    }

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap() + Duration::seconds(seconds)
    }

    const GUESS_NORMAL: Board = Board {
        mode: Mode::Guess,
        difficulty: Difficulty::Normal,
    };

    #[tokio::test]
    async fn test_first_submission_is_recorded() {
        let store = setup_test_db().await;

        let outcome = store.submit_at(&guess_normal("Ana", 80), at(0)).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Recorded);

        let name = PlayerName::parse("Ana").unwrap();
        let entry = store.find_entry(GUESS_NORMAL, &name).await.unwrap().unwrap();
        assert_eq!(entry.score, 80);
        assert_eq!(entry.updated_at, at(0));
    }

    #[tokio::test]
    async fn test_lower_or_equal_score_is_a_no_op() {
        let store = setup_test_db().await;
        let name = PlayerName::parse("Ana").unwrap();

        store.submit_at(&guess_normal("Ana", 80), at(0)).await.unwrap();
        let lower = store.submit_at(&guess_normal("Ana", 50), at(10)).await.unwrap();
        let equal = store.submit_at(&guess_normal("Ana", 80), at(20)).await.unwrap();

        assert!(!lower.updated());
        assert!(!equal.updated());
        let entry = store.find_entry(GUESS_NORMAL, &name).await.unwrap().unwrap();
        assert_eq!(entry.score, 80);
        assert_eq!(entry.updated_at, at(0));
    }

    #[tokio::test]
    async fn test_higher_score_updates_score_and_timestamp() {
        let store = setup_test_db().await;
        let name = PlayerName::parse("Ana").unwrap();

        store.submit_at(&guess_normal("Ana", 80), at(0)).await.unwrap();
        let outcome = store.submit_at(&guess_normal("Ana", 81), at(30)).await.unwrap();

        assert!(outcome.updated());
        let entry = store.find_entry(GUESS_NORMAL, &name).await.unwrap().unwrap();
        assert_eq!(entry.score, 81);
        assert_eq!(entry.updated_at, at(30));
        assert_eq!(store.count_entries(GUESS_NORMAL).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sequential_submissions_keep_the_running_maximum() {
        let store = setup_test_db().await;
        let name = PlayerName::parse("Bo").unwrap();
        let scores = [12, 7, 40, 40, 3, 55, 54, 0, 100000, 99];

        let mut best = 0;
        for (i, score) in scores.into_iter().enumerate() {
            store
                .submit_at(&guess_normal("Bo", score), at(i as i64))
                .await
                .unwrap();
            best = best.max(score);
            let entry = store.find_entry(GUESS_NORMAL, &name).await.unwrap().unwrap();
            assert_eq!(entry.score, best);
        }
    }

    #[tokio::test]
    async fn test_boards_are_independent() {
        let store = setup_test_db().await;
        store.submit_at(&guess_normal("Ana", 80), at(0)).await.unwrap();
        let outcome = store
            .submit_at(&submission("Ana", Mode::Guess, Difficulty::Hard, 10), at(1))
            .await
            .unwrap();
        assert!(outcome.updated());
        store
            .submit_at(&submission("Ana", Mode::HigherLower, Difficulty::Normal, 3), at(2))
            .await
            .unwrap();

        assert_eq!(store.count_entries(GUESS_NORMAL).await.unwrap(), 1);
        let hard = Board::new(Mode::Guess, Difficulty::Hard);
        let entries = store.top_entries(hard, PageRequest::default()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].score, 10);
    }

    #[tokio::test]
    async fn test_ordering_by_score_then_earliest() {
        let store = setup_test_db().await;
        store.submit_at(&guess_normal("late", 50), at(30)).await.unwrap();
        store.submit_at(&guess_normal("top", 90), at(40)).await.unwrap();
        store.submit_at(&guess_normal("early", 50), at(10)).await.unwrap();
        store.submit_at(&guess_normal("low", 5), at(0)).await.unwrap();

        let entries = store
            .top_entries(GUESS_NORMAL, PageRequest::default())
            .await
            .unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.player_name.as_str()).collect();
        assert_eq!(names, ["top", "early", "late", "low"]);

        for pair in entries.windows(2) {
            assert!(pair[0].ranks_ahead_of(&pair[1]));
        }
    }

    #[tokio::test]
    async fn test_pagination_windows() {
        let store = setup_test_db().await;
        for i in 0..7 {
            store
                .submit_at(&guess_normal(&format!("p{i}"), 100 - i), at(i))
                .await
                .unwrap();
        }

        let page = store
            .top_entries(GUESS_NORMAL, PageRequest::new(3, 2))
            .await
            .unwrap();
        let names: Vec<_> = page.iter().map(|e| e.player_name.as_str()).collect();
        assert_eq!(names, ["p2", "p3", "p4"]);

        let past_end = store
            .top_entries(GUESS_NORMAL, PageRequest::new(10, 50))
            .await
            .unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_rank_counts_entries_strictly_ahead() {
        let store = setup_test_db().await;
        store.submit_at(&guess_normal("first", 90), at(0)).await.unwrap();
        store.submit_at(&guess_normal("tied_early", 70), at(5)).await.unwrap();
        store.submit_at(&guess_normal("tied_late", 70), at(9)).await.unwrap();
        store.submit_at(&guess_normal("last", 10), at(1)).await.unwrap();

        let rank = |name: &str| {
            let name = PlayerName::parse(name).unwrap();
            let store = &store;
            async move {
                let entry = store.find_entry(GUESS_NORMAL, &name).await.unwrap().unwrap();
                store.rank_of(&entry).await.unwrap()
            }
        };

        assert_eq!(rank("first").await, 1);
        assert_eq!(rank("tied_early").await, 2);
        assert_eq!(rank("tied_late").await, 3);
        assert_eq!(rank("last").await, 4);
    }

    #[tokio::test]
    async fn test_query_assembles_page_and_rank() {
        let store = setup_test_db().await;
        for (i, (name, score)) in [("a", 30), ("b", 20), ("c", 10)].into_iter().enumerate() {
            store
                .submit_at(&guess_normal(name, score), at(i as i64))
                .await
                .unwrap();
        }
        let c = PlayerName::parse("c").unwrap();

        let page = store
            .query(GUESS_NORMAL, PageRequest::new(1, 0), Some(&c))
            .await
            .unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].player_name, "a");
        assert_eq!(page.player_rank, Some(3));

        let stranger = PlayerName::parse("nobody").unwrap();
        let page = store
            .query(GUESS_NORMAL, PageRequest::new(1, 0), Some(&stranger))
            .await
            .unwrap();
        assert_eq!(page.player_rank, None);
    }

    #[tokio::test]
    async fn test_query_on_empty_board() {
        let store = setup_test_db().await;
        let board = Board::new(Mode::Guess10, Difficulty::Hard);
        let ana = PlayerName::parse("Ana").unwrap();

        let page = store
            .query(board, PageRequest::new(1, 0), Some(&ana))
            .await
            .unwrap();
        assert_eq!(page.total, 0);
        assert!(page.entries.is_empty());
        assert_eq!(page.player_rank, None);
    }

    #[tokio::test]
    async fn test_unique_top_score_ranks_first() {
        let store = setup_test_db().await;
        store.submit_at(&guess_normal("champ", 500), at(100)).await.unwrap();
        for i in 0..5 {
            store
                .submit_at(&guess_normal(&format!("p{i}"), 499 - i), at(i))
                .await
                .unwrap();
        }
        let champ = PlayerName::parse("champ").unwrap();
        let page = store
            .query(GUESS_NORMAL, PageRequest::default(), Some(&champ))
            .await
            .unwrap();
        assert_eq!(page.player_rank, Some(1));
    }
}
