//! Unit tests for rewards crate
//!
//! Use-case tests run against an in-memory ledger that implements the
//! repository traits with the same conditional-debit semantics as the
//! PostgreSQL implementation.

#[cfg(test)]
mod award_tests {
    use crate::domain::services::*;
    use crate::domain::value_objects::Game;

    #[test]
    fn test_award_matches_contract() {
        let schedule = AwardSchedule::default();
        // awarded == min(score / 10, 100) for every known game
        for game in Game::ALL {
            for score in [0, 1, 9, 10, 55, 999, 1_000, 123_456] {
                let expected = (score / 10).min(100);
                assert_eq!(compute_award(game, score, &schedule), expected);
                assert!(compute_award(game, score, &schedule) >= 0);
            }
        }
    }

    #[test]
    fn test_award_999_word_is_99() {
        let schedule = AwardSchedule::default();
        assert_eq!(compute_award(Game::Word, 999, &schedule), 99);
    }

    #[test]
    fn test_award_deterministic() {
        let schedule = AwardSchedule::default();
        let a = compute_award(Game::Parking, 777, &schedule);
        let b = compute_award(Game::Parking, 777, &schedule);
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod username_tests {
    use crate::domain::value_objects::*;

    #[test]
    fn test_valid_usernames() {
        assert_eq!(Username::new("alice").unwrap().as_str(), "alice");
        assert_eq!(Username::new("a_b-c.d").unwrap().as_str(), "a_b-c.d");
        assert_eq!(Username::new("_tester_").unwrap().as_str(), "_tester_");
    }

    #[test]
    fn test_canonical_is_lowercase() {
        assert_eq!(Username::new("Alice").unwrap().as_str(), "alice");
        assert_eq!(Username::new("BOB99").unwrap().as_str(), "bob99");
    }

    #[test]
    fn test_nfkc_normalization() {
        // Full-width compatibility characters normalize to ASCII
        assert_eq!(Username::new("ａｌｉｃｅ").unwrap().as_str(), "alice");
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(Username::new("ab"), Err(UsernameError::TooShort));
        assert!(Username::new("a".repeat(30)).is_ok());
        assert_eq!(
            Username::new("a".repeat(31)),
            Err(UsernameError::TooLong)
        );
    }

    #[test]
    fn test_invalid_characters() {
        assert!(matches!(
            Username::new("ali ce"),
            Err(UsernameError::InvalidCharacter(' '))
        ));
        assert!(matches!(
            Username::new("ali@ce"),
            Err(UsernameError::InvalidCharacter('@'))
        ));
    }

    #[test]
    fn test_boundaries_and_dots() {
        assert_eq!(Username::new(".alice"), Err(UsernameError::InvalidBoundary));
        assert_eq!(Username::new("alice-"), Err(UsernameError::InvalidBoundary));
        assert_eq!(Username::new("al..ice"), Err(UsernameError::ConsecutiveDots));
        assert_eq!(Username::new("___"), Err(UsernameError::NoAlphanumeric));
    }
}

#[cfg(test)]
mod value_object_tests {
    use crate::domain::value_objects::*;

    #[test]
    fn test_game_codes_roundtrip() {
        for game in Game::ALL {
            assert_eq!(Game::from_code(game.code()), Some(game));
        }
    }

    #[test]
    fn test_unknown_game_rejected() {
        // Unknown identifiers must never default to a known game
        assert_eq!(Game::from_code("chess"), None);
        assert_eq!(Game::from_code(""), None);
        assert_eq!(Game::from_code("Word"), None);
    }

    #[test]
    fn test_withdrawal_status_codes() {
        assert_eq!(WithdrawalStatus::default(), WithdrawalStatus::Pending);
        assert_eq!(WithdrawalStatus::from_code("pending"), Some(WithdrawalStatus::Pending));
        assert_eq!(WithdrawalStatus::from_code("approved"), Some(WithdrawalStatus::Approved));
        assert_eq!(WithdrawalStatus::from_code("rejected"), Some(WithdrawalStatus::Rejected));
        assert_eq!(WithdrawalStatus::from_code("paid"), None);
    }

    #[test]
    fn test_rejected_releases_hold() {
        assert!(WithdrawalStatus::Pending.holds_points());
        assert!(WithdrawalStatus::Approved.holds_points());
        assert!(!WithdrawalStatus::Rejected.holds_points());
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::RewardsConfig;

    #[test]
    fn test_default_config() {
        let config = RewardsConfig::default();

        assert_eq!(config.award_schedule.score_divisor, 10);
        assert_eq!(config.award_schedule.word_cap, 100);
        assert_eq!(config.leaderboard_default_limit, 20);
        assert_eq!(config.leaderboard_max_limit, 100);
        assert_eq!(config.profile_rewards_limit, 50);
    }

    #[test]
    fn test_leaderboard_limit_resolution() {
        let config = RewardsConfig::default();

        assert_eq!(config.leaderboard_limit(None), 20);
        assert_eq!(config.leaderboard_limit(Some(5)), 5);
        assert_eq!(config.leaderboard_limit(Some(0)), 20);
        assert_eq!(config.leaderboard_limit(Some(-3)), 20);
        assert_eq!(config.leaderboard_limit(Some(10_000)), 100);
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_register_request_deserialization() {
        let json = r#"{"username":"alice","tonAddress":"EQabc","referredBy":"bob"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username, "alice");
        assert_eq!(request.ton_address.as_deref(), Some("EQabc"));
        assert_eq!(request.referred_by.as_deref(), Some("bob"));

        let json = r#"{"username":"alice"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert!(request.ton_address.is_none());
        assert!(request.referred_by.is_none());
    }

    #[test]
    fn test_submit_score_request_deserialization() {
        let json = r#"{"username":"alice","game":"word","score":999,"durationSec":42}"#;
        let request: SubmitScoreRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.game, "word");
        assert_eq!(request.score, 999);
        assert_eq!(request.duration_sec, 42);
    }

    #[test]
    fn test_submit_score_response_serialization() {
        let response = SubmitScoreResponse {
            ok: true,
            awarded: 99,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""ok":true"#));
        assert!(json.contains(r#""awarded":99"#));
    }

    #[test]
    fn test_withdraw_response_serialization() {
        let response = WithdrawResponse {
            ok: true,
            status: "pending".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""status":"pending""#));
    }

    #[test]
    fn test_register_response_omits_empty_message() {
        let response = RegisterResponse {
            ok: true,
            message: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("message"));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(RewardsError, StatusCode)> = vec![
            (RewardsError::UserNotFound, StatusCode::NOT_FOUND),
            (RewardsError::UserBanned, StatusCode::FORBIDDEN),
            (
                RewardsError::UnknownGame("chess".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                RewardsError::InvalidUsername("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (RewardsError::InvalidScore, StatusCode::BAD_REQUEST),
            (RewardsError::InvalidAmount, StatusCode::BAD_REQUEST),
            (
                RewardsError::ScoreRejected("implausible".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                RewardsError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert!(RewardsError::UserNotFound.to_string().contains("not found"));
        assert!(
            RewardsError::UnknownGame("chess".into())
                .to_string()
                .contains("chess")
        );
        assert!(RewardsError::InvalidAmount.to_string().contains("amount"));
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use crate::application::config::RewardsConfig;
    use crate::application::leaderboard::{LeaderboardInput, LeaderboardUseCase};
    use crate::application::profile::{ProfileInput, ProfileUseCase};
    use crate::application::register_user::{RegisterUserInput, RegisterUserUseCase};
    use crate::application::request_withdrawal::{
        RequestWithdrawalInput, RequestWithdrawalUseCase,
    };
    use crate::application::start_session::{StartSessionInput, StartSessionUseCase};
    use crate::application::submit_score::{SubmitScoreInput, SubmitScoreUseCase};
    use crate::domain::entities::{
        GameSession, LeaderboardEntry, REASON_SESSION_COMPLETED, Reward, User, WithdrawalRequest,
    };
    use crate::domain::policy::{AcceptAllScores, ScoreSubmission, ScoreValidator, Verdict};
    use crate::domain::repository::{
        DebitOutcome, GameSessionRepository, LeaderboardRepository, RewardLedgerRepository,
        UserRepository, WithdrawalLedgerRepository,
    };
    use crate::domain::value_objects::{Username, WithdrawalStatus};
    use crate::error::{RewardsError, RewardsResult};

    /// In-memory ledger with the same atomicity guarantees as the
    /// Postgres repository: balance checks and mutations happen under
    /// the users lock, never as separate read-then-write steps.
    #[derive(Default)]
    struct MemoryLedger {
        users: Mutex<HashMap<String, User>>,
        sessions: Mutex<Vec<GameSession>>,
        rewards: Mutex<Vec<Reward>>,
        withdrawals: Mutex<Vec<WithdrawalRequest>>,
    }

    impl MemoryLedger {
        fn balance_of(&self, username: &str) -> i64 {
            self.users.lock().unwrap().get(username).unwrap().balance
        }

        fn set_balance(&self, username: &str, balance: i64) {
            self.users
                .lock()
                .unwrap()
                .get_mut(username)
                .unwrap()
                .balance = balance;
        }

        fn ban(&self, username: &str) {
            self.users
                .lock()
                .unwrap()
                .get_mut(username)
                .unwrap()
                .is_banned = true;
        }
    }

    impl UserRepository for MemoryLedger {
        async fn create_if_absent(&self, user: &User) -> RewardsResult<bool> {
            let mut users = self.users.lock().unwrap();
            if users.contains_key(user.username.as_str()) {
                return Ok(false);
            }
            users.insert(user.username.as_str().to_string(), user.clone());
            Ok(true)
        }

        async fn find_by_username(&self, username: &Username) -> RewardsResult<Option<User>> {
            Ok(self.users.lock().unwrap().get(username.as_str()).cloned())
        }
    }

    impl GameSessionRepository for MemoryLedger {
        async fn create(&self, session: &GameSession) -> RewardsResult<()> {
            self.sessions.lock().unwrap().push(session.clone());
            Ok(())
        }
    }

    impl RewardLedgerRepository for MemoryLedger {
        async fn credit(&self, reward: &Reward) -> RewardsResult<i64> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .get_mut(reward.username.as_str())
                .ok_or(RewardsError::UserNotFound)?;
            user.balance += reward.points_awarded;
            let balance_after = user.balance;
            self.rewards.lock().unwrap().push(reward.clone());
            Ok(balance_after)
        }

        async fn recent_for_user(
            &self,
            username: &Username,
            limit: i64,
        ) -> RewardsResult<Vec<Reward>> {
            let mut rewards: Vec<Reward> = self
                .rewards
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.username == *username)
                .cloned()
                .collect();
            rewards.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            rewards.truncate(limit as usize);
            Ok(rewards)
        }
    }

    impl WithdrawalLedgerRepository for MemoryLedger {
        async fn debit(&self, request: &WithdrawalRequest) -> RewardsResult<DebitOutcome> {
            let mut users = self.users.lock().unwrap();
            let Some(user) = users.get_mut(request.username.as_str()) else {
                return Ok(DebitOutcome::InsufficientBalance);
            };
            if user.balance < request.points {
                return Ok(DebitOutcome::InsufficientBalance);
            }
            user.balance -= request.points;
            let balance_after = user.balance;
            self.withdrawals.lock().unwrap().push(request.clone());
            Ok(DebitOutcome::Debited { balance_after })
        }
    }

    impl LeaderboardRepository for MemoryLedger {
        async fn top_by_points(&self, limit: i64) -> RewardsResult<Vec<LeaderboardEntry>> {
            let mut totals: HashMap<String, i64> = HashMap::new();
            for reward in self.rewards.lock().unwrap().iter() {
                *totals.entry(reward.username.as_str().to_string()).or_default() +=
                    reward.points_awarded;
            }
            let mut entries: Vec<LeaderboardEntry> = totals
                .into_iter()
                .map(|(username, total_points)| LeaderboardEntry {
                    username,
                    total_points,
                })
                .collect();
            entries.sort_by(|a, b| b.total_points.cmp(&a.total_points));
            entries.truncate(limit as usize);
            Ok(entries)
        }
    }

    async fn register(ledger: &Arc<MemoryLedger>, username: &str) {
        RegisterUserUseCase::new(ledger.clone())
            .execute(RegisterUserInput {
                username: username.to_string(),
                ton_address: None,
                referred_by: None,
            })
            .await
            .unwrap();
    }

    fn submit_use_case(
        ledger: &Arc<MemoryLedger>,
    ) -> SubmitScoreUseCase<MemoryLedger, MemoryLedger> {
        SubmitScoreUseCase::new(
            ledger.clone(),
            ledger.clone(),
            Arc::new(RewardsConfig::default()),
            Arc::new(AcceptAllScores),
        )
    }

    fn submit_input(username: &str, game: &str, score: i64) -> SubmitScoreInput {
        SubmitScoreInput {
            username: username.to_string(),
            game: game.to_string(),
            score,
            duration_sec: 60,
        }
    }

    fn withdraw_input(username: &str, points: i64) -> RequestWithdrawalInput {
        RequestWithdrawalInput {
            username: username.to_string(),
            ton_address: "EQtest".to_string(),
            points,
        }
    }

    #[tokio::test]
    async fn test_register_is_idempotent() {
        let ledger = Arc::new(MemoryLedger::default());
        let use_case = RegisterUserUseCase::new(ledger.clone());

        let first = use_case
            .execute(RegisterUserInput {
                username: "alice".to_string(),
                ton_address: Some("EQabc".to_string()),
                referred_by: None,
            })
            .await
            .unwrap();
        assert!(first.created);

        let created_at = ledger.users.lock().unwrap()["alice"].created_at;

        let second = use_case
            .execute(RegisterUserInput {
                username: "alice".to_string(),
                ton_address: Some("EQother".to_string()),
                referred_by: None,
            })
            .await
            .unwrap();
        assert!(!second.created);

        // The stored record is unchanged after the first call
        let users = ledger.users.lock().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users["alice"].created_at, created_at);
        assert_eq!(users["alice"].ton_address.as_deref(), Some("EQabc"));
    }

    #[tokio::test]
    async fn test_register_canonicalizes_username() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "Alice").await;

        // Mixed-case re-registration hits the same canonical record
        let second = RegisterUserUseCase::new(ledger.clone())
            .execute(RegisterUserInput {
                username: "ALICE".to_string(),
                ton_address: None,
                referred_by: None,
            })
            .await
            .unwrap();
        assert!(!second.created);
        assert!(ledger.users.lock().unwrap().contains_key("alice"));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_username() {
        let ledger = Arc::new(MemoryLedger::default());
        let result = RegisterUserUseCase::new(ledger.clone())
            .execute(RegisterUserInput {
                username: "a b".to_string(),
                ton_address: None,
                referred_by: None,
            })
            .await;
        assert!(matches!(result, Err(RewardsError::InvalidUsername(_))));
        assert!(ledger.users.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_start_session_creates_placeholder() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "alice").await;

        let use_case = StartSessionUseCase::new(ledger.clone(), ledger.clone());
        use_case
            .execute(StartSessionInput {
                username: "alice".to_string(),
                game: "tiles".to_string(),
            })
            .await
            .unwrap();

        let sessions = ledger.sessions.lock().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].score, 0);
        assert_eq!(sessions[0].duration_sec, 0);
    }

    #[tokio::test]
    async fn test_start_session_banned_user_forbidden() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "alice").await;
        ledger.ban("alice");

        let use_case = StartSessionUseCase::new(ledger.clone(), ledger.clone());
        let result = use_case
            .execute(StartSessionInput {
                username: "alice".to_string(),
                game: "word".to_string(),
            })
            .await;

        assert!(matches!(result, Err(RewardsError::UserBanned)));
        assert!(ledger.sessions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_start_session_unknown_user() {
        let ledger = Arc::new(MemoryLedger::default());
        let use_case = StartSessionUseCase::new(ledger.clone(), ledger.clone());
        let result = use_case
            .execute(StartSessionInput {
                username: "ghost".to_string(),
                game: "word".to_string(),
            })
            .await;
        assert!(matches!(result, Err(RewardsError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_submit_score_999_awards_99() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "alice").await;

        let output = submit_use_case(&ledger)
            .execute(submit_input("alice", "word", 999))
            .await
            .unwrap();

        assert_eq!(output.awarded, 99);
        assert_eq!(output.balance, 99);
        assert_eq!(ledger.balance_of("alice"), 99);

        // Exactly one reward row with the awarded points
        let rewards = ledger.rewards.lock().unwrap();
        assert_eq!(rewards.len(), 1);
        assert_eq!(rewards[0].points_awarded, 99);
        assert_eq!(rewards[0].reason, REASON_SESSION_COMPLETED);
    }

    #[tokio::test]
    async fn test_submit_score_unknown_game_rejected() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "alice").await;

        let result = submit_use_case(&ledger)
            .execute(submit_input("alice", "chess", 500))
            .await;

        assert!(matches!(result, Err(RewardsError::UnknownGame(_))));
        assert!(ledger.rewards.lock().unwrap().is_empty());
        assert_eq!(ledger.balance_of("alice"), 0);
    }

    #[tokio::test]
    async fn test_submit_score_banned_user_forbidden() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "alice").await;
        ledger.ban("alice");

        let result = submit_use_case(&ledger)
            .execute(submit_input("alice", "word", 500))
            .await;

        assert!(matches!(result, Err(RewardsError::UserBanned)));
        assert!(ledger.rewards.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_score_negative_rejected() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "alice").await;

        let result = submit_use_case(&ledger)
            .execute(submit_input("alice", "word", -1))
            .await;

        assert!(matches!(result, Err(RewardsError::InvalidScore)));
    }

    #[tokio::test]
    async fn test_score_policy_can_reject() {
        struct RejectAll;
        impl ScoreValidator for RejectAll {
            fn validate(&self, _submission: &ScoreSubmission<'_>) -> Verdict {
                Verdict::Reject("implausible score".to_string())
            }
        }

        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "alice").await;

        let use_case = SubmitScoreUseCase::new(
            ledger.clone(),
            ledger.clone(),
            Arc::new(RewardsConfig::default()),
            Arc::new(RejectAll),
        );
        let result = use_case.execute(submit_input("alice", "word", 999)).await;

        assert!(matches!(result, Err(RewardsError::ScoreRejected(_))));
        assert!(ledger.rewards.lock().unwrap().is_empty());
        assert_eq!(ledger.balance_of("alice"), 0);
    }

    #[tokio::test]
    async fn test_withdrawal_holds_points_immediately() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "alice").await;
        ledger.set_balance("alice", 100);

        let use_case = RequestWithdrawalUseCase::new(ledger.clone(), ledger.clone());
        let output = use_case.execute(withdraw_input("alice", 60)).await.unwrap();

        assert_eq!(output.status, WithdrawalStatus::Pending);
        assert_eq!(output.balance, 40);
        assert_eq!(ledger.balance_of("alice"), 40);
        assert_eq!(ledger.withdrawals.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_withdrawal_overdraw_rejected_without_effects() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "alice").await;
        ledger.set_balance("alice", 50);

        let use_case = RequestWithdrawalUseCase::new(ledger.clone(), ledger.clone());
        let result = use_case.execute(withdraw_input("alice", 51)).await;

        assert!(matches!(result, Err(RewardsError::InvalidAmount)));
        // No request record and no balance change
        assert!(ledger.withdrawals.lock().unwrap().is_empty());
        assert_eq!(ledger.balance_of("alice"), 50);
    }

    #[tokio::test]
    async fn test_withdrawal_non_positive_rejected() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "alice").await;
        ledger.set_balance("alice", 100);

        let use_case = RequestWithdrawalUseCase::new(ledger.clone(), ledger.clone());
        for points in [0, -5] {
            let result = use_case.execute(withdraw_input("alice", points)).await;
            assert!(matches!(result, Err(RewardsError::InvalidAmount)));
        }
        assert_eq!(ledger.balance_of("alice"), 100);
    }

    #[tokio::test]
    async fn test_withdrawal_banned_user_forbidden() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "alice").await;
        ledger.set_balance("alice", 100);
        ledger.ban("alice");

        let use_case = RequestWithdrawalUseCase::new(ledger.clone(), ledger.clone());
        let result = use_case.execute(withdraw_input("alice", 10)).await;

        assert!(matches!(result, Err(RewardsError::UserBanned)));
        assert_eq!(ledger.balance_of("alice"), 100);
    }

    #[tokio::test]
    async fn test_concurrent_withdrawals_cannot_overdraw() {
        // Regression: two concurrent 60-point requests against a
        // balance of 100 must not both pass the sufficiency check.
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "alice").await;
        ledger.set_balance("alice", 100);

        let spawn_withdrawal = |ledger: Arc<MemoryLedger>| {
            tokio::spawn(async move {
                RequestWithdrawalUseCase::new(ledger.clone(), ledger)
                    .execute(withdraw_input("alice", 60))
                    .await
            })
        };

        let a = spawn_withdrawal(ledger.clone());
        let b = spawn_withdrawal(ledger.clone());
        let results = [a.await.unwrap(), b.await.unwrap()];

        let successes = results.iter().filter(|r| r.is_ok()).count();
        let rejections = results
            .iter()
            .filter(|r| matches!(r, Err(RewardsError::InvalidAmount)))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(rejections, 1);
        assert_eq!(ledger.balance_of("alice"), 40);
        assert_eq!(ledger.withdrawals.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_leaderboard_orders_by_earned_points() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "a").await;
        register(&ledger, "b").await;

        // a earns 50 + 20, b earns 30
        let submit = submit_use_case(&ledger);
        submit.execute(submit_input("a", "word", 500)).await.unwrap();
        submit.execute(submit_input("b", "tiles", 300)).await.unwrap();
        submit.execute(submit_input("a", "parking", 200)).await.unwrap();

        let use_case =
            LeaderboardUseCase::new(ledger.clone(), Arc::new(RewardsConfig::default()));
        let output = use_case
            .execute(LeaderboardInput { limit: None })
            .await
            .unwrap();

        assert_eq!(output.entries.len(), 2);
        assert_eq!(output.entries[0].username, "a");
        assert_eq!(output.entries[0].total_points, 70);
        assert_eq!(output.entries[1].username, "b");
        assert_eq!(output.entries[1].total_points, 30);
    }

    #[tokio::test]
    async fn test_leaderboard_ranks_earned_not_held() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "a").await;
        register(&ledger, "b").await;

        let submit = submit_use_case(&ledger);
        submit.execute(submit_input("a", "word", 500)).await.unwrap();
        submit.execute(submit_input("b", "word", 300)).await.unwrap();

        // a withdraws everything; the leaderboard position is unchanged
        RequestWithdrawalUseCase::new(ledger.clone(), ledger.clone())
            .execute(withdraw_input("a", 50))
            .await
            .unwrap();

        let output = LeaderboardUseCase::new(ledger.clone(), Arc::new(RewardsConfig::default()))
            .execute(LeaderboardInput { limit: None })
            .await
            .unwrap();

        assert_eq!(output.entries[0].username, "a");
        assert_eq!(output.entries[0].total_points, 50);
        assert_eq!(ledger.balance_of("a"), 0);
    }

    #[tokio::test]
    async fn test_profile_returns_balance_and_recent_rewards() {
        let ledger = Arc::new(MemoryLedger::default());
        register(&ledger, "alice").await;

        let submit = submit_use_case(&ledger);
        submit.execute(submit_input("alice", "word", 100)).await.unwrap();
        submit.execute(submit_input("alice", "tiles", 200)).await.unwrap();

        let use_case = ProfileUseCase::new(
            ledger.clone(),
            ledger.clone(),
            Arc::new(RewardsConfig::default()),
        );
        let output = use_case
            .execute(ProfileInput {
                username: "alice".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user.balance, 30);
        assert_eq!(output.rewards.len(), 2);
    }

    #[tokio::test]
    async fn test_profile_unknown_user() {
        let ledger = Arc::new(MemoryLedger::default());
        let use_case = ProfileUseCase::new(
            ledger.clone(),
            ledger.clone(),
            Arc::new(RewardsConfig::default()),
        );
        let result = use_case
            .execute(ProfileInput {
                username: "ghost".to_string(),
            })
            .await;
        assert!(matches!(result, Err(RewardsError::UserNotFound)));
    }
}
