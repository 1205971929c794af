//! Rewards Router

use crate::application::config::RewardsConfig;
use crate::domain::policy::{AcceptAllScores, ScoreValidator};
use crate::domain::repository::{
    GameSessionRepository, LeaderboardRepository, RewardLedgerRepository, UserRepository,
    WithdrawalLedgerRepository,
};
use crate::infra::postgres::PgRewardsRepository;
use crate::presentation::handlers::{self, RewardsAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the rewards router with PostgreSQL repository and the
/// default (accept-all) score-validation policy
pub fn rewards_router(repo: PgRewardsRepository, config: RewardsConfig) -> Router {
    rewards_router_generic(repo, config, Arc::new(AcceptAllScores))
}

/// Create a generic rewards router for any repository implementation
/// and score-validation policy
pub fn rewards_router_generic<R>(
    repo: R,
    config: RewardsConfig,
    score_validator: Arc<dyn ScoreValidator>,
) -> Router
where
    R: UserRepository
        + GameSessionRepository
        + RewardLedgerRepository
        + WithdrawalLedgerRepository
        + LeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let state = RewardsAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        score_validator,
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/start-session", post(handlers::start_session::<R>))
        .route("/submit-score", post(handlers::submit_score::<R>))
        .route("/withdraw", post(handlers::request_withdrawal::<R>))
        .route("/leaderboard", get(handlers::leaderboard::<R>))
        .route("/me/{username}", get(handlers::profile::<R>))
        .with_state(state)
}
