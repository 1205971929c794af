//! HTTP Handlers

use crate::application::config::RewardsConfig;
use crate::application::leaderboard::{LeaderboardInput, LeaderboardUseCase};
use crate::application::profile::{ProfileInput, ProfileUseCase};
use crate::application::register_user::{RegisterUserInput, RegisterUserUseCase};
use crate::application::request_withdrawal::{RequestWithdrawalInput, RequestWithdrawalUseCase};
use crate::application::start_session::{StartSessionInput, StartSessionUseCase};
use crate::application::submit_score::{SubmitScoreInput, SubmitScoreUseCase};
use crate::domain::policy::ScoreValidator;
use crate::domain::repository::{
    GameSessionRepository, LeaderboardRepository, RewardLedgerRepository, UserRepository,
    WithdrawalLedgerRepository,
};
use crate::error::RewardsResult;
use crate::presentation::dto::{
    LeaderboardEntryResponse, LeaderboardQuery, ProfileResponse, RegisterRequest,
    RegisterResponse, StartSessionRequest, StartSessionResponse, SubmitScoreRequest,
    SubmitScoreResponse, WithdrawRequest, WithdrawResponse,
};
use axum::Json;
use axum::extract::{Path, Query, State};
use std::sync::Arc;

/// Shared state for rewards handlers
#[derive(Clone)]
pub struct RewardsAppState<R>
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
    pub repo: Arc<R>,
    pub config: Arc<RewardsConfig>,
    pub score_validator: Arc<dyn ScoreValidator>,
}

/// POST /api/register
pub async fn register<R>(
    State(state): State<RewardsAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> RewardsResult<Json<RegisterResponse>>
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
    let use_case = RegisterUserUseCase::new(state.repo.clone());

    let output = use_case
        .execute(RegisterUserInput {
            username: req.username,
            ton_address: req.ton_address,
            referred_by: req.referred_by,
        })
        .await?;

    Ok(Json(RegisterResponse {
        ok: true,
        message: (!output.created).then(|| "User exists".to_string()),
    }))
}

/// POST /api/start-session
pub async fn start_session<R>(
    State(state): State<RewardsAppState<R>>,
    Json(req): Json<StartSessionRequest>,
) -> RewardsResult<Json<StartSessionResponse>>
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
    let use_case = StartSessionUseCase::new(state.repo.clone(), state.repo.clone());

    let output = use_case
        .execute(StartSessionInput {
            username: req.username,
            game: req.game,
        })
        .await?;

    Ok(Json(StartSessionResponse {
        ok: true,
        session_id: output.session_id,
    }))
}

/// POST /api/submit-score
pub async fn submit_score<R>(
    State(state): State<RewardsAppState<R>>,
    Json(req): Json<SubmitScoreRequest>,
) -> RewardsResult<Json<SubmitScoreResponse>>
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
    let use_case = SubmitScoreUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
        state.score_validator.clone(),
    );

    let output = use_case
        .execute(SubmitScoreInput {
            username: req.username,
            game: req.game,
            score: req.score,
            duration_sec: req.duration_sec,
        })
        .await?;

    Ok(Json(SubmitScoreResponse {
        ok: true,
        awarded: output.awarded,
    }))
}

/// POST /api/withdraw
pub async fn request_withdrawal<R>(
    State(state): State<RewardsAppState<R>>,
    Json(req): Json<WithdrawRequest>,
) -> RewardsResult<Json<WithdrawResponse>>
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
    let use_case = RequestWithdrawalUseCase::new(state.repo.clone(), state.repo.clone());

    let output = use_case
        .execute(RequestWithdrawalInput {
            username: req.username,
            ton_address: req.ton_address,
            points: req.points,
        })
        .await?;

    Ok(Json(WithdrawResponse {
        ok: true,
        status: output.status.code().to_string(),
    }))
}

/// GET /api/leaderboard
pub async fn leaderboard<R>(
    State(state): State<RewardsAppState<R>>,
    Query(query): Query<LeaderboardQuery>,
) -> RewardsResult<Json<Vec<LeaderboardEntryResponse>>>
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
    let use_case = LeaderboardUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LeaderboardInput { limit: query.limit })
        .await?;

    Ok(Json(
        output
            .entries
            .into_iter()
            .map(LeaderboardEntryResponse::from)
            .collect(),
    ))
}

/// GET /api/me/{username}
pub async fn profile<R>(
    State(state): State<RewardsAppState<R>>,
    Path(username): Path<String>,
) -> RewardsResult<Json<ProfileResponse>>
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
    let use_case = ProfileUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case.execute(ProfileInput { username }).await?;

    Ok(Json(ProfileResponse {
        username: output.user.username.to_string(),
        balance: output.user.balance,
        ton_address: output.user.ton_address,
        rewards: output.rewards.into_iter().map(Into::into).collect(),
    }))
}
