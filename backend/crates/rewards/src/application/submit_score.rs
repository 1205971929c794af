//! Submit Score Use Case
//!
//! Computes the award for a raw score and credits it. The reward row
//! and the balance increment are one atomic unit in the repository, so
//! no reward can exist without its balance effect or vice versa.

use std::sync::Arc;

use crate::application::config::RewardsConfig;
use crate::domain::entities::Reward;
use crate::domain::policy::{ScoreSubmission, ScoreValidator, Verdict};
use crate::domain::repository::{RewardLedgerRepository, UserRepository};
use crate::domain::services::compute_award;
use crate::domain::value_objects::{Game, Username};
use crate::error::{RewardsError, RewardsResult};

/// Submit score input
pub struct SubmitScoreInput {
    pub username: String,
    pub game: String,
    pub score: i64,
    pub duration_sec: i64,
}

/// Submit score output
pub struct SubmitScoreOutput {
    pub awarded: i64,
    pub balance: i64,
}

/// Submit score use case
pub struct SubmitScoreUseCase<U, R>
where
    U: UserRepository,
    R: RewardLedgerRepository,
{
    user_repo: Arc<U>,
    reward_repo: Arc<R>,
    config: Arc<RewardsConfig>,
    validator: Arc<dyn ScoreValidator>,
}

impl<U, R> SubmitScoreUseCase<U, R>
where
    U: UserRepository,
    R: RewardLedgerRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        reward_repo: Arc<R>,
        config: Arc<RewardsConfig>,
        validator: Arc<dyn ScoreValidator>,
    ) -> Self {
        Self {
            user_repo,
            reward_repo,
            config,
            validator,
        }
    }

    pub async fn execute(&self, input: SubmitScoreInput) -> RewardsResult<SubmitScoreOutput> {
        let username = Username::new(&input.username)?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(RewardsError::UserNotFound)?;

        if !user.can_participate() {
            return Err(RewardsError::UserBanned);
        }

        let game =
            Game::from_code(&input.game).ok_or_else(|| RewardsError::UnknownGame(input.game))?;

        if input.score < 0 || input.duration_sec < 0 {
            return Err(RewardsError::InvalidScore);
        }

        let submission = ScoreSubmission {
            username: &username,
            game,
            score: input.score,
            duration_sec: input.duration_sec,
        };
        if let Verdict::Reject(reason) = self.validator.validate(&submission) {
            return Err(RewardsError::ScoreRejected(reason));
        }

        let awarded = compute_award(game, input.score, &self.config.award_schedule);

        let reward = Reward::for_session(username, game, input.score, awarded);
        let balance = self.reward_repo.credit(&reward).await?;

        tracing::info!(
            reward_id = %reward.id,
            username = %reward.username,
            game = %game,
            score = input.score,
            awarded = awarded,
            balance = balance,
            "Score credited"
        );

        Ok(SubmitScoreOutput { awarded, balance })
    }
}
