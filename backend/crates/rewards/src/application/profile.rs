//! Profile Use Case
//!
//! Returns a user's balance and recent rewards.

use std::sync::Arc;

use crate::application::config::RewardsConfig;
use crate::domain::entities::{Reward, User};
use crate::domain::repository::{RewardLedgerRepository, UserRepository};
use crate::domain::value_objects::Username;
use crate::error::{RewardsError, RewardsResult};

/// Profile input
pub struct ProfileInput {
    pub username: String,
}

/// Profile output
pub struct ProfileOutput {
    pub user: User,
    pub rewards: Vec<Reward>,
}

/// Profile use case
pub struct ProfileUseCase<U, R>
where
    U: UserRepository,
    R: RewardLedgerRepository,
{
    user_repo: Arc<U>,
    reward_repo: Arc<R>,
    config: Arc<RewardsConfig>,
}

impl<U, R> ProfileUseCase<U, R>
where
    U: UserRepository,
    R: RewardLedgerRepository,
{
    pub fn new(user_repo: Arc<U>, reward_repo: Arc<R>, config: Arc<RewardsConfig>) -> Self {
        Self {
            user_repo,
            reward_repo,
            config,
        }
    }

    pub async fn execute(&self, input: ProfileInput) -> RewardsResult<ProfileOutput> {
        let username = Username::new(&input.username)?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(RewardsError::UserNotFound)?;

        let rewards = self
            .reward_repo
            .recent_for_user(&username, self.config.profile_rewards_limit)
            .await?;

        Ok(ProfileOutput { user, rewards })
    }
}
