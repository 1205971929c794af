//! Leaderboard Use Case
//!
//! Read-only ranking over the reward ledger. Ranks points earned, not
//! points currently held.

use std::sync::Arc;

use crate::application::config::RewardsConfig;
use crate::domain::entities::LeaderboardEntry;
use crate::domain::repository::LeaderboardRepository;
use crate::error::RewardsResult;

/// Leaderboard input
pub struct LeaderboardInput {
    pub limit: Option<i64>,
}

/// Leaderboard output
pub struct LeaderboardOutput {
    pub entries: Vec<LeaderboardEntry>,
}

/// Leaderboard use case
pub struct LeaderboardUseCase<L>
where
    L: LeaderboardRepository,
{
    leaderboard_repo: Arc<L>,
    config: Arc<RewardsConfig>,
}

impl<L> LeaderboardUseCase<L>
where
    L: LeaderboardRepository,
{
    pub fn new(leaderboard_repo: Arc<L>, config: Arc<RewardsConfig>) -> Self {
        Self {
            leaderboard_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LeaderboardInput) -> RewardsResult<LeaderboardOutput> {
        let limit = self.config.leaderboard_limit(input.limit);
        let entries = self.leaderboard_repo.top_by_points(limit).await?;

        tracing::debug!(limit = limit, rows = entries.len(), "Leaderboard served");

        Ok(LeaderboardOutput { entries })
    }
}
