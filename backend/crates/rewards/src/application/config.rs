//! Application Configuration
//!
//! Configuration for the rewards application layer.

use crate::domain::services::AwardSchedule;

/// Rewards application configuration
#[derive(Debug, Clone)]
pub struct RewardsConfig {
    /// Award computation schedule (divisor, per-game caps)
    pub award_schedule: AwardSchedule,
    /// Leaderboard size when the caller passes no limit
    pub leaderboard_default_limit: i64,
    /// Hard ceiling on requested leaderboard size
    pub leaderboard_max_limit: i64,
    /// Recent rewards returned on the profile endpoint
    pub profile_rewards_limit: i64,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            award_schedule: AwardSchedule::default(),
            leaderboard_default_limit: 20,
            leaderboard_max_limit: 100,
            profile_rewards_limit: 50,
        }
    }
}

impl RewardsConfig {
    /// Resolve a requested leaderboard limit against the defaults.
    /// `None` or non-positive requests fall back to the default.
    pub fn leaderboard_limit(&self, requested: Option<i64>) -> i64 {
        match requested {
            Some(n) if n > 0 => n.min(self.leaderboard_max_limit),
            _ => self.leaderboard_default_limit,
        }
    }
}
