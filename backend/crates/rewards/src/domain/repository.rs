//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! The two ledger operations (`credit`, `debit`) are the only paths
//! allowed to mutate a user's balance, and each couples its audit-row
//! insert with the balance change atomically.

use crate::domain::entities::{GameSession, LeaderboardEntry, Reward, User, WithdrawalRequest};
use crate::domain::value_objects::Username;
use crate::error::RewardsResult;

/// Outcome of a conditional balance debit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebitOutcome {
    /// Request recorded and points held
    Debited { balance_after: i64 },
    /// Balance was below the requested points; nothing recorded
    InsufficientBalance,
}

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user unless the username is already taken.
    /// Returns `false` when the user already existed (idempotent register).
    async fn create_if_absent(&self, user: &User) -> RewardsResult<bool>;

    /// Find a user by canonical username
    async fn find_by_username(&self, username: &Username) -> RewardsResult<Option<User>>;
}

/// Game session repository trait
#[trait_variant::make(GameSessionRepository: Send)]
pub trait LocalGameSessionRepository {
    /// Record a session placeholder
    async fn create(&self, session: &GameSession) -> RewardsResult<()>;
}

/// Reward ledger repository trait
#[trait_variant::make(RewardLedgerRepository: Send)]
pub trait LocalRewardLedgerRepository {
    /// Append the reward row and credit the balance as one atomic unit.
    /// Returns the balance after the credit.
    async fn credit(&self, reward: &Reward) -> RewardsResult<i64>;

    /// Most recent rewards for a user, newest first
    async fn recent_for_user(&self, username: &Username, limit: i64)
    -> RewardsResult<Vec<Reward>>;
}

/// Withdrawal ledger repository trait
#[trait_variant::make(WithdrawalLedgerRepository: Send)]
pub trait LocalWithdrawalLedgerRepository {
    /// Append the pending request and debit the balance as one atomic
    /// unit, only if the balance covers the points. On an insufficient
    /// balance nothing is recorded and nothing changes.
    async fn debit(&self, request: &WithdrawalRequest) -> RewardsResult<DebitOutcome>;
}

/// Leaderboard repository trait
#[trait_variant::make(LeaderboardRepository: Send)]
pub trait LocalLeaderboardRepository {
    /// Top users by total points awarded, descending.
    /// Ties are broken by storage order (arbitrary).
    async fn top_by_points(&self, limit: i64) -> RewardsResult<Vec<LeaderboardEntry>>;
}
