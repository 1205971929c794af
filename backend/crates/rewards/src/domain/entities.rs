//! Domain Entities
//!
//! Core business entities for the rewards domain.

use chrono::{DateTime, Utc};
use kernel::id::{GameSessionId, RewardId, UserId, WithdrawalRequestId};

use crate::domain::value_objects::{Game, Username, WithdrawalStatus};

/// Reason recorded on rewards credited for a completed session
pub const REASON_SESSION_COMPLETED: &str = "session_completed";

/// User entity
///
/// `balance` is a materialized projection of the reward/withdrawal
/// ledger. Only the ledger repository operations may change it.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub ton_address: Option<String>,
    pub referred_by: Option<Username>,
    pub is_banned: bool,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a zero balance
    pub fn new(
        username: Username,
        ton_address: Option<String>,
        referred_by: Option<Username>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            username,
            ton_address,
            referred_by,
            is_banned: false,
            balance: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the user may submit scores or move points
    pub fn can_participate(&self) -> bool {
        !self.is_banned
    }
}

/// GameSession entity - a play-session placeholder
///
/// Created with zero score/duration at session start. Final results
/// are never written back here; the authoritative score of a session
/// lives on its Reward row.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: GameSessionId,
    pub username: Username,
    pub game: Game,
    pub score: i64,
    pub duration_sec: i64,
    pub created_at: DateTime<Utc>,
}

impl GameSession {
    /// Create a new zero-score session placeholder
    pub fn start(username: Username, game: Game) -> Self {
        Self {
            id: GameSessionId::new(),
            username,
            game,
            score: 0,
            duration_sec: 0,
            created_at: Utc::now(),
        }
    }
}

/// Reward entity - append-only audit record of a single award
///
/// The set of Reward rows is the source of truth for points ever
/// earned, and feeds the leaderboard.
#[derive(Debug, Clone)]
pub struct Reward {
    pub id: RewardId,
    pub username: Username,
    pub game: Game,
    pub score: i64,
    pub points_awarded: i64,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl Reward {
    /// Create a reward for a completed session
    pub fn for_session(username: Username, game: Game, score: i64, points_awarded: i64) -> Self {
        Self {
            id: RewardId::new(),
            username,
            game,
            score,
            points_awarded,
            reason: REASON_SESSION_COMPLETED.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// WithdrawalRequest entity
///
/// Created in `Pending` state with the points already held against the
/// balance (pessimistic hold). Status transitions happen out of band.
#[derive(Debug, Clone)]
pub struct WithdrawalRequest {
    pub id: WithdrawalRequestId,
    pub username: Username,
    pub ton_address: String,
    pub points: i64,
    pub status: WithdrawalStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WithdrawalRequest {
    /// Create a new pending withdrawal request
    pub fn pending(username: Username, ton_address: String, points: i64) -> Self {
        Self {
            id: WithdrawalRequestId::new(),
            username,
            ton_address,
            points,
            status: WithdrawalStatus::Pending,
            note: None,
            created_at: Utc::now(),
        }
    }
}

/// Leaderboard read model - one row per user, earned points total
///
/// Aggregated over Reward rows, so it ranks points earned, not points
/// currently held (withdrawals do not lower a leaderboard position).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub username: String,
    pub total_points: i64,
}
