//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{LeaderboardEntry, Reward};

/// Request for POST /api/register
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    #[serde(default)]
    pub ton_address: Option<String>,
    #[serde(default)]
    pub referred_by: Option<String>,
}

/// Response for POST /api/register
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request for POST /api/start-session
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub username: String,
    pub game: String,
}

/// Response for POST /api/start-session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionResponse {
    pub ok: bool,
    pub session_id: uuid::Uuid,
}

/// Request for POST /api/submit-score
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    pub username: String,
    pub game: String,
    pub score: i64,
    pub duration_sec: i64,
}

/// Response for POST /api/submit-score
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreResponse {
    pub ok: bool,
    pub awarded: i64,
}

/// Request for POST /api/withdraw
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    pub username: String,
    pub ton_address: String,
    pub points: i64,
}

/// Response for POST /api/withdraw
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawResponse {
    pub ok: bool,
    pub status: String,
}

/// Query for GET /api/leaderboard
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

/// One row of GET /api/leaderboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryResponse {
    pub username: String,
    pub points: i64,
}

impl From<LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            username: entry.username,
            points: entry.total_points,
        }
    }
}

/// One reward row inside GET /api/me/{username}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardResponse {
    pub game: String,
    pub score: i64,
    pub points_awarded: i64,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl From<Reward> for RewardResponse {
    fn from(reward: Reward) -> Self {
        Self {
            game: reward.game.code().to_string(),
            score: reward.score,
            points_awarded: reward.points_awarded,
            reason: reward.reason,
            created_at: reward.created_at,
        }
    }
}

/// Response for GET /api/me/{username}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub username: String,
    pub balance: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ton_address: Option<String>,
    pub rewards: Vec<RewardResponse>,
}
