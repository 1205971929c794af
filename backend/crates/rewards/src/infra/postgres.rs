//! PostgreSQL Repository Implementations
//!
//! Both ledger operations run as single transactions. The withdrawal
//! debit uses a conditional `UPDATE ... WHERE balance >= points` as its
//! serialization point; the row lock taken by the UPDATE orders
//! concurrent requests for the same user.

use crate::domain::entities::{GameSession, LeaderboardEntry, Reward, User, WithdrawalRequest};
use crate::domain::repository::{
    DebitOutcome, GameSessionRepository, LeaderboardRepository, RewardLedgerRepository,
    UserRepository, WithdrawalLedgerRepository,
};
use crate::domain::value_objects::{Game, Username};
use crate::error::{RewardsError, RewardsResult};
use kernel::id::Id;
use sqlx::PgPool;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgRewardsRepository {
    pool: PgPool,
}

impl PgRewardsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgRewardsRepository {
    async fn create_if_absent(&self, user: &User) -> RewardsResult<bool> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                user_name,
                ton_address,
                referred_by,
                is_banned,
                balance,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_name) DO NOTHING
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(user.username.as_str())
        .bind(user.ton_address.as_deref())
        .bind(user.referred_by.as_ref().map(|u| u.as_str()))
        .bind(user.is_banned)
        .bind(user.balance)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected()
            == 1;

        if inserted {
            tracing::info!(username = %user.username, "User row created");
        }

        Ok(inserted)
    }

    async fn find_by_username(&self, username: &Username) -> RewardsResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_name,
                ton_address,
                referred_by,
                is_banned,
                balance,
                created_at,
                updated_at
            FROM users
            WHERE user_name = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }
}

impl GameSessionRepository for PgRewardsRepository {
    async fn create(&self, session: &GameSession) -> RewardsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO game_sessions (
                game_session_id,
                user_name,
                game,
                score,
                duration_sec,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session.id.as_uuid())
        .bind(session.username.as_str())
        .bind(session.game.code())
        .bind(session.score)
        .bind(session.duration_sec)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            session_id = %session.id,
            username = %session.username,
            game = %session.game,
            "Session row created"
        );

        Ok(())
    }
}

impl RewardLedgerRepository for PgRewardsRepository {
    async fn credit(&self, reward: &Reward) -> RewardsResult<i64> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO rewards (
                reward_id,
                user_name,
                game,
                score,
                points_awarded,
                reason,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(reward.id.as_uuid())
        .bind(reward.username.as_str())
        .bind(reward.game.code())
        .bind(reward.score)
        .bind(reward.points_awarded)
        .bind(&reward.reason)
        .bind(reward.created_at)
        .execute(&mut *tx)
        .await?;

        let balance_after = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE users
            SET balance = balance + $2, updated_at = NOW()
            WHERE user_name = $1
            RETURNING balance
            "#,
        )
        .bind(reward.username.as_str())
        .bind(reward.points_awarded)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(balance_after) = balance_after else {
            // User row vanished between lookup and credit
            tx.rollback().await?;
            return Err(RewardsError::UserNotFound);
        };

        tx.commit().await?;

        tracing::info!(
            reward_id = %reward.id,
            username = %reward.username,
            points = reward.points_awarded,
            balance = balance_after,
            "Balance credited"
        );

        Ok(balance_after)
    }

    async fn recent_for_user(
        &self,
        username: &Username,
        limit: i64,
    ) -> RewardsResult<Vec<Reward>> {
        let rows = sqlx::query_as::<_, RewardRow>(
            r#"
            SELECT
                reward_id,
                user_name,
                game,
                score,
                points_awarded,
                reason,
                created_at
            FROM rewards
            WHERE user_name = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(username.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(RewardRow::into_reward).collect()
    }
}

impl WithdrawalLedgerRepository for PgRewardsRepository {
    async fn debit(&self, request: &WithdrawalRequest) -> RewardsResult<DebitOutcome> {
        let mut tx = self.pool.begin().await?;

        // Conditional decrement: succeeds only when the balance covers
        // the points. Zero rows means insufficient (or missing) user.
        let balance_after = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE users
            SET balance = balance - $2, updated_at = NOW()
            WHERE user_name = $1 AND balance >= $2
            RETURNING balance
            "#,
        )
        .bind(request.username.as_str())
        .bind(request.points)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(balance_after) = balance_after else {
            tx.rollback().await?;
            return Ok(DebitOutcome::InsufficientBalance);
        };

        sqlx::query(
            r#"
            INSERT INTO withdrawal_requests (
                withdrawal_request_id,
                user_name,
                ton_address,
                points,
                status,
                note,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(request.id.as_uuid())
        .bind(request.username.as_str())
        .bind(&request.ton_address)
        .bind(request.points)
        .bind(request.status.code())
        .bind(request.note.as_deref())
        .bind(request.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            request_id = %request.id,
            username = %request.username,
            points = request.points,
            balance = balance_after,
            "Balance debited"
        );

        Ok(DebitOutcome::Debited { balance_after })
    }
}

impl LeaderboardRepository for PgRewardsRepository {
    async fn top_by_points(&self, limit: i64) -> RewardsResult<Vec<LeaderboardEntry>> {
        // SUM(bigint) yields numeric in Postgres, cast back to bigint
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT user_name, COALESCE(SUM(points_awarded), 0)::BIGINT AS total_points
            FROM rewards
            GROUP BY user_name
            ORDER BY total_points DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(username, total_points)| LeaderboardEntry {
                username,
                total_points,
            })
            .collect())
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: uuid::Uuid,
    user_name: String,
    ton_address: Option<String>,
    referred_by: Option<String>,
    is_banned: bool,
    balance: i64,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl UserRow {
    fn into_user(self) -> RewardsResult<User> {
        Ok(User {
            id: Id::from_uuid(self.user_id),
            username: parse_stored_username(&self.user_name)?,
            ton_address: self.ton_address,
            referred_by: self
                .referred_by
                .as_deref()
                .map(parse_stored_username)
                .transpose()?,
            is_banned: self.is_banned,
            balance: self.balance,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct RewardRow {
    reward_id: uuid::Uuid,
    user_name: String,
    game: String,
    score: i64,
    points_awarded: i64,
    reason: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl RewardRow {
    fn into_reward(self) -> RewardsResult<Reward> {
        Ok(Reward {
            id: Id::from_uuid(self.reward_id),
            username: parse_stored_username(&self.user_name)?,
            game: parse_stored_game(&self.game)?,
            score: self.score,
            points_awarded: self.points_awarded,
            reason: self.reason,
            created_at: self.created_at,
        })
    }
}

fn parse_stored_username(raw: &str) -> RewardsResult<Username> {
    Username::new(raw)
        .map_err(|e| RewardsError::Internal(format!("Corrupt username in storage: {e}")))
}

fn parse_stored_game(raw: &str) -> RewardsResult<Game> {
    Game::from_code(raw)
        .ok_or_else(|| RewardsError::Internal(format!("Corrupt game code in storage: {raw}")))
}
