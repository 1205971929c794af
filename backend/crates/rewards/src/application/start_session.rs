//! Start Session Use Case
//!
//! Records a zero-score session placeholder. Informational only: the
//! authoritative score of a session is recorded on its Reward row at
//! submit time, never written back here.

use std::sync::Arc;

use crate::domain::entities::GameSession;
use crate::domain::repository::{GameSessionRepository, UserRepository};
use crate::domain::value_objects::{Game, Username};
use crate::error::{RewardsError, RewardsResult};

/// Start session input
pub struct StartSessionInput {
    pub username: String,
    pub game: String,
}

/// Start session output
pub struct StartSessionOutput {
    pub session_id: uuid::Uuid,
}

/// Start session use case
pub struct StartSessionUseCase<U, S>
where
    U: UserRepository,
    S: GameSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
}

impl<U, S> StartSessionUseCase<U, S>
where
    U: UserRepository,
    S: GameSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>) -> Self {
        Self {
            user_repo,
            session_repo,
        }
    }

    pub async fn execute(&self, input: StartSessionInput) -> RewardsResult<StartSessionOutput> {
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

        let session = GameSession::start(username, game);
        self.session_repo.create(&session).await?;

        tracing::info!(
            session_id = %session.id,
            username = %session.username,
            game = %session.game,
            "Session started"
        );

        Ok(StartSessionOutput {
            session_id: session.id.into_uuid(),
        })
    }
}
