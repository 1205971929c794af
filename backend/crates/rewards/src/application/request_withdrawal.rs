//! Request Withdrawal Use Case
//!
//! Records a pending withdrawal and holds the points immediately
//! (pessimistic hold). The conditional decrement in the repository is
//! the serialization point: two concurrent requests against the same
//! balance can never jointly overdraw it.

use std::sync::Arc;

use crate::domain::entities::WithdrawalRequest;
use crate::domain::repository::{DebitOutcome, UserRepository, WithdrawalLedgerRepository};
use crate::domain::value_objects::{Username, WithdrawalStatus};
use crate::error::{RewardsError, RewardsResult};

/// Request withdrawal input
pub struct RequestWithdrawalInput {
    pub username: String,
    pub ton_address: String,
    pub points: i64,
}

/// Request withdrawal output
pub struct RequestWithdrawalOutput {
    pub status: WithdrawalStatus,
    pub balance: i64,
}

/// Request withdrawal use case
pub struct RequestWithdrawalUseCase<U, W>
where
    U: UserRepository,
    W: WithdrawalLedgerRepository,
{
    user_repo: Arc<U>,
    withdrawal_repo: Arc<W>,
}

impl<U, W> RequestWithdrawalUseCase<U, W>
where
    U: UserRepository,
    W: WithdrawalLedgerRepository,
{
    pub fn new(user_repo: Arc<U>, withdrawal_repo: Arc<W>) -> Self {
        Self {
            user_repo,
            withdrawal_repo,
        }
    }

    pub async fn execute(
        &self,
        input: RequestWithdrawalInput,
    ) -> RewardsResult<RequestWithdrawalOutput> {
        let username = Username::new(&input.username)?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(RewardsError::UserNotFound)?;

        if !user.can_participate() {
            return Err(RewardsError::UserBanned);
        }

        if input.points <= 0 {
            return Err(RewardsError::InvalidAmount);
        }

        let request = WithdrawalRequest::pending(username, input.ton_address, input.points);

        // Sufficiency is checked inside the debit, not here: a balance
        // read before the decrement would race with concurrent requests.
        match self.withdrawal_repo.debit(&request).await? {
            DebitOutcome::Debited { balance_after } => {
                tracing::info!(
                    request_id = %request.id,
                    username = %request.username,
                    points = request.points,
                    balance = balance_after,
                    "Withdrawal requested, points held"
                );
                Ok(RequestWithdrawalOutput {
                    status: request.status,
                    balance: balance_after,
                })
            }
            DebitOutcome::InsufficientBalance => {
                tracing::warn!(
                    username = %request.username,
                    points = request.points,
                    "Withdrawal exceeds balance"
                );
                Err(RewardsError::InvalidAmount)
            }
        }
    }
}
