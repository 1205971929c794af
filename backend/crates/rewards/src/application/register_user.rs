//! Register User Use Case
//!
//! Creates a user account. Re-registering an existing username is a
//! no-op success, so clients can retry registration freely.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_objects::Username;
use crate::error::RewardsResult;

/// Register user input
pub struct RegisterUserInput {
    pub username: String,
    pub ton_address: Option<String>,
    pub referred_by: Option<String>,
}

/// Register user output
pub struct RegisterUserOutput {
    /// `false` when the username was already registered
    pub created: bool,
}

/// Register user use case
pub struct RegisterUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> RewardsResult<RegisterUserOutput> {
        let username = Username::new(&input.username)?;

        let referred_by = match input.referred_by {
            Some(raw) => Some(Username::new(&raw)?),
            None => None,
        };

        let user = User::new(username, input.ton_address, referred_by);

        // ON CONFLICT DO NOTHING in storage keeps this race-free:
        // two concurrent registrations insert at most one row.
        let created = self.user_repo.create_if_absent(&user).await?;

        if created {
            tracing::info!(username = %user.username, "User registered");
        } else {
            tracing::debug!(username = %user.username, "User already registered");
        }

        Ok(RegisterUserOutput { created })
    }
}
