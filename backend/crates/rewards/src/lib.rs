//! Rewards Backend Module
//!
//! Points-based reward ledger for the casual gaming platform:
//! score submissions earn points, withdrawals spend them.
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infrastructure/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Consistency Model
//! - The balance ledger is the sole mutator of `users.balance`
//! - Reward insert + balance credit happen in one transaction
//! - Withdrawal insert + balance debit use a conditional decrement
//!   (`balance >= points`), so concurrent requests cannot overdraw
//! - Reward rows are append-only and feed the leaderboard

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::RewardsConfig;
pub use error::{RewardsError, RewardsResult};
pub use infra::postgres::PgRewardsRepository;
pub use presentation::router::rewards_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgRewardsRepository as RewardsStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
