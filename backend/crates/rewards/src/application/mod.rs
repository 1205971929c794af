//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod config;
pub mod leaderboard;
pub mod profile;
pub mod register_user;
pub mod request_withdrawal;
pub mod start_session;
pub mod submit_score;
