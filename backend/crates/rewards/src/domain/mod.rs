//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (User, GameSession, Reward, WithdrawalRequest)
//! - Domain value objects (Username, Game, WithdrawalStatus)
//! - Domain services (award calculation)
//! - Score validation policy (extension point)
//! - Repository traits (interfaces)

pub mod entities;
pub mod policy;
pub mod repository;
pub mod services;
pub mod value_objects;
