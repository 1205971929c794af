//! Score Validation Policy
//!
//! Extension point for pluggable anti-cheat checks on submitted
//! scores. The platform ships no detection logic; the default policy
//! accepts everything. A deployment can install its own validator to
//! reject implausible submissions before any points are credited.

use crate::domain::value_objects::{Game, Username};

/// A score submission as seen by a validation policy
#[derive(Debug, Clone)]
pub struct ScoreSubmission<'a> {
    pub username: &'a Username,
    pub game: Game,
    pub score: i64,
    pub duration_sec: i64,
}

/// Outcome of score validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Credit the score normally
    Accept,
    /// Refuse the submission; nothing is recorded
    Reject(String),
}

/// Capability interface for score-validation policies
pub trait ScoreValidator: Send + Sync {
    fn validate(&self, submission: &ScoreSubmission<'_>) -> Verdict;
}

/// Default policy: accept every submission
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllScores;

impl ScoreValidator for AcceptAllScores {
    fn validate(&self, _submission: &ScoreSubmission<'_>) -> Verdict {
        Verdict::Accept
    }
}
