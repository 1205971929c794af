//! Domain Services
//!
//! Pure award computation for the rewards domain.

use crate::domain::value_objects::Game;

/// Default divisor: 1 point per 10 raw score
pub const DEFAULT_SCORE_DIVISOR: i64 = 10;

/// Default per-session cap for every known game
pub const DEFAULT_SESSION_CAP: i64 = 100;

/// Per-game award schedule
///
/// Integer division discourages fractional-point gaming; the cap keeps
/// a single session from draining the reward pool regardless of score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardSchedule {
    /// Raw score per awarded point
    pub score_divisor: i64,
    /// Per-session point cap for "word"
    pub word_cap: i64,
    /// Per-session point cap for "tiles"
    pub tiles_cap: i64,
    /// Per-session point cap for "parking"
    pub parking_cap: i64,
}

impl Default for AwardSchedule {
    fn default() -> Self {
        Self {
            score_divisor: DEFAULT_SCORE_DIVISOR,
            word_cap: DEFAULT_SESSION_CAP,
            tiles_cap: DEFAULT_SESSION_CAP,
            parking_cap: DEFAULT_SESSION_CAP,
        }
    }
}

impl AwardSchedule {
    /// Cap for a given game
    pub const fn cap_for(&self, game: Game) -> i64 {
        match game {
            Game::Word => self.word_cap,
            Game::Tiles => self.tiles_cap,
            Game::Parking => self.parking_cap,
        }
    }
}

/// Compute the points awarded for a raw score
///
/// `awarded = min(score / divisor, cap(game))`, never negative.
/// Pure and deterministic; scores are validated non-negative before
/// this is reached, the clamp is a guard for the pure contract.
pub fn compute_award(game: Game, score: i64, schedule: &AwardSchedule) -> i64 {
    let base = score / schedule.score_divisor;
    base.min(schedule.cap_for(game)).max(0)
}
