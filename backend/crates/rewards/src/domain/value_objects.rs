//! Domain Value Objects
//!
//! Immutable value types for the rewards domain.
//!
//! ## 設計方針
//! - ユーザー名は ASCII のみ許可（a-z, 0-9, _ . -）
//! - 大文字入力は受け付けるが、canonical（正規形）は小文字
//! - NFKC正規化 → 検証 → 小文字化 の順で処理
//! - ゲーム識別子は固定の列挙体。未知の識別子は黙って既定値に
//!   フォールバックせず、拒否する

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Username
// ============================================================================

/// Minimum length for a username (in characters, after normalization)
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum length for a username (in characters, after normalization)
pub const USERNAME_MAX_LENGTH: usize = 30;

/// Allowed special characters in a username
const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-'];

/// Username validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("Username must be at least {USERNAME_MIN_LENGTH} characters")]
    TooShort,
    #[error("Username must be at most {USERNAME_MAX_LENGTH} characters")]
    TooLong,
    #[error("Username contains invalid character: '{0}'")]
    InvalidCharacter(char),
    #[error("Username must start and end with an alphanumeric character or '_'")]
    InvalidBoundary,
    #[error("Username must not contain consecutive dots")]
    ConsecutiveDots,
    #[error("Username must contain at least one alphanumeric character")]
    NoAlphanumeric,
}

/// Username value object
///
/// The public identity key of a user. Stored and compared in its
/// canonical form: NFKC-normalized, then lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validate and canonicalize a raw username.
    ///
    /// Pipeline: NFKC normalize → validate → lowercase.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UsernameError> {
        let normalized: String = raw.as_ref().trim().nfkc().collect();

        let len = normalized.chars().count();
        if len < USERNAME_MIN_LENGTH {
            return Err(UsernameError::TooShort);
        }
        if len > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong);
        }

        let mut has_alphanumeric = false;
        let mut prev_dot = false;
        for c in normalized.chars() {
            if c.is_ascii_alphanumeric() {
                has_alphanumeric = true;
                prev_dot = false;
            } else if ALLOWED_SPECIAL_CHARS.contains(&c) {
                if c == '.' {
                    if prev_dot {
                        return Err(UsernameError::ConsecutiveDots);
                    }
                    prev_dot = true;
                } else {
                    prev_dot = false;
                }
            } else {
                return Err(UsernameError::InvalidCharacter(c));
            }
        }

        if !has_alphanumeric {
            return Err(UsernameError::NoAlphanumeric);
        }

        let boundary_ok =
            |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
        if !boundary_ok(normalized.chars().next()) || !boundary_ok(normalized.chars().next_back()) {
            return Err(UsernameError::InvalidBoundary);
        }

        Ok(Self(normalized.to_ascii_lowercase()))
    }

    /// Get the canonical string form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the canonical string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Game
// ============================================================================

/// Game identifier
///
/// Fixed set of games the platform awards points for. Unknown
/// identifiers are rejected at the boundary, never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Word,
    Tiles,
    Parking,
}

impl Game {
    /// All known games
    pub const ALL: [Game; 3] = [Game::Word, Game::Tiles, Game::Parking];

    /// Get string code for database storage and the API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Tiles => "tiles",
            Self::Parking => "parking",
        }
    }

    /// Parse a game code; `None` for unknown identifiers
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "word" => Some(Self::Word),
            "tiles" => Some(Self::Tiles),
            "parking" => Some(Self::Parking),
            _ => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// WithdrawalStatus
// ============================================================================

/// Withdrawal request status
///
/// Requests are created as `Pending`. Transitions are performed by an
/// external admin process; no endpoint in this crate mutates status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl WithdrawalStatus {
    /// Get string code for database storage and the API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse a status code; `None` for unknown identifiers.
    ///
    /// Withdrawal rows are write-only in this crate; this is the read
    /// mapping for the admin tooling that processes them.
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Whether the held points are still committed to this request.
    /// Rejected requests are assumed refunded by the admin process.
    /// Like [`Self::from_code`], consumed by status-transition tooling
    /// rather than any endpoint here.
    #[inline]
    pub const fn holds_points(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

impl fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
