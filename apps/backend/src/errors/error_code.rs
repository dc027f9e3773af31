//! Error codes for the darts backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the darts backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Throw rejection (scoring engine)
    /// Throw submitted against a finished match
    GameFinished,
    /// Submitted user is not the current turn holder
    NotPlayersTurn,
    /// Dart value/multiplier pair is not a legal dartboard outcome
    InvalidThrow,

    // Request Validation
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// User not found
    UserNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Username already taken
    DuplicateUsername,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Stored data failed an integrity check
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// The canonical string for this code as it appears in HTTP responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::GameFinished => "GAME_FINISHED",
            ErrorCode::NotPlayersTurn => "NOT_PLAYERS_TURN",
            ErrorCode::InvalidThrow => "INVALID_THROW",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::DuplicateUsername => "DUPLICATE_USERNAME",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::DbTimeout => "DB_TIMEOUT",
            ErrorCode::DataCorruption => "DATA_CORRUPTION",
            ErrorCode::Internal => "INTERNAL",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
