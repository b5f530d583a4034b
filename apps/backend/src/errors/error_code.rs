//! Error codes for the catalogue API.
//!
//! Every code that can appear in an error body lives here. Codes are
//! SCREAMING_SNAKE_CASE and map 1:1 to the strings clients see.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Body could not be read or parsed
    BadRequest,
    /// Body exceeds the extractor's size limit
    PayloadTooLarge,
    /// Path segment is not a non-negative integer id
    InvalidPathParameter,
    /// Favorite key is not `<prefix><positive id>`
    InvalidFavoriteKey,
    /// Generic validation failure
    ValidationError,

    // Resource not found
    UserNotFound,
    CharacterNotFound,
    PlanetNotFound,
    /// DB-driven not found without a more specific kind
    NotFound,

    // Conflicts
    /// Email already belongs to another user
    UniqueEmail,
    /// Character name already taken
    UniqueCharacterName,
    /// Unique constraint violation without a more specific kind
    Conflict,

    // Constraint violations
    /// Foreign key constraint violation (SQLSTATE 23503)
    FkViolation,
    /// Check constraint violation (SQLSTATE 23514)
    CheckViolation,

    // System errors
    DbError,
    DbUnavailable,
    DbTimeout,
    DataCorruption,
    ConfigError,
    Internal,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::InvalidPathParameter => "INVALID_PATH_PARAMETER",
            Self::InvalidFavoriteKey => "INVALID_FAVORITE_KEY",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::CharacterNotFound => "CHARACTER_NOT_FOUND",
            Self::PlanetNotFound => "PLANET_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::UniqueCharacterName => "UNIQUE_CHARACTER_NAME",
            Self::Conflict => "CONFLICT",

            Self::FkViolation => "FK_VIOLATION",
            Self::CheckViolation => "CHECK_VIOLATION",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
