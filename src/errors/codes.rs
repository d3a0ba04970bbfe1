use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Machine-readable error codes carried in the `error.code` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed request
    BadRequest,

    /// Missing or invalid credentials
    Unauthorized,

    /// Authenticated but not allowed
    Forbidden,

    /// Resource does not exist
    NotFound,

    /// Request conflicts with current state
    Conflict,

    /// Input validation failed
    #[serde(rename = "VALIDATION_ERROR")]
    Validation,

    /// Unexpected server-side failure
    InternalServerError,

    /// Database operation failed
    DatabaseError,

    /// A single field failed validation
    InvalidInput,

    /// Required header absent
    MissingHeader,

    /// Field is not a valid UUID
    #[serde(rename = "INVALID_UUID")]
    InvalidUuid,

    /// Unique constraint violated
    DuplicateEntry,

    /// Referenced row does not exist
    ForeignKeyViolation,

    /// Request body could not be parsed
    InvalidBody,

    /// Account locked after repeated failures
    AccountLocked,

    /// Legacy authorization failure code
    UnauthorizedError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::Validation => "VALIDATION_ERROR",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::InvalidInput => "INVALID_INPUT",
            Self::MissingHeader => "MISSING_HEADER",
            Self::InvalidUuid => "INVALID_UUID",
            Self::DuplicateEntry => "DUPLICATE_ENTRY",
            Self::ForeignKeyViolation => "FOREIGN_KEY_VIOLATION",
            Self::InvalidBody => "INVALID_BODY",
            Self::AccountLocked => "ACCOUNT_LOCKED",
            Self::UnauthorizedError => "UNAUTHORIZED_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_string()
    }
}
