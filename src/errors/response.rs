use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::codes::ErrorCode;
use crate::api::context::ResponseContext;
use crate::api::emitter::error_response;

/// Application error carrying everything needed to render an error envelope
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[{code}] {message}")]
pub struct ResponseError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// HTTP status written with the error body; stored verbatim, see [`ResponseError::status`]
    pub status_code: i32,
    /// Additional context, keyed by name
    pub details: Map<String, Value>,
}

impl ResponseError {
    /// Create a new error with empty details. No input is validated.
    pub fn new(code: impl Into<String>, message: impl Into<String>, status_code: i32) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            status_code,
            details: Map::new(),
        }
    }

    /// Insert or replace a detail entry in place, returning the same error for chaining
    pub fn add_detail(&mut self, key: impl Into<String>, value: impl Serialize) -> &mut Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.details.insert(key.into(), value);
        self
    }

    /// Builder form of [`ResponseError::add_detail`]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.add_detail(key, value);
        self
    }

    /// HTTP status for this error; negative or unrepresentable codes map to 500
    pub fn status(&self) -> StatusCode {
        u16::try_from(self.status_code)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn coded(code: ErrorCode, message: impl Into<String>, status: StatusCode) -> Self {
        Self::new(code, message, i32::from(status.as_u16()))
    }
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        let mut ctx = ResponseContext::new();
        error_response(&mut ctx, &self);
        ctx.into_response()
    }
}

/// Helpers for creating common errors
impl ResponseError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::coded(ErrorCode::BadRequest, message, StatusCode::BAD_REQUEST)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::coded(ErrorCode::Unauthorized, message, StatusCode::UNAUTHORIZED)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::coded(ErrorCode::Forbidden, message, StatusCode::FORBIDDEN)
    }

    pub fn not_found(resource: impl AsRef<str>) -> Self {
        Self::coded(
            ErrorCode::NotFound,
            format!("{} not found", resource.as_ref()),
            StatusCode::NOT_FOUND,
        )
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::coded(ErrorCode::Conflict, message, StatusCode::CONFLICT)
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::coded(ErrorCode::Validation, message, StatusCode::BAD_REQUEST)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::coded(
            ErrorCode::InternalServerError,
            message,
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    }

    /// Wraps a storage failure; the underlying message goes to `details.error`
    pub fn database_error(err: &dyn std::error::Error) -> Self {
        Self::coded(
            ErrorCode::DatabaseError,
            "Database operation failed",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail("error", err.to_string())
    }

    pub fn invalid_input(field: impl AsRef<str>, reason: impl AsRef<str>) -> Self {
        Self::coded(
            ErrorCode::InvalidInput,
            format!(
                "Invalid input for field '{}': {}",
                field.as_ref(),
                reason.as_ref()
            ),
            StatusCode::BAD_REQUEST,
        )
    }

    pub fn missing_header(header: impl AsRef<str>) -> Self {
        Self::coded(
            ErrorCode::MissingHeader,
            format!("Missing required header: {}", header.as_ref()),
            StatusCode::BAD_REQUEST,
        )
    }

    pub fn invalid_uuid(field: impl AsRef<str>) -> Self {
        Self::coded(
            ErrorCode::InvalidUuid,
            format!("Invalid UUID format for field '{}'", field.as_ref()),
            StatusCode::BAD_REQUEST,
        )
    }

    pub fn duplicate_entry(resource: impl AsRef<str>) -> Self {
        Self::coded(
            ErrorCode::DuplicateEntry,
            format!("{} already exists", resource.as_ref()),
            StatusCode::CONFLICT,
        )
    }

    pub fn foreign_key_violation(message: impl Into<String>) -> Self {
        Self::coded(ErrorCode::ForeignKeyViolation, message, StatusCode::BAD_REQUEST)
    }

    /// Same wire shape as [`ResponseError::unauthorized`]
    pub fn unauthorized_error(message: impl Into<String>) -> Self {
        Self::coded(ErrorCode::Unauthorized, message, StatusCode::UNAUTHORIZED)
    }

    pub fn version_exists(version: impl AsRef<str>) -> Self {
        Self::coded(
            ErrorCode::Conflict,
            format!("Version {} already exists", version.as_ref()),
            StatusCode::CONFLICT,
        )
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::coded(ErrorCode::InvalidBody, message, StatusCode::BAD_REQUEST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_format() {
        let err = ResponseError::bad_request("missing name");
        assert_eq!(err.to_string(), "[BAD_REQUEST] missing name");
    }

    #[test]
    fn test_new_has_empty_details() {
        let err = ResponseError::new("TEAPOT", "short and stout", 418);
        assert_eq!(err.code, "TEAPOT");
        assert_eq!(err.status_code, 418);
        assert!(err.details.is_empty());
    }

    #[test]
    fn test_new_accepts_garbage() {
        let err = ResponseError::new("", "", 0);
        assert_eq!(err.to_string(), "[] ");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_new_keeps_negative_status() {
        let err = ResponseError::new("WEIRD", "negative", -1);
        assert_eq!(err.status_code, -1);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let big = ResponseError::new("WEIRD", "too big", 70_000);
        assert_eq!(big.status_code, 70_000);
        assert_eq!(big.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_add_detail_last_write_wins() {
        let mut err = ResponseError::conflict("busy");
        err.add_detail("a", 1).add_detail("a", 2);
        assert_eq!(err.details.len(), 1);
        assert_eq!(err.details["a"], json!(2));
    }

    #[test]
    fn test_with_detail_chaining() {
        let err = ResponseError::validation_error("bad payload")
            .with_detail("field", "email")
            .with_detail("rules", vec!["required", "email"]);
        assert_eq!(err.details["field"], json!("email"));
        assert_eq!(err.details["rules"], json!(["required", "email"]));
    }

    #[test]
    fn test_not_found() {
        let err = ResponseError::not_found("User");
        assert_eq!(err.code, "NOT_FOUND");
        assert_eq!(err.status_code, 404);
        assert_eq!(err.message, "User not found");
    }

    #[test]
    fn test_database_error_records_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        let err = ResponseError::database_error(&cause);
        assert_eq!(err.code, "DATABASE_ERROR");
        assert_eq!(err.status_code, 500);
        assert_eq!(err.message, "Database operation failed");
        assert_eq!(err.details["error"], json!("connection reset"));
    }

    #[test]
    fn test_formatted_messages() {
        assert_eq!(
            ResponseError::invalid_input("age", "must be positive").message,
            "Invalid input for field 'age': must be positive"
        );
        assert_eq!(
            ResponseError::missing_header("X-Tenant-ID").message,
            "Missing required header: X-Tenant-ID"
        );
        assert_eq!(
            ResponseError::invalid_uuid("user_id").message,
            "Invalid UUID format for field 'user_id'"
        );
        assert_eq!(
            ResponseError::duplicate_entry("Email").message,
            "Email already exists"
        );
        assert_eq!(
            ResponseError::version_exists("1.2.0").message,
            "Version 1.2.0 already exists"
        );
    }

    // ========== CODE / STATUS TABLE ==========

    #[test]
    fn test_factory_codes_and_statuses() {
        let cases = [
            (ResponseError::bad_request("x"), "BAD_REQUEST", 400),
            (ResponseError::unauthorized("x"), "UNAUTHORIZED", 401),
            (ResponseError::forbidden("x"), "FORBIDDEN", 403),
            (ResponseError::not_found("x"), "NOT_FOUND", 404),
            (ResponseError::conflict("x"), "CONFLICT", 409),
            (ResponseError::validation_error("x"), "VALIDATION_ERROR", 400),
            (
                ResponseError::internal_server_error("x"),
                "INTERNAL_SERVER_ERROR",
                500,
            ),
            (ResponseError::invalid_input("f", "r"), "INVALID_INPUT", 400),
            (ResponseError::missing_header("x"), "MISSING_HEADER", 400),
            (ResponseError::invalid_uuid("x"), "INVALID_UUID", 400),
            (ResponseError::duplicate_entry("x"), "DUPLICATE_ENTRY", 409),
            (
                ResponseError::foreign_key_violation("x"),
                "FOREIGN_KEY_VIOLATION",
                400,
            ),
            (ResponseError::unauthorized_error("x"), "UNAUTHORIZED", 401),
            (ResponseError::version_exists("x"), "CONFLICT", 409),
            (ResponseError::invalid_body("x"), "INVALID_BODY", 400),
        ];

        for (err, code, status) in cases {
            assert_eq!(err.code, code);
            assert_eq!(err.status_code, status, "status for {}", code);
        }
    }

    #[test]
    fn test_into_response_uses_status_code() {
        let response = ResponseError::duplicate_entry("Team").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
