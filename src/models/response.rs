use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Generic API response envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error object (code, message, details)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    /// Human-readable status message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            success: true,
            data,
            error: None,
            message,
        }
    }

    pub fn failure(error: Value) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            message: None,
        }
    }
}

/// Successful API response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponseDto<T> {
    /// Always true
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 201 Created response; the message is always present
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponseDto<T> {
    /// Always true
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

/// Error API response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponseDto {
    /// Always false
    pub success: bool,
    pub error: ErrorDetail,
}

/// Error information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional context (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Paginated list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    /// Current page number (starts at 1)
    pub page: i64,
    /// Number of results per page
    pub page_size: i64,
    /// Total number of results across all pages
    pub total: i64,
    /// Total number of pages
    pub total_pages: i64,
}
