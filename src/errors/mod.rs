//! Structured error handling for API responses

pub mod api_error;
pub mod codes;
pub mod response;

pub use api_error::ApiError;
pub use codes::ErrorCode;
pub use response::ResponseError;
