//! Standard JSON response envelopes for axum services.
//!
//! * [`errors::ResponseError`] carries a code, message, HTTP status and details.
//! * [`api::emitter`] writes success, error and paginated list bodies.
//! * [`models`] holds the wire shapes.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;

pub use api::context::{ResponseContext, ResponseWriter};
pub use errors::{ApiError, ErrorCode, ResponseError};
pub use models::{ApiResponse, ListResponse, Pagination, PaginationParams};
