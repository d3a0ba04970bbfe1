//! Functions that write the standard success, error, and list envelopes.
//!
//! Every function writes exactly one response to the supplied
//! [`ResponseWriter`] and never fails.

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::json;
use std::error::Error as StdError;
use tracing::{debug, error};

use super::context::{fallback_body, ResponseWriter};
use crate::errors::ResponseError;
use crate::models::{ApiResponse, ListResponse, Pagination};

/// Page size used when the caller passes a non-positive value
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Write `{success: true, data, message}` with `status`
pub fn success_response<W, T>(ctx: &mut W, status: StatusCode, data: Option<T>, message: &str)
where
    W: ResponseWriter,
    T: Serialize,
{
    let message = (!message.is_empty()).then(|| message.to_string());
    ctx.write_json(status, &ApiResponse::success(data, message));
}

/// 200 OK
pub fn ok_response<W: ResponseWriter, T: Serialize>(ctx: &mut W, data: Option<T>, message: &str) {
    success_response(ctx, StatusCode::OK, data, message);
}

/// 201 Created
pub fn created_response<W: ResponseWriter, T: Serialize>(
    ctx: &mut W,
    data: Option<T>,
    message: &str,
) {
    success_response(ctx, StatusCode::CREATED, data, message);
}

/// 202 Accepted, used for updates
pub fn updated_response<W: ResponseWriter, T: Serialize>(
    ctx: &mut W,
    data: Option<T>,
    message: &str,
) {
    success_response(ctx, StatusCode::ACCEPTED, data, message);
}

/// 204 No Content, empty body
pub fn no_content_response<W: ResponseWriter>(ctx: &mut W) {
    ctx.write_status(StatusCode::NO_CONTENT);
}

/// Write an error envelope.
///
/// A [`ResponseError`] is written at its own status with its code, message and
/// details. Any other error becomes a 500 `INTERNAL_SERVER_ERROR` whose
/// `details.error` holds the error's message.
pub fn error_response<W: ResponseWriter>(ctx: &mut W, err: &(dyn StdError + 'static)) {
    if let Some(app_err) = err.downcast_ref::<ResponseError>() {
        debug!(
            code = %app_err.code,
            status = app_err.status_code,
            message = %app_err.message,
            "Emitting error response"
        );
        let body = ApiResponse::<()>::failure(json!({
            "code": app_err.code,
            "message": app_err.message,
            "details": app_err.details,
        }));
        ctx.write_json(app_err.status(), &body);
        return;
    }

    error!(error = %err, "Unhandled error, responding with 500");
    ctx.write_json(
        StatusCode::INTERNAL_SERVER_ERROR,
        &fallback_body(&err.to_string()),
    );
}

/// Write `{success: true, data, pagination}`; always 200
pub fn list_response_with_pagination<W, T>(ctx: &mut W, data: T, pagination: Option<Pagination>)
where
    W: ResponseWriter,
    T: Serialize,
{
    ctx.write_json(
        StatusCode::OK,
        &ListResponse {
            success: true,
            data,
            pagination,
        },
    );
}

/// Build pagination metadata.
///
/// `page` below 1 becomes 1 and `page_size` below 1 becomes
/// [`DEFAULT_PAGE_SIZE`]. `total` is taken as-is, so a negative total yields
/// a non-positive or truncated page count.
pub fn calculate_pagination(page: i64, page_size: i64, total: i64) -> Pagination {
    let page = if page < 1 { 1 } else { page };
    let page_size = if page_size < 1 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };

    let mut total_pages = total / page_size;
    if total % page_size != 0 {
        total_pages += 1;
    }

    Pagination {
        page,
        page_size,
        total,
        total_pages,
    }
}
