use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};

/// Sink that a single response is written to
pub trait ResponseWriter {
    /// Serialize `body` as JSON and send it with `status`
    fn write_json<T: Serialize + ?Sized>(&mut self, status: StatusCode, body: &T);

    /// Send `status` with no body
    fn write_status(&mut self, status: StatusCode);
}

/// Per-request axum response holder.
///
/// Only the first write is kept. Converting an unwritten context yields the
/// generic 500 envelope.
#[derive(Debug, Default)]
pub struct ResponseContext {
    response: Option<Response>,
}

impl ResponseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_written(&self) -> bool {
        self.response.is_some()
    }

    fn store(&mut self, response: Response) {
        if self.response.is_some() {
            warn!(
                status = %response.status().as_u16(),
                "Response already written, ignoring second write"
            );
            return;
        }
        self.response = Some(response);
    }
}

impl ResponseWriter for ResponseContext {
    fn write_json<T: Serialize + ?Sized>(&mut self, status: StatusCode, body: &T) {
        let response = match serde_json::to_vec(body) {
            Ok(bytes) => json_response(status, bytes),
            Err(e) => {
                error!(error = %e, "Failed to serialize response body");
                fallback_response(&e.to_string())
            }
        };
        self.store(response);
    }

    fn write_status(&mut self, status: StatusCode) {
        self.store(status.into_response());
    }
}

impl IntoResponse for ResponseContext {
    fn into_response(self) -> Response {
        match self.response {
            Some(response) => response,
            None => {
                error!("Handler finished without writing a response");
                fallback_response("no response was written")
            }
        }
    }
}

fn json_response(status: StatusCode, bytes: Vec<u8>) -> Response {
    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

/// The generic 500 body, built without any fallible serialization step
pub(crate) fn fallback_body(cause: &str) -> serde_json::Value {
    json!({
        "success": false,
        "error": {
            "code": crate::errors::ErrorCode::InternalServerError.as_str(),
            "message": "An unexpected error occurred",
            "details": { "error": cause },
        },
    })
}

fn fallback_response(cause: &str) -> Response {
    json_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        fallback_body(cause).to_string().into_bytes(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn body_json(response: Response) -> Value {
        let bytes = tokio_test::block_on(axum::body::to_bytes(response.into_body(), usize::MAX))
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_write_json_sets_status_and_content_type() {
        let mut ctx = ResponseContext::new();
        ctx.write_json(StatusCode::CREATED, &json!({"id": 1}));
        let response = ctx.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(body_json(response), json!({"id": 1}));
    }

    #[test]
    fn test_second_write_is_ignored() {
        let mut ctx = ResponseContext::new();
        ctx.write_status(StatusCode::NO_CONTENT);
        ctx.write_json(StatusCode::OK, &json!({"late": true}));
        assert!(ctx.is_written());
        assert_eq!(ctx.into_response().status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_unwritten_context_is_500_envelope() {
        let response = ResponseContext::new().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INTERNAL_SERVER_ERROR");
    }

    #[test]
    fn test_unserializable_body_is_500_envelope() {
        use std::collections::HashMap;

        // JSON object keys must be strings
        let mut bad = HashMap::new();
        bad.insert(vec![1u8], "v");

        let mut ctx = ResponseContext::new();
        ctx.write_json(StatusCode::OK, &bad);
        let response = ctx.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response)["error"]["message"],
            "An unexpected error occurred"
        );
    }
}
