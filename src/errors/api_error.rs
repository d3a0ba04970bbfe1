use axum::response::{IntoResponse, Response};

use super::response::ResponseError;
use crate::api::context::ResponseContext;
use crate::api::emitter::error_response;

/// Handler error type that lets any failure be returned with `?`.
///
/// A [`ResponseError`] anywhere in the chain is rendered with its own code and
/// status; everything else becomes the generic 500 envelope.
#[derive(Debug)]
pub struct ApiError(pub anyhow::Error);

impl ApiError {
    /// The structured error inside this chain, if any
    pub fn response_error(&self) -> Option<&ResponseError> {
        self.0
            .chain()
            .find_map(|cause| cause.downcast_ref::<ResponseError>())
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut ctx = ResponseContext::new();
        match self.response_error() {
            Some(known) => error_response(&mut ctx, known),
            None => {
                let cause: &(dyn std::error::Error + 'static) = self.0.as_ref();
                error_response(&mut ctx, cause)
            }
        }
        ctx.into_response()
    }
}
