pub mod context;
pub mod emitter;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;

pub use context::{ResponseContext, ResponseWriter};
pub use emitter::{
    calculate_pagination, created_response, error_response, list_response_with_pagination,
    no_content_response, ok_response, success_response, updated_response,
};
