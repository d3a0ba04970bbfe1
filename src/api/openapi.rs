use utoipa::OpenApi;

use crate::api::handlers::{CreateItemRequest, HealthData, Item};
use crate::errors::ErrorCode;
use crate::models::{ErrorDetail, ErrorResponseDto, Pagination, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Response Utils Demo",
        version = "0.1.0",
        description = "Demo service for the standard success, error and paginated list JSON envelopes.",
    ),
    paths(
        crate::api::handlers::health,
        crate::api::handlers::list_items,
        crate::api::handlers::get_item,
        crate::api::handlers::create_item,
        crate::api::handlers::delete_item,
    ),
    components(
        schemas(
            ErrorCode,
            ErrorDetail,
            ErrorResponseDto,
            Pagination,
            PaginationParams,
            Item,
            CreateItemRequest,
            HealthData,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "items", description = "Sample resource using every envelope"),
    )
)]
pub struct ApiDoc;
