use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::context::ResponseContext;
use super::emitter::{
    created_response, error_response, list_response_with_pagination, no_content_response,
    ok_response,
};
use crate::errors::{ApiError, ResponseError};
use crate::models::{ErrorResponseDto, PaginationParams};

lazy_static::lazy_static! {
    static ref START_TIME: Instant = Instant::now();
}

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    /// In-memory item store, seeded with sample items
    pub items: RwLock<Vec<Item>>,
    pub instance_id: String,
}

impl AppStateInner {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            items: RwLock::new(sample_items()),
            instance_id: instance_id.into(),
        }
    }
}

/// Catalogue item served by the demo endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
}

/// Body for `POST /items`
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    /// Display name, must not be blank
    pub name: String,
}

/// Health payload
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub service: String,
    pub instance_id: String,
    pub uptime_seconds: u64,
}

fn sample_items() -> Vec<Item> {
    ["alpha", "bravo", "charlie", "delta", "echo"]
        .iter()
        .enumerate()
        .map(|(i, name)| Item {
            id: Uuid::from_u128(i as u128 + 1),
            name: name.to_string(),
        })
        .collect()
}

fn parse_id(raw: &str) -> Result<Uuid, ResponseError> {
    Uuid::parse_str(raw).map_err(|_| ResponseError::invalid_uuid("id"))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy"))
)]
pub async fn health(State(state): State<AppState>) -> ResponseContext {
    let mut ctx = ResponseContext::new();
    ok_response(
        &mut ctx,
        Some(HealthData {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            instance_id: state.instance_id.clone(),
            uptime_seconds: START_TIME.elapsed().as_secs(),
        }),
        "",
    );
    ctx
}

/// List items with pagination
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    params(PaginationParams),
    responses((status = 200, description = "One page of items"))
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> ResponseContext {
    let items = state.items.read().await;
    let pagination = params.into_pagination(items.len() as i64);
    let offset = usize::try_from(params.offset()).unwrap_or(usize::MAX);
    let page_size = usize::try_from(pagination.page_size).unwrap_or(usize::MAX);
    let page: Vec<&Item> = items.iter().skip(offset).take(page_size).collect();

    let mut ctx = ResponseContext::new();
    list_response_with_pagination(&mut ctx, page, Some(pagination));
    ctx
}

/// Get a single item
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = String, Path, description = "Item UUID")),
    responses(
        (status = 200, description = "Item found"),
        (status = 400, description = "Malformed id", body = ErrorResponseDto),
        (status = 404, description = "Item not found", body = ErrorResponseDto)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ResponseContext, ApiError> {
    let id = parse_id(&id)?;
    let items = state.items.read().await;
    let item = items
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| ResponseError::not_found("Item"))?;

    let mut ctx = ResponseContext::new();
    ok_response(&mut ctx, Some(item), "");
    Ok(ctx)
}

/// Create an item
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created"),
        (status = 400, description = "Validation failed", body = ErrorResponseDto),
        (status = 409, description = "Name already used", body = ErrorResponseDto)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<CreateItemRequest>, JsonRejection>,
) -> ResponseContext {
    let mut ctx = ResponseContext::new();
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            error_response(&mut ctx, &ResponseError::invalid_body(rejection.body_text()));
            return ctx;
        }
    };
    let name = req.name.trim();

    if name.is_empty() {
        let err = ResponseError::invalid_input("name", "must not be blank");
        error_response(&mut ctx, &err);
        return ctx;
    }

    let mut items = state.items.write().await;
    if items.iter().any(|item| item.name == name) {
        let err = ResponseError::duplicate_entry("Item").with_detail("name", name);
        error_response(&mut ctx, &err);
        return ctx;
    }

    let item = Item {
        id: Uuid::new_v4(),
        name: name.to_string(),
    };
    items.push(item.clone());
    info!(item_id = %item.id, "Item created");
    created_response(&mut ctx, Some(item), "Item created successfully");
    ctx
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = String, Path, description = "Item UUID")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponseDto),
        (status = 404, description = "Item not found", body = ErrorResponseDto)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ResponseContext, ApiError> {
    let id = parse_id(&id)?;
    let mut items = state.items.write().await;
    let index = items
        .iter()
        .position(|item| item.id == id)
        .ok_or_else(|| ResponseError::not_found("Item"))?;
    items.remove(index);
    info!(item_id = %id, "Item deleted");

    let mut ctx = ResponseContext::new();
    no_content_response(&mut ctx);
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_items_have_stable_ids() {
        let items = sample_items();
        assert_eq!(items.len(), 5);
        assert_eq!(
            items[0].id.to_string(),
            "00000000-0000-0000-0000-000000000001"
        );
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        let err = parse_id("not-a-uuid").unwrap_err();
        assert_eq!(err.code, "INVALID_UUID");
        assert_eq!(err.message, "Invalid UUID format for field 'id'");
    }
}
