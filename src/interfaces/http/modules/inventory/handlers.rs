//! Inventory management handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{InventoryItemDto, SaveItemRequest};
use crate::application::{InventoryService, SaveItem};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

/// Inventory handler state
#[derive(Clone)]
pub struct InventoryHandlerState {
    pub inventory: Arc<InventoryService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory",
    tag = "Inventory",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All inventory items", body = ApiResponse<Vec<InventoryItemDto>>)
    )
)]
pub async fn list_items(
    State(state): State<InventoryHandlerState>,
) -> Result<Json<ApiResponse<Vec<InventoryItemDto>>>, (StatusCode, Json<ApiResponse<Vec<InventoryItemDto>>>)>
{
    let items = state.inventory.list_items().await.map_err(domain_error)?;

    let items: Vec<InventoryItemDto> = items.into_iter().map(InventoryItemDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    post,
    path = "/api/v1/inventory",
    tag = "Inventory",
    security(("bearer_auth" = [])),
    request_body = SaveItemRequest,
    responses(
        (status = 200, description = "Item saved (created or overwritten)", body = ApiResponse<InventoryItemDto>),
        (status = 422, description = "Negative stock or reorder level")
    )
)]
pub async fn save_item(
    State(state): State<InventoryHandlerState>,
    ValidatedJson(request): ValidatedJson<SaveItemRequest>,
) -> Result<Json<ApiResponse<InventoryItemDto>>, (StatusCode, Json<ApiResponse<InventoryItemDto>>)>
{
    let stored = state
        .inventory
        .save_item(SaveItem {
            item: request.item,
            category: request.category,
            stock: request.stock,
            reorder_level: request.reorder_level,
        })
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(InventoryItemDto::from(stored))))
}
