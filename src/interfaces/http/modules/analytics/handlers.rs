//! Stock analysis handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::StockSummaryDto;
use crate::application::InventoryService;
use crate::interfaces::http::common::{domain_error, ApiResponse};
use crate::interfaces::http::modules::inventory::dto::InventoryItemDto;

/// Analytics handler state
#[derive(Clone)]
pub struct AnalyticsHandlerState {
    pub inventory: Arc<InventoryService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/summary",
    tag = "Analytics",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Stock summary metrics", body = ApiResponse<StockSummaryDto>)
    )
)]
pub async fn stock_summary(
    State(state): State<AnalyticsHandlerState>,
) -> Result<Json<ApiResponse<StockSummaryDto>>, (StatusCode, Json<ApiResponse<StockSummaryDto>>)> {
    let summary = state.inventory.summary().await.map_err(domain_error)?;

    Ok(Json(ApiResponse::success(StockSummaryDto::from(summary))))
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/low-stock",
    tag = "Analytics",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Items at or below their reorder level", body = ApiResponse<Vec<InventoryItemDto>>)
    )
)]
pub async fn low_stock_items(
    State(state): State<AnalyticsHandlerState>,
) -> Result<Json<ApiResponse<Vec<InventoryItemDto>>>, (StatusCode, Json<ApiResponse<Vec<InventoryItemDto>>>)>
{
    let items = state
        .inventory
        .low_stock_items()
        .await
        .map_err(domain_error)?;

    let items: Vec<InventoryItemDto> = items.into_iter().map(InventoryItemDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}
