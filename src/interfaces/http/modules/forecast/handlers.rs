//! Forecast handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::StockProjectionDto;
use crate::application::ForecastService;
use crate::interfaces::http::common::{domain_error, ApiResponse};

/// Forecast handler state
#[derive(Clone)]
pub struct ForecastHandlerState {
    pub forecast: Arc<ForecastService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/forecast",
    tag = "Forecast",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Projected stock per item", body = ApiResponse<Vec<StockProjectionDto>>)
    )
)]
pub async fn stock_forecast(
    State(state): State<ForecastHandlerState>,
) -> Result<Json<ApiResponse<Vec<StockProjectionDto>>>, (StatusCode, Json<ApiResponse<Vec<StockProjectionDto>>>)>
{
    let projections = state.forecast.forecast().await.map_err(domain_error)?;

    let projections: Vec<StockProjectionDto> = projections
        .into_iter()
        .map(StockProjectionDto::from)
        .collect();
    Ok(Json(ApiResponse::success(projections)))
}
