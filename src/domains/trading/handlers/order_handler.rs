use axum::{extract::State, http::StatusCode, Json};

use crate::domains::trading::models::{BuyRequest, OrderResponse, SellRequest};
use crate::shared::errors::ApiError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;

// 매수 핸들러
#[utoipa::path(
    post,
    path = "/api/buy",
    request_body = BuyRequest,
    responses(
        (status = 200, description = "Buy executed", body = OrderResponse),
        (status = 400, description = "Unknown commodity"),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Holdings cap exceeded"),
        (status = 502, description = "Payout provider failure")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Trading"
)]
pub async fn buy(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<BuyRequest>,
) -> Result<Json<OrderResponse>, (StatusCode, Json<serde_json::Value>)> {
    // Service 호출 (비즈니스 로직)
    let trade = app_state
        .trading_state
        .trading_service
        .buy(
            &authenticated_user.email,
            &request.symbol,
            request.units,
            request.amount,
        )
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(OrderResponse {
        message: format!("Bought {} {}", trade.units, trade.symbol),
    }))
}

// 매도 핸들러
#[utoipa::path(
    post,
    path = "/api/sell",
    request_body = SellRequest,
    responses(
        (status = 200, description = "Sell executed", body = OrderResponse),
        (status = 400, description = "Unknown commodity"),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Insufficient holdings")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Trading"
)]
pub async fn sell(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<SellRequest>,
) -> Result<Json<OrderResponse>, (StatusCode, Json<serde_json::Value>)> {
    let trade = app_state
        .trading_state
        .trading_service
        .sell(&authenticated_user.email, &request.symbol, request.units)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(OrderResponse {
        message: format!("Sold {} {}", trade.units, trade.symbol),
    }))
}
