use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::domains::trading::models::Commodity;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;

/// 상품 목록 조회 핸들러
/// List commodities handler
///
/// 인증된 사용자에게 전체 카탈로그 스냅샷을 반환합니다.
#[utoipa::path(
    get,
    path = "/api/commodities",
    responses(
        (status = 200, description = "Commodity catalog snapshot (symbol -> price/supply)"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Market"
)]
pub async fn list_commodities(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
) -> Json<BTreeMap<String, Commodity>> {
    Json(app_state.trading_state.trading_service.list_commodities())
}
