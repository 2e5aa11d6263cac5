use axum::{extract::State, Json};

use crate::domains::trading::models::Trade;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;

/// 전체 거래 내역 조회 핸들러
/// Admin trade listing handler
///
/// 허용 목록에 있는 계정만 전체 원장을 받고, 그 외 인증된 사용자는 빈
/// 목록을 받습니다 (에러 아님).
/// Full ledger for allow-listed identities; everyone else authenticated
/// gets an empty list, not an error.
#[utoipa::path(
    get,
    path = "/api/admin/trades",
    responses(
        (status = 200, description = "Full trade ledger, or [] for non-privileged callers", body = Vec<Trade>),
        (status = 401, description = "Missing or invalid token")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Admin"
)]
pub async fn admin_list_trades(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Json<Vec<Trade>> {
    Json(
        app_state
            .trading_state
            .trading_service
            .admin_list_trades(&authenticated_user.email),
    )
}
