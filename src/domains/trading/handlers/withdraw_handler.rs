use axum::{extract::State, http::StatusCode, Json};

use crate::domains::trading::models::{WithdrawRequest, WithdrawResponse};
use crate::shared::errors::ApiError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;

/// 출금 핸들러
/// Withdraw handler
///
/// 가입 시 등록한 출금 주소로 결제 제공자를 통해 송금합니다.
#[utoipa::path(
    post,
    path = "/api/withdraw",
    request_body = WithdrawRequest,
    responses(
        (status = 200, description = "Withdrawal paid out", body = WithdrawResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Amount over the withdrawal cap"),
        (status = 502, description = "Payout provider failure")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Trading"
)]
pub async fn withdraw(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<WithdrawRequest>,
) -> Result<Json<WithdrawResponse>, (StatusCode, Json<serde_json::Value>)> {
    let payout = app_state
        .trading_state
        .trading_service
        .withdraw(&authenticated_user.email, request.amount)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(WithdrawResponse {
        success: true,
        payout,
    }))
}
