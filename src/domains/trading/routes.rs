use axum::{
    routing::{get, post},
    Router,
};

use crate::shared::services::AppState;

use super::handlers;

/// 트레이딩 라우터 생성
/// Create trading router
///
/// # Routes
///
/// - `GET  /api/commodities`  - 상품 시세 목록 (인증 필요)
/// - `POST /api/buy`          - 매수 (인증 필요)
/// - `POST /api/sell`         - 매도 (인증 필요)
/// - `POST /api/withdraw`     - 출금 (인증 필요)
/// - `GET  /api/admin/trades` - 전체 거래 내역 (인증 + 허용 목록)
pub fn create_trading_router() -> Router<AppState> {
    Router::new()
        .route("/commodities", get(handlers::list_commodities))
        .route("/buy", post(handlers::buy))
        .route("/sell", post(handlers::sell))
        .route("/withdraw", post(handlers::withdraw))
        .route("/admin/trades", get(handlers::admin_list_trades))
}
