// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::Router;

use crate::domains::auth::routes::create_auth_router;
use crate::domains::trading::routes::create_trading_router;
use crate::shared::services::AppState;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", create_auth_router().merge(create_trading_router()))
}
