use axum::{routing::post, Router};

use crate::shared::services::AppState;

use super::handlers;

/// 인증 라우터 생성
/// Create auth router
///
/// - `POST /api/signup` - 회원가입
/// - `POST /api/login`  - 로그인 (토큰 발급)
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
}
