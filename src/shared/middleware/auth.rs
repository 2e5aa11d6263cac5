use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

use crate::shared::errors::ApiError;
use crate::shared::services::AppState;

/// 인증된 사용자 정보 (토큰에서 추출)
/// Authenticated user information (extracted from the bearer token)
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
}

/// AuthenticatedUser를 Axum Extractor로 구현
///
/// 사용법:
/// ```ignore
/// pub async fn buy(
///     State(app_state): State<AppState>,
///     authenticated_user: AuthenticatedUser,  // <- 이렇게 사용!
///     Json(request): Json<BuyRequest>,
/// ) -> Result<...> {
///     let email = authenticated_user.email;
///     // ...
/// }
/// ```
#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 토큰 추출
        let headers = &parts.headers;
        let auth_header = headers
            .get("Authorization")
            .ok_or_else(|| -> (StatusCode, axum::Json<serde_json::Value>) {
                ApiError::MissingToken.into()
            })?
            .to_str()
            .map_err(|_| -> (StatusCode, axum::Json<serde_json::Value>) {
                ApiError::InvalidToken.into()
            })?;

        // 2. 토큰 파싱: 구버전 클라이언트는 토큰만, 신버전은 "Bearer <token>"
        // Legacy clients send the bare token; newer ones prefix "Bearer ".
        // Both are accepted.
        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

        // 3. 토큰 검증 (AppState의 TokenService 사용)
        let email = state
            .auth_state
            .token_service
            .verify(token)
            .map_err(|e: ApiError| -> (StatusCode, axum::Json<serde_json::Value>) { e.into() })?;

        // 4. AuthenticatedUser 반환
        Ok(AuthenticatedUser { email })
    }
}
