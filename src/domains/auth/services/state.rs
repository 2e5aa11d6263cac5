// Auth domain state
// 인증 도메인 상태
use std::sync::Arc;

use crate::domains::auth::services::{AuthService, TokenService};
use crate::shared::store::UserStore;

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
    pub token_service: TokenService,
}

impl AuthState {
    /// Create AuthState with the user store and token service
    /// AuthState 생성 (사용자 저장소와 토큰 서비스 필요)
    pub fn new(users: Arc<UserStore>, token_service: TokenService) -> Self {
        Self {
            auth_service: AuthService::new(users, token_service.clone()),
            token_service,
        }
    }
}
