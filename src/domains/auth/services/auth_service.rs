use std::sync::Arc;

use crate::domains::auth::models::{LoginRequest, SignupRequest};
use crate::domains::auth::services::TokenService;
use crate::shared::errors::ApiError;
use crate::shared::store::UserStore;

// 인증 서비스
// AuthService: handles signup and login business logic
#[derive(Clone)]
pub struct AuthService {
    users: Arc<UserStore>,
    token_service: TokenService,
}

impl AuthService {
    pub fn new(users: Arc<UserStore>, token_service: TokenService) -> Self {
        Self {
            users,
            token_service,
        }
    }

    // 회원가입 (비즈니스 로직)
    // Signup: duplicate email is a conflict
    pub fn signup(&self, request: SignupRequest) -> Result<(), ApiError> {
        self.users
            .create(&request.email, &request.password, &request.payout_address)
    }

    // 로그인 (비즈니스 로직)
    // Login: authenticate, then issue a fresh token. Earlier tokens stay
    // valid until they expire; there is no session table to revoke them.
    pub fn login(&self, request: LoginRequest) -> Result<String, ApiError> {
        let user = self.users.authenticate(&request.email, &request.password)?;
        self.token_service.issue(&user.email)
    }
}
