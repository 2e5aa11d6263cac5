// =====================================================
// 통합 테스트 공통 헬퍼
// Shared helpers for the integration tests
// =====================================================
// 목적: 테스트마다 독립된 AppState와 Mock 결제 제공자를 구성
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let (state, payout) = setup_test();
//     // 테스트 코드...
// }
// ```
// =====================================================

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use commodity_api_server::domains::auth::models::{LoginRequest, SignupRequest};
use commodity_api_server::shared::clients::MockPayoutProvider;
use commodity_api_server::shared::config::{AppConfig, PayoutConfig};
use commodity_api_server::shared::services::AppState;

// 테스트용 상수
pub const ADMIN_EMAIL: &str = "ops@example.com";
pub const TEST_PASSWORD: &str = "hunter2";
pub const HOUSE_ACCOUNT: &str = "house@example.com";

/// 테스트용 설정 (허용 목록에 ADMIN_EMAIL 포함)
/// Test configuration with ADMIN_EMAIL on the allow-list
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        token_secret: "test-signing-secret".to_string(),
        legacy_token_compat: false,
        admin_identities: HashSet::from([ADMIN_EMAIL.to_string()]),
        payout: PayoutConfig {
            api_url: "http://127.0.0.1:1".to_string(),
            client_id: "test-client".to_string(),
            client_secret: "test-client-secret".to_string(),
            house_account: HOUSE_ACCOUNT.to_string(),
        },
    }
}

/// 테스트 전 초기화
///
/// 독립된 AppState와 기록형 Mock 결제 제공자를 생성합니다.
/// Fresh AppState plus the recording payout mock injected into it.
pub fn setup_test() -> (AppState, Arc<MockPayoutProvider>) {
    let payout = Arc::new(MockPayoutProvider::new());
    let state = AppState::new(test_config(), payout.clone());
    (state, payout)
}

/// 이메일별 출금 주소 (가입 시 등록되는 값)
/// Payout address registered for `email` at signup
pub fn payout_address(email: &str) -> String {
    format!("payout+{email}")
}

/// 회원가입 헬퍼
/// Signup helper
pub fn signup(state: &AppState, email: &str) {
    state
        .auth_state
        .auth_service
        .signup(SignupRequest {
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
            payout_address: payout_address(email),
        })
        .expect("signup failed");
}

/// 로그인 헬퍼 (토큰 반환)
/// Login helper; returns the issued token
pub fn login(state: &AppState, email: &str) -> String {
    state
        .auth_state
        .auth_service
        .login(LoginRequest {
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .expect("login failed")
}
