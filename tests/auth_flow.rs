// =====================================================
// 인증 흐름 통합 테스트
// Auth flow integration tests
// =====================================================

mod common;
use common::*;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{Duration, Utc};
use commodity_api_server::shared::errors::ApiError;
use commodity_api_server::domains::auth::models::{LoginRequest, SignupRequest};

/// 가입 후 로그인하면 토큰이 가입 이메일로 검증된다
#[tokio::test]
async fn test_signup_login_roundtrip() {
    let (state, _payout) = setup_test();

    signup(&state, "alice@example.com");
    let token = login(&state, "alice@example.com");

    let email = state
        .auth_state
        .token_service
        .verify(&token)
        .expect("token should verify");
    assert_eq!(email, "alice@example.com");
}

/// 같은 이메일로 두 번 가입하면 충돌
#[tokio::test]
async fn test_duplicate_signup_rejected() {
    let (state, _payout) = setup_test();

    signup(&state, "alice@example.com");

    let err = state
        .auth_state
        .auth_service
        .signup(SignupRequest {
            email: "alice@example.com".to_string(),
            password: "other-password".to_string(),
            payout_address: "elsewhere@example.com".to_string(),
        })
        .expect_err("duplicate signup should fail");
    assert!(matches!(err, ApiError::UserAlreadyExists { .. }));
}

/// 잘못된 비밀번호와 미등록 이메일은 같은 에러를 받는다
#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let (state, _payout) = setup_test();

    signup(&state, "alice@example.com");

    let err = state
        .auth_state
        .auth_service
        .login(LoginRequest {
            email: "alice@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .expect_err("wrong password should fail");
    assert!(matches!(err, ApiError::InvalidCredentials));

    let err = state
        .auth_state
        .auth_service
        .login(LoginRequest {
            email: "nobody@example.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .expect_err("unknown user should fail");
    assert!(matches!(err, ApiError::InvalidCredentials));
}

/// 만료 시각이 지난 토큰은 검증에 실패한다 (시계 시뮬레이션)
#[tokio::test]
async fn test_token_expires_after_24_hours() {
    let (state, _payout) = setup_test();

    signup(&state, "alice@example.com");
    let token = login(&state, "alice@example.com");

    let token_service = &state.auth_state.token_service;

    // 23시간 후: 아직 유효
    assert!(token_service
        .verify_at(&token, Utc::now() + Duration::hours(23))
        .is_ok());

    // 25시간 후: 만료
    let err = token_service
        .verify_at(&token, Utc::now() + Duration::hours(25))
        .expect_err("expired token should fail");
    assert!(matches!(err, ApiError::InvalidToken));
}

/// 과거 시점에 발급된 토큰은 즉시 만료 상태
#[tokio::test]
async fn test_token_issued_in_the_past_is_expired() {
    let (state, _payout) = setup_test();

    let token = state
        .auth_state
        .token_service
        .issue_at("alice@example.com", Utc::now() - Duration::hours(25))
        .expect("issue should succeed");

    assert!(state.auth_state.token_service.verify(&token).is_err());
}

/// 페이로드를 변조하면 서명 불일치로 거부된다
#[tokio::test]
async fn test_tampered_payload_rejected() {
    let (state, _payout) = setup_test();

    signup(&state, "alice@example.com");
    let token = login(&state, "alice@example.com");

    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3);

    // 페이로드의 이메일을 바꿔치기하고 서명은 그대로 둔다
    let payload = BASE64.decode(parts[1]).expect("payload should decode");
    let mut claims: serde_json::Value =
        serde_json::from_slice(&payload).expect("payload should parse");
    claims["email"] = serde_json::json!("attacker@example.com");
    let forged_payload = BASE64.encode(claims.to_string());

    let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);
    assert!(state.auth_state.token_service.verify(&forged).is_err());
}

/// 형식이 깨진 토큰은 파싱 단계에서 거부된다
#[tokio::test]
async fn test_malformed_token_rejected() {
    let (state, _payout) = setup_test();

    let token_service = &state.auth_state.token_service;
    assert!(token_service.verify("not-a-token").is_err());
    assert!(token_service.verify("a.b").is_err());
    assert!(token_service.verify("").is_err());
}

/// 구버전 호환 모드: 서명이 연결 해시 형식 그대로인지 확인
///
/// 이 서명 방식은 MAC이 아니며 비밀키가 서명에 그대로 포함됩니다.
/// 알려진 약점으로 유지되는 동작이므로 형식 자체를 고정합니다.
#[tokio::test]
async fn test_legacy_token_variant_preserves_wire_format() {
    let mut config = test_config();
    config.legacy_token_compat = true;
    let state = state_with_config(config);

    signup(&state, "alice@example.com");
    let token = login(&state, "alice@example.com");

    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3);

    // signature == base64(header_b64 + payload_b64 + secret)
    let expected = BASE64.encode(format!("{}{}{}", parts[0], parts[1], "test-signing-secret"));
    assert_eq!(parts[2], expected);

    // 검증은 여전히 가입 이메일을 돌려준다
    let email = state
        .auth_state
        .token_service
        .verify(&token)
        .expect("legacy token should verify");
    assert_eq!(email, "alice@example.com");

    // 변조는 여전히 거부된다
    let forged = format!("{}.{}.{}", parts[0], BASE64.encode("{\"email\":\"x\",\"exp\":9999999999999}"), parts[2]);
    assert!(state.auth_state.token_service.verify(&forged).is_err());
}

// 설정을 바꿔 AppState를 만드는 로컬 헬퍼
// Local helper: build an AppState from a modified config
fn state_with_config(
    config: commodity_api_server::shared::config::AppConfig,
) -> commodity_api_server::shared::services::AppState {
    use commodity_api_server::shared::clients::MockPayoutProvider;
    use std::sync::Arc;

    commodity_api_server::shared::services::AppState::new(
        config,
        Arc::new(MockPayoutProvider::new()),
    )
}
