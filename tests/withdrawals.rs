// =====================================================
// 출금 통합 테스트
// Withdrawal integration tests
// =====================================================

mod common;
use common::*;

use commodity_api_server::shared::errors::ApiError;
use rust_decimal::Decimal;

const BOB: &str = "bob@example.com";

/// 한도(500) 초과 출금은 결제 제공자 호출 없이 거부된다
#[tokio::test]
async fn test_withdraw_over_limit_never_reaches_provider() {
    let (state, payout) = setup_test();
    signup(&state, BOB);

    let err = state
        .trading_state
        .trading_service
        .withdraw(BOB, Decimal::new(50001, 2)) // 500.01
        .await
        .expect_err("over-limit withdrawal should fail");
    assert!(matches!(err, ApiError::WithdrawLimitExceeded { .. }));

    assert_eq!(payout.call_count(), 0);
    assert_eq!(state.users.lookup(BOB).expect("user exists").withdrawals, 0);
}

/// 정확히 500까지는 허용된다
#[tokio::test]
async fn test_withdraw_at_limit_allowed() {
    let (state, payout) = setup_test();
    signup(&state, BOB);

    state
        .trading_state
        .trading_service
        .withdraw(BOB, Decimal::new(500, 0))
        .await
        .expect("withdrawal at the cap should succeed");

    assert_eq!(payout.call_count(), 1);
}

/// 출금은 가입 시 등록한 주소로 송금되고 영수증을 그대로 반환한다
#[tokio::test]
async fn test_withdraw_pays_registered_address_and_returns_receipt() {
    let (state, payout) = setup_test();
    signup(&state, BOB);

    let receipt = state
        .trading_state
        .trading_service
        .withdraw(BOB, Decimal::new(250, 0))
        .await
        .expect("withdrawal should succeed");

    // Mock 영수증이 그대로 전달된다
    assert!(receipt["batch_header"]["payout_batch_id"].is_string());

    let calls = payout.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].recipient, payout_address(BOB));
    assert_eq!(calls[0].amount, Decimal::new(250, 0));

    // 누적 출금 횟수 증가. 보유 수량이나 잔고는 차감되지 않는다.
    assert_eq!(state.users.lookup(BOB).expect("user exists").withdrawals, 1);
}

/// 제공자 실패 시 출금은 에러로 끝나고 횟수도 늘지 않는다
#[tokio::test]
async fn test_withdraw_provider_failure_propagates() {
    let (state, payout) = setup_test();
    signup(&state, BOB);

    payout.set_failing(true);

    let err = state
        .trading_state
        .trading_service
        .withdraw(BOB, Decimal::new(100, 0))
        .await
        .expect_err("withdrawal should fail when the provider fails");
    assert!(matches!(err, ApiError::ExternalService(_)));

    assert_eq!(state.users.lookup(BOB).expect("user exists").withdrawals, 0);
}

/// 연속 출금은 누적 횟수를 차례로 증가시킨다
#[tokio::test]
async fn test_withdrawals_accumulate() {
    let (state, payout) = setup_test();
    signup(&state, BOB);

    for _ in 0..3 {
        state
            .trading_state
            .trading_service
            .withdraw(BOB, Decimal::new(10, 0))
            .await
            .expect("withdrawal should succeed");
    }

    assert_eq!(payout.call_count(), 3);
    assert_eq!(state.users.lookup(BOB).expect("user exists").withdrawals, 3);
}
