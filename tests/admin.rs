// =====================================================
// 관리자 거래 내역 조회 테스트
// Admin trade-listing integration tests
// =====================================================

mod common;
use common::*;

use commodity_api_server::domains::trading::models::TradeSide;
use rust_decimal::Decimal;

const CAROL: &str = "carol@example.com";

/// 허용 목록의 계정은 전체 원장을 추가된 순서 그대로 받는다
#[tokio::test]
async fn test_privileged_identity_sees_full_ledger() {
    let (state, _payout) = setup_test();
    signup(&state, ADMIN_EMAIL);
    signup(&state, CAROL);

    let service = &state.trading_state.trading_service;
    service
        .buy(CAROL, "ALU", 100, Decimal::new(110, 2))
        .await
        .expect("buy should succeed");
    service
        .sell(CAROL, "ALU", 30)
        .await
        .expect("sell should succeed");
    service
        .buy(CAROL, "GAS", 5, Decimal::new(10, 2))
        .await
        .expect("buy should succeed");

    let trades = service.admin_list_trades(ADMIN_EMAIL);
    assert_eq!(trades.len(), 3);
    assert_eq!(trades, state.ledger.query_all());

    // 순서는 체결 순서 그대로
    assert_eq!(trades[0].side, TradeSide::Buy);
    assert_eq!(trades[0].symbol, "ALU");
    assert_eq!(trades[1].side, TradeSide::Sell);
    assert_eq!(trades[2].symbol, "GAS");
}

/// 허용 목록 밖의 인증된 사용자는 에러가 아니라 빈 목록을 받는다
#[tokio::test]
async fn test_non_privileged_identity_gets_empty_list() {
    let (state, _payout) = setup_test();
    signup(&state, CAROL);

    state
        .trading_state
        .trading_service
        .buy(CAROL, "ALU", 10, Decimal::new(11, 2))
        .await
        .expect("buy should succeed");

    let trades = state.trading_state.trading_service.admin_list_trades(CAROL);
    assert!(trades.is_empty());

    // 원장 자체는 비어 있지 않다
    assert_eq!(state.ledger.len(), 1);
}
