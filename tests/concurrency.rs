// =====================================================
// 동시성 통합 테스트
// Concurrency integration tests
// =====================================================

mod common;
use common::*;

use rust_decimal::Decimal;

const RACER: &str = "racer@example.com";
const OTHER: &str = "other@example.com";

/// 같은 (사용자, 상품) 쌍에 대한 동시 매수가 1000개 한도를 넘길 수 없다
///
/// 200개 매수 8건을 동시에 던지면 어떤 순서로 직렬화되든 정확히 5건만
/// 성공해야 한다 (5 * 200 = 1000).
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_buys_respect_holdings_cap() {
    let (state, _payout) = setup_test();
    signup(&state, RACER);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            state
                .trading_state
                .trading_service
                .buy(RACER, "ALU", 200, Decimal::new(220, 2))
                .await
                .is_ok()
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.expect("buy task should not panic") {
            successes += 1;
        }
    }

    assert_eq!(successes, 5);
    assert_eq!(state.users.holding(RACER, "ALU"), 1000);

    // 성공한 매수만 원장에 남고, 가격 변동도 성공 건수만큼만 적용된다
    assert_eq!(state.ledger.len(), 5);
    let alu = state.market.get("ALU").expect("ALU should exist");
    assert_eq!(alu.price, Decimal::new(11, 9) + Decimal::new(1000, 9));
}

/// 서로 다른 사용자의 동시 주문은 서로를 막지 않고 모두 체결된다
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_buys_by_different_users_all_execute() {
    let (state, _payout) = setup_test();
    signup(&state, RACER);
    signup(&state, OTHER);

    let state_a = state.clone();
    let a = tokio::spawn(async move {
        state_a
            .trading_state
            .trading_service
            .buy(RACER, "OIL", 200, Decimal::new(100, 0))
            .await
    });
    let state_b = state.clone();
    let b = tokio::spawn(async move {
        state_b
            .trading_state
            .trading_service
            .buy(OTHER, "OIL", 300, Decimal::new(150, 0))
            .await
    });

    a.await.expect("task should not panic").expect("buy should succeed");
    b.await.expect("task should not panic").expect("buy should succeed");

    assert_eq!(state.users.holding(RACER, "OIL"), 200);
    assert_eq!(state.users.holding(OTHER, "OIL"), 300);
    assert_eq!(state.ledger.len(), 2);

    // 두 체결의 가격 변동이 모두 반영된다
    let oil = state.market.get("OIL").expect("OIL should exist");
    assert_eq!(oil.price, Decimal::new(100, 9) + Decimal::new(500, 9));

    // 기록된 가격은 각 체결 직전의 스냅샷이므로 시작가보다 낮을 수 없다
    for trade in state.ledger.query_all() {
        assert!(trade.price >= Decimal::new(100, 9));
    }
}

/// 매도 경쟁: 보유 수량이 음수로 내려갈 수 없다
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sells_cannot_overdraw() {
    let (state, _payout) = setup_test();
    signup(&state, RACER);

    state
        .trading_state
        .trading_service
        .buy(RACER, "COP", 100, Decimal::new(100, 2))
        .await
        .expect("seed buy should succeed");

    let mut handles = Vec::new();
    for _ in 0..4 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            state
                .trading_state
                .trading_service
                .sell(RACER, "COP", 60)
                .await
                .is_ok()
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.expect("sell task should not panic") {
            successes += 1;
        }
    }

    // 100개 보유로 60개 매도는 한 번만 가능하다
    assert_eq!(successes, 1);
    assert_eq!(state.users.holding(RACER, "COP"), 40);
    assert_eq!(state.ledger.len(), 2); // seed buy + one sell
}
