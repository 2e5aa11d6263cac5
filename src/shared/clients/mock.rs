use anyhow::{bail, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde_json::json;

use super::PayoutProvider;

/// 기록된 송금 호출
/// One recorded payout call
#[derive(Debug, Clone)]
pub struct PayoutCall {
    pub recipient: String,
    pub amount: Decimal,
}

/// Mock 결제 제공자 (테스트용)
/// Recording payout provider for tests
///
/// 모든 호출을 기록하고, 실패 모드로 전환하면 네트워크 없이 송금 실패를
/// 흉내냅니다.
/// Records every call; flip `set_failing(true)` to simulate provider
/// failures without any network involved.
pub struct MockPayoutProvider {
    calls: Mutex<Vec<PayoutCall>>,
    failing: Mutex<bool>,
}

impl MockPayoutProvider {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(false),
        }
    }

    /// 이후 호출의 성공/실패 여부 설정
    /// Make subsequent calls fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock() = failing;
    }

    /// 지금까지 기록된 호출 목록
    /// Calls recorded so far
    pub fn calls(&self) -> Vec<PayoutCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Default for MockPayoutProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PayoutProvider for MockPayoutProvider {
    async fn send_payout(&self, recipient: &str, amount: Decimal) -> Result<serde_json::Value> {
        if *self.failing.lock() {
            bail!("MockPayoutProvider: simulated payout failure");
        }

        let mut calls = self.calls.lock();
        calls.push(PayoutCall {
            recipient: recipient.to_string(),
            amount,
        });

        Ok(json!({
            "batch_header": {
                "payout_batch_id": format!("MOCK-{}", calls.len()),
                "batch_status": "PENDING",
            }
        }))
    }
}
