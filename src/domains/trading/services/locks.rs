use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// (사용자, 심볼) 쌍별 비동기 락 레지스트리
/// Registry of per-(user, symbol) async locks
///
/// 같은 쌍에 대한 매수/매도/출금은 하나의 뮤텍스를 거치므로 보유 수량
/// 검사와 변경 사이에 다른 요청이 끼어들 수 없습니다.
/// Buy/sell/withdraw on the same pair serialize through one mutex, so the
/// holdings check and the mutation of one order cannot interleave with
/// another request. Entries are never evicted; the map is bounded by
/// users x symbols.
#[derive(Default)]
pub struct OperationLocks {
    locks: Mutex<HashMap<(String, String), Arc<tokio::sync::Mutex<()>>>>,
}

impl OperationLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// (사용자, 심볼) 쌍의 락 핸들
    /// Lock handle for a (user, symbol) pair
    ///
    /// 출금은 특정 상품과 무관하므로 빈 심볼로 사용자 단위 직렬화만
    /// 수행합니다.
    /// Withdrawals pass the empty symbol: they serialize per user,
    /// independent of any commodity.
    pub fn for_pair(&self, user: &str, symbol: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock();
        locks
            .entry((user.to_string(), symbol.to_string()))
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }
}
