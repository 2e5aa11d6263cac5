use parking_lot::RwLock;

use crate::domains::trading::models::Trade;

/// 거래 원장
/// Append-only trade ledger
///
/// 기록은 불변이며 순서는 추가된 순서 그대로 유지됩니다.
/// Entries are immutable and strictly ordered by append time; the append
/// lock makes the order observed by `query_all` a single global sequence.
/// Validation is the engine's responsibility, not the ledger's.
pub struct TradeLedger {
    trades: RwLock<Vec<Trade>>,
}

impl TradeLedger {
    pub fn new() -> Self {
        Self {
            trades: RwLock::new(Vec::new()),
        }
    }

    /// 체결 기록 추가 (항상 성공)
    /// Append one executed trade; always succeeds
    pub fn append(&self, trade: Trade) {
        self.trades.write().push(trade);
    }

    /// 전체 체결 내역 (추가된 순서)
    /// Full ordered sequence of trades
    pub fn query_all(&self) -> Vec<Trade> {
        self.trades.read().clone()
    }

    pub fn len(&self) -> usize {
        self.trades.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.read().is_empty()
    }
}

impl Default for TradeLedger {
    fn default() -> Self {
        Self::new()
    }
}
