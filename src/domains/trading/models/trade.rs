use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 주문 방향
/// Trade side: "buy" or "sell"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// 문자열로 변환
    /// Convert to string
    pub fn as_str(&self) -> &str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

/// 체결 기록
/// One executed trade
///
/// 생성 이후 불변이며 원장에 추가된 순서가 곧 체결 순서입니다.
/// Immutable once created; ledger insertion order is execution order.
/// `price` is the commodity price at execution, snapshotted BEFORE this
/// trade's own impact was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Trade {
    /// 주문한 사용자 이메일
    /// Email of the user who placed the order
    pub user: String,

    /// 매수 또는 매도
    /// Buy or sell
    pub side: TradeSide,

    /// 상품 심볼
    /// Commodity symbol
    pub symbol: String,

    /// 체결 수량
    /// Units traded
    pub units: u32,

    /// 체결 시점 단가 (이 체결의 가격 변동 반영 전)
    /// Unit price at execution, pre-impact
    #[schema(value_type = f64, example = 0.000000011)]
    pub price: Decimal,

    /// 체결 시각 (UTC)
    /// Execution timestamp (UTC)
    pub executed_at: DateTime<Utc>,
}
