use std::collections::BTreeMap;

use parking_lot::RwLock;
use rust_decimal::Decimal;

use crate::domains::trading::models::{Commodity, TradeSide};
use crate::shared::errors::ApiError;

/// 체결 1단위당 가격 변동폭
/// Price adjustment per traded unit, applied immediately after a trade
fn impact_rate() -> Decimal {
    Decimal::new(1, 9) // 0.000000001
}

/// 기본 상품 카탈로그
/// Default commodity catalog, seeded at process start
pub fn default_catalog() -> Vec<(String, Commodity)> {
    vec![
        ("ALU".to_string(), Commodity::new(Decimal::new(11, 9), Decimal::new(1_000_000_000, 0))),
        ("OIL".to_string(), Commodity::new(Decimal::new(100, 9), Decimal::new(500_000_000, 0))),
        ("GAS".to_string(), Commodity::new(Decimal::new(7, 9), Decimal::new(200_000_000, 0))),
        ("COP".to_string(), Commodity::new(Decimal::new(8, 9), Decimal::new(200_000_000, 0))),
    ]
}

/// 상품 시세 저장소
/// In-memory price book: symbol -> current price and remaining supply
///
/// 역할: 시세 스냅샷 제공과 체결에 따른 가격 변동 적용
/// Serves catalog snapshots and applies per-trade price impact. Supply is
/// informational only and never decremented by trades.
pub struct MarketBook {
    commodities: RwLock<BTreeMap<String, Commodity>>,
}

impl MarketBook {
    /// 기본 카탈로그로 생성
    /// Create a book seeded with the default catalog
    pub fn new() -> Self {
        Self::with_catalog(default_catalog())
    }

    /// 지정한 카탈로그로 생성 (테스트용)
    /// Create a book with an explicit catalog (used by tests)
    pub fn with_catalog(catalog: impl IntoIterator<Item = (String, Commodity)>) -> Self {
        Self {
            commodities: RwLock::new(catalog.into_iter().collect()),
        }
    }

    /// 단일 상품 조회
    /// Fetch one commodity
    pub fn get(&self, symbol: &str) -> Result<Commodity, ApiError> {
        let commodities = self.commodities.read();

        commodities
            .get(symbol)
            .cloned()
            .ok_or_else(|| ApiError::UnknownCommodity {
                symbol: symbol.to_string(),
            })
    }

    /// 전체 카탈로그 스냅샷
    /// Full catalog snapshot, ordered by symbol
    pub fn list_all(&self) -> BTreeMap<String, Commodity> {
        self.commodities.read().clone()
    }

    /// 체결에 따른 가격 변동 적용
    /// Apply price impact for one trade and return the pre-impact price
    ///
    /// 스냅샷과 변경이 한 락 안에서 수행되므로 반환된 가격은 정확히 이
    /// 체결 직전의 가격입니다.
    /// Snapshot and mutation happen under one write lock, so the returned
    /// price is exactly the price this trade executed at. Buys move the
    /// price up by `units * impact_rate()`, sells move it down. No floor:
    /// sustained selling can push the price to zero or below.
    pub fn apply_impact(&self, symbol: &str, units: u32, side: TradeSide) -> Result<Decimal, ApiError> {
        let mut commodities = self.commodities.write();

        let commodity = commodities
            .get_mut(symbol)
            .ok_or_else(|| ApiError::UnknownCommodity {
                symbol: symbol.to_string(),
            })?;

        let before = commodity.price;
        let impact = Decimal::from(units) * impact_rate();

        commodity.price = match side {
            TradeSide::Buy => before + impact,
            TradeSide::Sell => before - impact,
        };

        Ok(before)
    }
}

impl Default for MarketBook {
    fn default() -> Self {
        Self::new()
    }
}
