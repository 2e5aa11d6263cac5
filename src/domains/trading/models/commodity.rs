use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 상품 시세 정보
/// One commodity in the price book
///
/// 가격은 체결마다 변동되지만 공급량은 참고용 값으로 체결 시 차감되지
/// 않습니다.
/// Price moves with every trade; supply is informational and is not
/// decremented when units change hands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Commodity {
    /// 현재 단가
    /// Current unit price
    #[schema(value_type = f64, example = 0.000000011)]
    pub price: Decimal,

    /// 남은 공급량 (참고용)
    /// Remaining supply (informational)
    #[schema(value_type = f64, example = 1000000000.0)]
    pub supply: Decimal,
}

impl Commodity {
    pub fn new(price: Decimal, supply: Decimal) -> Self {
        Self { price, supply }
    }
}
