use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 매수 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = BuyRequest)]
pub struct BuyRequest {
    /// Commodity symbol
    /// 상품 심볼
    #[schema(example = "ALU")]
    pub symbol: String,

    /// Units to buy
    /// 매수 수량
    #[schema(example = 100)]
    pub units: u32,

    /// Payment amount collected by the house account (USD)
    /// 하우스 계정으로 결제되는 금액 (USD)
    #[schema(value_type = f64, example = 1.10)]
    pub amount: Decimal,
}

// 매도 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = SellRequest)]
pub struct SellRequest {
    /// Commodity symbol
    /// 상품 심볼
    #[schema(example = "ALU")]
    pub symbol: String,

    /// Units to sell
    /// 매도 수량
    #[schema(example = 40)]
    pub units: u32,
}

// 주문 응답 모델 (매수/매도 공용)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = OrderResponse)]
pub struct OrderResponse {
    /// Success message
    /// 성공 메시지
    #[schema(example = "Bought 100 ALU")]
    pub message: String,
}

// 출금 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = WithdrawRequest)]
pub struct WithdrawRequest {
    /// Amount to withdraw (USD), at most 500 per request
    /// 출금 금액 (USD), 요청당 최대 500
    #[schema(value_type = f64, example = 250.0)]
    pub amount: Decimal,
}

// 출금 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = WithdrawResponse)]
pub struct WithdrawResponse {
    pub success: bool,

    /// Raw receipt from the payout provider, passed through untouched
    /// 결제 제공자의 원시 영수증 (그대로 전달)
    #[schema(value_type = Object)]
    pub payout: serde_json::Value,
}
