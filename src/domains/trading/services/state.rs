// Trading domain state
// 트레이딩 도메인 상태
use std::sync::Arc;

use crate::domains::trading::services::TradingService;

/// Trading domain state
/// 트레이딩 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct TradingState {
    pub trading_service: Arc<TradingService>,
}

impl TradingState {
    pub fn new(trading_service: Arc<TradingService>) -> Self {
        Self { trading_service }
    }
}
