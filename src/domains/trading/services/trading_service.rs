use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domains::trading::models::{Commodity, Trade, TradeSide};
use crate::domains::trading::services::locks::OperationLocks;
use crate::shared::clients::PayoutProvider;
use crate::shared::errors::ApiError;
use crate::shared::store::{MarketBook, TradeLedger, UserStore};

/// 요청당 최대 출금 금액 (USD)
/// Per-request withdrawal cap (USD)
pub const MAX_WITHDRAW: u32 = 500;

/// 트레이딩 엔진
/// Trading engine: orchestrates buy, sell and withdraw
///
/// 요청 상태 전이: Unauthenticated -> Authenticated -> {Authorized, Rejected}.
/// 인증은 전송 계층(토큰 추출기)에서 끝나고, 이 엔진은 인가와 상태 변경을
/// 담당합니다.
/// The transport layer authenticates (token extractor); this engine
/// authorizes and mutates state. Each buy/sell/withdraw runs inside the
/// per-(user, symbol) critical section from `OperationLocks`. The lock is
/// held across the payout call: the call has a bounded timeout, so the
/// hold time is bounded too, and the reservation below keeps state
/// consistent when the call fails.
pub struct TradingService {
    users: Arc<UserStore>,
    market: Arc<MarketBook>,
    ledger: Arc<TradeLedger>,
    payout: Arc<dyn PayoutProvider>,
    locks: OperationLocks,
    house_account: String,
    admin_identities: HashSet<String>,
}

impl TradingService {
    pub fn new(
        users: Arc<UserStore>,
        market: Arc<MarketBook>,
        ledger: Arc<TradeLedger>,
        payout: Arc<dyn PayoutProvider>,
        house_account: String,
        admin_identities: HashSet<String>,
    ) -> Self {
        Self {
            users,
            market,
            ledger,
            payout,
            locks: OperationLocks::new(),
            house_account,
            admin_identities,
        }
    }

    /// 전체 상품 시세 스냅샷
    /// Full catalog snapshot for the listing endpoint
    pub fn list_commodities(&self) -> BTreeMap<String, Commodity> {
        self.market.list_all()
    }

    /// 매수 주문 실행
    /// Execute a buy order
    ///
    /// 흐름: 수량 선점 -> 하우스 계정으로 결제 -> 확정(가격 스냅샷 + 변동
    /// 적용 + 원장 기록). 결제가 실패하면 선점을 되돌리고 주문 전체를
    /// 중단합니다.
    /// Flow: reserve units -> collect payment into the house account ->
    /// commit (price snapshot + impact + ledger append). A payout failure,
    /// including timeout, rolls the reservation back and aborts the order.
    pub async fn buy(
        &self,
        email: &str,
        symbol: &str,
        units: u32,
        amount: Decimal,
    ) -> Result<Trade, ApiError> {
        let lock = self.locks.for_pair(email, symbol);
        let _guard = lock.lock().await;

        // 심볼 검증은 어떤 상태 변경보다 먼저
        // Validate the symbol before anything is reserved
        self.market.get(symbol)?;

        // 수량 선점: 한도 검사는 저장소 락 안에서 수행됨
        // Reservation; the 1000-unit cap check runs inside the store lock
        self.users.adjust_holding(email, symbol, i64::from(units))?;

        if let Err(e) = self.payout.send_payout(&self.house_account, amount).await {
            // 선점 롤백 후 주문 중단
            // Roll the reservation back and abort the order
            self.users
                .adjust_holding(email, symbol, -i64::from(units))
                .map_err(|rollback| {
                    ApiError::Internal(format!("Failed to roll back reservation: {rollback}"))
                })?;
            warn!(user = email, symbol, units, error = %e, "buy aborted: payout failed");
            return Err(ApiError::ExternalService(e.to_string()));
        }

        let price = self.market.apply_impact(symbol, units, TradeSide::Buy)?;
        let trade = Trade {
            user: email.to_string(),
            side: TradeSide::Buy,
            symbol: symbol.to_string(),
            units,
            price,
            executed_at: Utc::now(),
        };
        self.ledger.append(trade.clone());

        info!(user = email, symbol, units, %price, "buy executed");
        Ok(trade)
    }

    /// 매도 주문 실행
    /// Execute a sell order
    ///
    /// 매도는 외부 결제를 호출하지 않습니다 (매수와 비대칭).
    /// Sells invoke no external payout; the asymmetry with buy is
    /// intentional and matches the system this one replaces.
    pub async fn sell(&self, email: &str, symbol: &str, units: u32) -> Result<Trade, ApiError> {
        let lock = self.locks.for_pair(email, symbol);
        let _guard = lock.lock().await;

        self.market.get(symbol)?;

        // 보유 수량 차감 (부족하면 상태 변경 없이 실패)
        // Debit holdings; insufficient units fail with no mutation
        self.users.adjust_holding(email, symbol, -i64::from(units))?;

        let price = self.market.apply_impact(symbol, units, TradeSide::Sell)?;
        let trade = Trade {
            user: email.to_string(),
            side: TradeSide::Sell,
            symbol: symbol.to_string(),
            units,
            price,
            executed_at: Utc::now(),
        };
        self.ledger.append(trade.clone());

        info!(user = email, symbol, units, %price, "sell executed");
        Ok(trade)
    }

    /// 출금 실행
    /// Execute a withdrawal
    ///
    /// 한도 초과 요청은 결제 제공자를 호출하기 전에 거부됩니다. 성공 시
    /// 누적 출금 횟수만 증가하며 어떤 잔고도 차감되지 않습니다 (이전
    /// 시스템의 동작 그대로, 알려진 동작 공백으로 문서화됨).
    /// Over-cap requests are rejected before the provider is ever called.
    /// On success only the lifetime counter moves; no balance is debited.
    /// That gap is inherited from the predecessor and documented rather
    /// than fixed.
    pub async fn withdraw(&self, email: &str, amount: Decimal) -> Result<serde_json::Value, ApiError> {
        let lock = self.locks.for_pair(email, "");
        let _guard = lock.lock().await;

        if amount > Decimal::from(MAX_WITHDRAW) {
            return Err(ApiError::WithdrawLimitExceeded {
                max: Decimal::from(MAX_WITHDRAW),
            });
        }

        let user = self.users.lookup(email)?;

        let receipt = self
            .payout
            .send_payout(&user.payout_address, amount)
            .await
            .map_err(|e| {
                warn!(user = email, %amount, error = %e, "withdrawal failed");
                ApiError::ExternalService(e.to_string())
            })?;

        self.users.record_withdrawal(email)?;

        info!(user = email, %amount, "withdrawal paid out");
        Ok(receipt)
    }

    /// 전체 거래 내역 조회 (권한 계정 전용)
    /// Full ledger for privileged identities
    ///
    /// 허용 목록에 없는 인증된 사용자는 에러가 아니라 빈 목록을 받습니다.
    /// Authenticated callers outside the allow-list get an empty sequence,
    /// not an error.
    pub fn admin_list_trades(&self, email: &str) -> Vec<Trade> {
        if self.admin_identities.contains(email) {
            self.ledger.query_all()
        } else {
            Vec::new()
        }
    }
}
