use std::sync::Arc;

use crate::domains::auth::services::{AuthState, TokenService};
use crate::domains::trading::services::{TradingService, TradingState};
use crate::shared::clients::PayoutProvider;
use crate::shared::config::AppConfig;
use crate::shared::store::{MarketBook, TradeLedger, UserStore};

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 프로세스 시작 시 한 번 구성됩니다. 숨은 전역 상태가 없으므로 테스트는
/// 케이스마다 독립된 인스턴스를 만듭니다.
/// Built once at process start; there are no hidden statics, so tests
/// construct isolated instances per case. The payout provider is injected
/// so tests substitute a recording mock for the real client.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,

    /// 인메모리 저장소 (공유)
    /// In-memory stores (shared)
    pub users: Arc<UserStore>,
    pub market: Arc<MarketBook>,
    pub ledger: Arc<TradeLedger>,

    pub auth_state: AuthState,
    pub trading_state: TradingState,
}

impl AppState {
    /// Create AppState with configuration and a payout provider
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(config: AppConfig, payout: Arc<dyn PayoutProvider>) -> Self {
        let config = Arc::new(config);

        // 1. 저장소 생성 (기본 카탈로그 시드 포함)
        // 1. Stores, with the default catalog seeded into the market book
        let users = Arc::new(UserStore::new());
        let market = Arc::new(MarketBook::new());
        let ledger = Arc::new(TradeLedger::new());

        // 2. 공유 서비스 생성 (토큰 등)
        // 2. Shared services (tokens etc.)
        let token_service = TokenService::new(
            config.token_secret.clone(),
            config.legacy_token_compat,
        );

        // 3. 각 도메인 State 생성
        // 3. Domain states
        let auth_state = AuthState::new(users.clone(), token_service);
        let trading_service = Arc::new(TradingService::new(
            users.clone(),
            market.clone(),
            ledger.clone(),
            payout,
            config.payout.house_account.clone(),
            config.admin_identities.clone(),
        ));
        let trading_state = TradingState::new(trading_service);

        Self {
            config,
            users,
            market,
            ledger,
            auth_state,
            trading_state,
        }
    }
}
