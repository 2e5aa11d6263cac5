// In-memory state layer
// 인메모리 상태 계층: 프로세스 수명 동안만 유지되는 저장소들
//
// Constructed once at process start and injected through AppState; there
// are no hidden statics, so tests build isolated instances per case.

pub mod market_book;
pub mod trade_ledger;
pub mod user_store;

pub use market_book::{default_catalog, MarketBook};
pub use trade_ledger::TradeLedger;
pub use user_store::{UserStore, MAX_HOLDINGS_PER_SYMBOL};
