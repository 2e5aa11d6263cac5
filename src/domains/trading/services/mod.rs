pub mod locks;
pub mod state;
pub mod trading_service;

pub use locks::OperationLocks;
pub use state::TradingState;
pub use trading_service::{TradingService, MAX_WITHDRAW};
