pub mod market_handler;
pub mod order_handler;
pub mod trade_handler;
pub mod withdraw_handler;

pub use market_handler::*;
pub use order_handler::*;
pub use trade_handler::*;
pub use withdraw_handler::*;
