pub mod commodity;
pub mod order;
pub mod trade;

pub use commodity::Commodity;
pub use order::*;
pub use trade::{Trade, TradeSide};
