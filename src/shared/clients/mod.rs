// External service clients
// 외부 서비스 클라이언트

pub mod mock;
pub mod paypal;

pub use mock::MockPayoutProvider;
pub use paypal::{PayPalClient, PayoutProvider};
