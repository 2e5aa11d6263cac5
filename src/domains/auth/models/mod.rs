pub mod auth;
pub mod token;
pub mod user;

pub use auth::*;
pub use token::Claims;
pub use user::User;
