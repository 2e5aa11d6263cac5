use axum::{http::StatusCode, Json};
use rust_decimal::Decimal;
use serde_json::json;
use thiserror::Error;

/// API 에러
/// API errors returned by the engine and the auth layer
///
/// 모든 엔진 레벨 실패는 이 열거형의 값으로 반환됩니다.
/// Every engine-level failure is returned as a value of this enum;
/// nothing panics past the engine boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 이메일이 이미 존재함
    /// Email already registered
    #[error("User already exists: {email}")]
    UserAlreadyExists { email: String },

    /// 잘못된 이메일 또는 비밀번호
    /// Invalid email or password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// 사용자를 찾을 수 없음
    /// User not found
    #[error("User not found: {email}")]
    UserNotFound { email: String },

    /// 토큰이 제공되지 않음
    /// Token not provided
    #[error("Token not provided")]
    MissingToken,

    /// 잘못된 또는 만료된 토큰
    /// Invalid or expired token
    #[error("Invalid or expired token")]
    InvalidToken,

    /// 알 수 없는 상품
    /// Commodity symbol not in the catalog
    #[error("Unknown commodity: {symbol}")]
    UnknownCommodity { symbol: String },

    /// 보유 한도 초과
    /// Per-user holdings cap exceeded
    #[error("Holdings cap exceeded: at most {cap} units of {symbol} per user")]
    HoldingsCapExceeded { symbol: String, cap: u32 },

    /// 보유 수량 부족
    /// Not enough units held to sell
    #[error("Insufficient holdings: {held} {symbol} held, {requested} requested")]
    InsufficientHoldings {
        symbol: String,
        held: u32,
        requested: u32,
    },

    /// 출금 한도 초과
    /// Withdrawal amount over the per-request cap
    #[error("Withdrawal limit exceeded: at most {max} per request")]
    WithdrawLimitExceeded { max: Decimal },

    /// 결제 제공자 에러
    /// Payout provider failure (OAuth, payout call, or timeout)
    #[error("Payment provider error: {0}")]
    ExternalService(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// ApiError를 HTTP 응답으로 변환
/// Convert ApiError into an HTTP response pair
impl From<ApiError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: ApiError) -> Self {
        let status = match &err {
            ApiError::UserAlreadyExists { .. } => StatusCode::CONFLICT,
            ApiError::InvalidCredentials
            | ApiError::MissingToken
            | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::UnknownCommodity { .. } => StatusCode::BAD_REQUEST,
            ApiError::HoldingsCapExceeded { .. }
            | ApiError::InsufficientHoldings { .. }
            | ApiError::WithdrawLimitExceeded { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}
