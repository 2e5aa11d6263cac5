use std::collections::HashSet;
use std::env;

/// 결제 제공자 설정
/// Payout provider settings (PayPal-shaped API)
#[derive(Debug, Clone)]
pub struct PayoutConfig {
    /// Provider API base URL
    pub api_url: String,

    /// OAuth client credentials
    pub client_id: String,
    pub client_secret: String,

    /// 매수 대금이 입금되는 하우스 계정
    /// House account that collects purchase payments
    pub house_account: String,
}

/// 애플리케이션 설정
/// Application configuration, read from the environment at startup
///
/// 모든 비밀값과 권한 목록은 환경 변수로 외부화됩니다.
/// Secrets and the privileged-identity list are externalized; nothing is
/// hardcoded in the engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address for the HTTP server
    pub bind_addr: String,

    /// 토큰 서명 비밀키
    /// Shared secret for token signing
    pub token_secret: String,

    /// 구버전 토큰 서명 방식 사용 여부
    /// Use the legacy concatenation-hash token signature instead of the
    /// HMAC variant. Wire-compatible with the predecessor system; weaker.
    pub legacy_token_compat: bool,

    /// 전체 거래 내역 조회가 허용된 계정 목록
    /// Identities allowed to read the full trade ledger
    pub admin_identities: HashSet<String>,

    pub payout: PayoutConfig,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드 (개발용 기본값 포함)
    /// Load configuration from environment variables with dev defaults
    pub fn from_env() -> Self {
        let admin_identities = env::var("ADMIN_IDENTITIES")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3002".to_string()),
            token_secret: env::var("TOKEN_SECRET")
                .unwrap_or_else(|_| "change-me-in-production".to_string()),
            legacy_token_compat: env::var("LEGACY_TOKEN_COMPAT")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            admin_identities,
            payout: PayoutConfig {
                api_url: env::var("PAYPAL_API_URL")
                    .unwrap_or_else(|_| "https://api-m.paypal.com".to_string()),
                client_id: env::var("PAYPAL_CLIENT_ID").unwrap_or_default(),
                client_secret: env::var("PAYPAL_CLIENT_SECRET").unwrap_or_default(),
                house_account: env::var("PAYPAL_ACCOUNT").unwrap_or_default(),
            },
        }
    }
}
