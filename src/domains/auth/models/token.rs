use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// 토큰 클레임
/// Token claims carried in the payload segment
///
/// `exp`는 밀리초 단위 Unix 시각입니다 (이전 시스템과 동일한 표현).
/// `exp` is milliseconds since the Unix epoch, the same representation the
/// predecessor system put on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 인증된 사용자 이메일
    /// Authenticated user email
    pub email: String,

    /// 만료 시각 (ms since epoch)
    /// Expiry instant (ms since epoch)
    pub exp: i64,
}

impl Claims {
    /// 지금부터 `ttl_hours` 시간 동안 유효한 클레임 생성
    /// Claims valid for `ttl_hours` from now
    pub fn new(email: String, ttl_hours: i64) -> Self {
        Self::issued_at(email, Utc::now(), ttl_hours)
    }

    /// 지정한 발급 시각 기준으로 클레임 생성
    /// Claims anchored to an explicit issuance instant
    pub fn issued_at(email: String, issued: DateTime<Utc>, ttl_hours: i64) -> Self {
        Self {
            email,
            exp: (issued + Duration::hours(ttl_hours)).timestamp_millis(),
        }
    }

    /// 주어진 시각 기준 만료 여부
    /// Whether the claims are expired as of `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() > self.exp
    }
}
