// src/domains/auth/services/token_service.rs
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domains::auth::models::Claims;
use crate::shared::errors::ApiError;

type HmacSha256 = Hmac<Sha256>;

/// 토큰 유효 기간 (시간)
/// Token lifetime in hours
const TOKEN_TTL_HOURS: i64 = 24;

/// 토큰 서비스
/// Token service for issuing and verifying bearer tokens
///
/// 토큰은 `header.payload.signature` 형태이며 상태를 갖지 않습니다.
/// Tokens are stateless `header.payload.signature` strings; there is no
/// server-side session table and no revocation. Two signature variants
/// share the same wire shape:
///
/// - default: base64(HMAC-SHA256(secret, header_b64 || payload_b64)),
///   a real keyed MAC;
/// - legacy (`legacy_compat`): base64(header_b64 || payload_b64 || secret),
///   the predecessor's concatenation hash. It is NOT a MAC: anyone holding
///   a token can recover the secret by base64-decoding the signature. Kept
///   only for wire compatibility and covered by a test; run the HMAC
///   variant anywhere that matters.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    legacy_compat: bool,
}

impl TokenService {
    pub fn new(secret: String, legacy_compat: bool) -> Self {
        Self {
            secret,
            legacy_compat,
        }
    }

    /// 토큰 발급 (24시간 만료)
    /// Issue a token for `email`, expiring 24 hours from now
    pub fn issue(&self, email: &str) -> Result<String, ApiError> {
        self.issue_at(email, Utc::now())
    }

    /// 지정한 발급 시각으로 토큰 발급
    /// Issue a token anchored to an explicit issuance instant
    pub fn issue_at(&self, email: &str, issued: DateTime<Utc>) -> Result<String, ApiError> {
        let header = BASE64.encode(r#"{"alg":"HS256","typ":"JWT"}"#);

        let claims = Claims::issued_at(email.to_string(), issued, TOKEN_TTL_HOURS);
        let payload_json = serde_json::to_string(&claims)
            .map_err(|e| ApiError::Internal(format!("Failed to encode token claims: {e}")))?;
        let payload = BASE64.encode(payload_json);

        let signature = self.sign(&header, &payload)?;
        Ok(format!("{header}.{payload}.{signature}"))
    }

    /// 토큰 검증 (현재 시각 기준)
    /// Verify a token against the current clock
    pub fn verify(&self, token: &str) -> Result<String, ApiError> {
        self.verify_at(token, Utc::now())
    }

    /// 지정한 시각 기준으로 토큰 검증
    /// Verify a token as of `now`; returns the embedded identity
    ///
    /// 서명 불일치, 파싱 불가, 만료 모두 같은 에러로 처리됩니다.
    /// Signature mismatch, an unparseable payload and expiry all collapse
    /// into the same `InvalidToken` error.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, ApiError> {
        let mut parts = token.splitn(3, '.');
        let (header, payload, signature) = match (parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(p), Some(s)) => (h, p, s),
            _ => return Err(ApiError::InvalidToken),
        };

        let expected = self.sign(header, payload)?;
        if signature != expected {
            return Err(ApiError::InvalidToken);
        }

        let payload_bytes = BASE64.decode(payload).map_err(|_| ApiError::InvalidToken)?;
        let claims: Claims =
            serde_json::from_slice(&payload_bytes).map_err(|_| ApiError::InvalidToken)?;

        if claims.is_expired_at(now) {
            return Err(ApiError::InvalidToken);
        }

        Ok(claims.email)
    }

    /// 서명 생성 (활성화된 방식에 따라)
    /// Compute the signature segment for the active variant
    fn sign(&self, header: &str, payload: &str) -> Result<String, ApiError> {
        if self.legacy_compat {
            // Predecessor wire format: base64 over the two encoded parts
            // and the raw secret, concatenated without separators.
            return Ok(BASE64.encode(format!("{header}{payload}{}", self.secret)));
        }

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| ApiError::Internal(format!("Failed to initialize token MAC: {e}")))?;
        mac.update(header.as_bytes());
        mac.update(payload.as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}
