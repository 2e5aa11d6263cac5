use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::shared::config::PayoutConfig;

/// 결제 제공자 요청 타임아웃
/// Request timeout; a hung provider becomes a payout failure
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// 외부 결제 제공자 계약
/// Contract the trading engine consumes for moving funds out
///
/// 엔진은 재시도하지 않습니다. 재시도 정책은 구현체의 몫입니다.
/// The engine performs no retries; retry policy, if any, belongs to the
/// implementation behind this trait.
#[async_trait]
pub trait PayoutProvider: Send + Sync {
    /// `recipient`에게 `amount` USD 송금. 제공자의 원시 영수증을 반환.
    /// Send `amount` USD to `recipient`; returns the provider's raw receipt.
    async fn send_payout(&self, recipient: &str, amount: Decimal) -> Result<serde_json::Value>;
}

// PayPal API 클라이언트
// PayPal client for external payout calls
pub struct PayPalClient {
    http_client: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl PayPalClient {
    // 클라이언트 생성
    // Create new PayPal client instance
    pub fn new(config: &PayoutConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: config.api_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
    }

    // OAuth 액세스 토큰 발급 (client credentials)
    // Fetch an OAuth access token via client credentials
    async fn fetch_access_token(&self) -> Result<String> {
        let url = format!("{}/v1/oauth2/token", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .context("Failed to send request to payout OAuth endpoint")?;

        // HTTP 상태 코드 확인
        // Check HTTP status code
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Payout OAuth endpoint returned error: {} - {}", status, body);
        }

        let token: OAuthTokenResponse = response
            .json()
            .await
            .context("Failed to parse OAuth token response")?;

        Ok(token.access_token)
    }
}

#[async_trait]
impl PayoutProvider for PayPalClient {
    async fn send_payout(&self, recipient: &str, amount: Decimal) -> Result<serde_json::Value> {
        // 매 호출마다 새 액세스 토큰 발급 (토큰 캐싱 없음)
        // A fresh access token per payout; nothing is cached across calls.
        let access_token = self.fetch_access_token().await?;

        let url = format!("{}/v1/payments/payouts", self.base_url);

        // 요청 본문 생성 (단일 항목 배치)
        // Build request body (a single-item payout batch)
        let request_body = serde_json::json!({
            "sender_batch_header": {
                "sender_batch_id": Uuid::new_v4().to_string(),
                "email_subject": "Payout",
            },
            "items": [
                {
                    "recipient_type": "EMAIL",
                    "amount": { "value": amount, "currency": "USD" },
                    "receiver": recipient,
                    "note": "Payment",
                    "sender_item_id": Uuid::new_v4().to_string(),
                }
            ],
        });

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .bearer_auth(access_token)
            .json(&request_body)
            .send()
            .await
            .context("Failed to send request to payouts endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Payouts endpoint returned error: {} - {}", status, body);
        }

        // 원시 영수증 그대로 반환 (호출자가 그대로 전달)
        // Raw receipt passed through untouched to the caller
        let receipt: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse payout receipt")?;

        Ok(receipt)
    }
}

// OAuth 토큰 응답 모델 (내부용)
// Raw OAuth token response model (internal use)
#[derive(Debug, Deserialize)]
struct OAuthTokenResponse {
    access_token: String,
}
