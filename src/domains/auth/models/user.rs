use std::collections::HashMap;

/// 사용자 계정 상태
/// User account state
///
/// 가입 시 생성되며, 매수/매도가 보유 수량을, 출금이 누적 출금 횟수를
/// 변경합니다. 계정 삭제는 지원하지 않습니다.
/// Created on signup; buy/sell mutate `holdings`, withdraw bumps
/// `withdrawals`. Accounts are never deleted. The password is stored in
/// plaintext, matching the predecessor system (documented weakness).
#[derive(Debug, Clone)]
pub struct User {
    pub email: String,
    pub password: String,

    /// 출금 대상 주소 (결제 제공자 계정)
    /// Payout destination registered at signup
    pub payout_address: String,

    /// 상품별 보유 수량 (symbol -> units, 항상 0..=1000)
    /// Per-commodity holdings, always within 0..=1000 per symbol
    pub holdings: HashMap<String, u32>,

    /// 누적 출금 횟수
    /// Lifetime withdrawal counter
    pub withdrawals: u64,
}

impl User {
    pub fn new(email: &str, password: &str, payout_address: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            payout_address: payout_address.to_string(),
            holdings: HashMap::new(),
            withdrawals: 0,
        }
    }
}
