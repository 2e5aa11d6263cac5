use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domains::auth::models::User;
use crate::shared::errors::ApiError;

/// 사용자당 상품별 최대 보유 수량
/// Per-user, per-symbol holdings cap, checked on every increase
pub const MAX_HOLDINGS_PER_SYMBOL: u32 = 1000;

/// 사용자 저장소
/// In-memory user store, keyed by email
///
/// 역할: 사용자 계정 상태(자격 증명, 출금 주소, 보유 수량)를 관리
/// Owns account state: credentials, payout address, per-commodity holdings
/// and the lifetime withdrawal counter. Process-lifetime only; nothing is
/// persisted. Each method is atomic under the store lock.
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// 회원 생성 (이메일 중복 시 실패)
    /// Create a user; duplicate email fails
    pub fn create(&self, email: &str, password: &str, payout_address: &str) -> Result<(), ApiError> {
        let mut users = self.users.write();

        if users.contains_key(email) {
            return Err(ApiError::UserAlreadyExists {
                email: email.to_string(),
            });
        }

        users.insert(email.to_string(), User::new(email, password, payout_address));
        Ok(())
    }

    /// 자격 증명 검증
    /// Verify credentials with an exact match
    ///
    /// 비밀번호는 평문으로 저장/비교됩니다 (이전 시스템 동작 유지).
    /// Passwords are stored and compared in plaintext, matching the system
    /// this one replaces. Known weakness: production deployments need real
    /// password hashing. A missing user and a wrong password return the
    /// same error so the response does not leak which emails exist.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let users = self.users.read();

        match users.get(email) {
            Some(user) if user.password == password => Ok(user.clone()),
            _ => Err(ApiError::InvalidCredentials),
        }
    }

    /// 이메일로 사용자 조회
    /// Look up a user by email
    pub fn lookup(&self, email: &str) -> Result<User, ApiError> {
        let users = self.users.read();

        users.get(email).cloned().ok_or_else(|| ApiError::UserNotFound {
            email: email.to_string(),
        })
    }

    /// 보유 수량 조정 (체크와 변경이 한 락 안에서 수행됨)
    /// Adjust holdings for one symbol; check and mutation happen under a
    /// single write lock
    ///
    /// 결과가 음수가 되면 실패, 증가 시 1000개 한도를 초과하면 실패.
    /// Fails if the result would go negative, or (on increase only) past
    /// the `MAX_HOLDINGS_PER_SYMBOL` cap. Returns the new unit count.
    pub fn adjust_holding(&self, email: &str, symbol: &str, delta: i64) -> Result<u32, ApiError> {
        let mut users = self.users.write();

        let user = users.get_mut(email).ok_or_else(|| ApiError::UserNotFound {
            email: email.to_string(),
        })?;

        let held = user.holdings.get(symbol).copied().unwrap_or(0);
        let next = i64::from(held) + delta;

        if next < 0 {
            return Err(ApiError::InsufficientHoldings {
                symbol: symbol.to_string(),
                held,
                requested: (-delta) as u32,
            });
        }
        if delta > 0 && next > i64::from(MAX_HOLDINGS_PER_SYMBOL) {
            return Err(ApiError::HoldingsCapExceeded {
                symbol: symbol.to_string(),
                cap: MAX_HOLDINGS_PER_SYMBOL,
            });
        }

        let next = next as u32;
        user.holdings.insert(symbol.to_string(), next);
        Ok(next)
    }

    /// 현재 보유 수량 조회
    /// Current holdings for one symbol (0 if never traded)
    pub fn holding(&self, email: &str, symbol: &str) -> u32 {
        let users = self.users.read();

        users
            .get(email)
            .and_then(|user| user.holdings.get(symbol).copied())
            .unwrap_or(0)
    }

    /// 누적 출금 횟수 증가
    /// Bump the lifetime withdrawal counter; returns the new count
    pub fn record_withdrawal(&self, email: &str) -> Result<u64, ApiError> {
        let mut users = self.users.write();

        let user = users.get_mut(email).ok_or_else(|| ApiError::UserNotFound {
            email: email.to_string(),
        })?;

        user.withdrawals += 1;
        Ok(user.withdrawals)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
