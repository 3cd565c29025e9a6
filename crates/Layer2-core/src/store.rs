//! StrictStore - 키 검증을 거치는 이벤트 스토어
//!
//! `ListenerStore`(리스너 저장), `KeyValidator`(허용 키), `RejectionPolicy`(실패 처리)를
//! 조합한 공개 인터페이스입니다.
//!
//! ## 사용법
//!
//! ```ignore
//! use strictstore_core::{Listener, PartialRule, RuleOverrides, StrictStore};
//!
//! let store = StrictStore::new(["user:login", "user:logout"]);
//!
//! store.on("user:login", Listener::from_fn(|p: &Payload| {
//!     println!("{:?}", p);
//!     Ok(())
//! }))?;
//!
//! store.notify("user:login", payload).await?;
//!
//! // 미허용 키는 기본적으로 UnknownEventError
//! assert!(store.notify("account:login", payload).await.is_err());
//!
//! // 경고 로그만 남기고 무시
//! let lenient = StrictStore::<Payload>::with_rules(
//!     ["user:login"],
//!     RuleOverrides::new().both(PartialRule::new().throws(false).logger(true)),
//! );
//! ```

use crate::listener::Listener;
use crate::policy::{RejectionPolicy, RuleOverrides, RulePolicy, RuleSet, SilentPolicy};
use crate::registry::ListenerStore;
use crate::validator::{AllowedKeys, KeyValidator};
use strictstore_foundation::{Method, Result, StoreConfig};
use tracing::{debug, trace};

/// 허용 키 검증 후 리스너 저장소로 위임하는 이벤트 스토어
pub struct StrictStore<P: Send + Sync + 'static, Pol = RulePolicy> {
    registry: ListenerStore<P>,
    validator: KeyValidator,
    policy: Pol,
}

/// 미허용 키를 조용히 무시하는 최소 스토어
pub type KeyValidatingStore<P> = StrictStore<P, SilentPolicy>;

// ============================================================================
// Constructors
// ============================================================================

impl<P: Send + Sync + 'static> StrictStore<P, RulePolicy> {
    /// 기본 규칙으로 생성 (미허용 키 → 에러)
    pub fn new(keys: impl Into<AllowedKeys>) -> Self {
        Self::with_rule_set(keys, RuleSet::default())
    }

    /// 기본 규칙에 덮어쓰기를 병합하여 생성
    pub fn with_rules(keys: impl Into<AllowedKeys>, overrides: RuleOverrides) -> Self {
        Self::with_rule_set(keys, RuleSet::merged(overrides))
    }

    /// 완성된 규칙 집합으로 생성
    pub fn with_rule_set(keys: impl Into<AllowedKeys>, rules: RuleSet) -> Self {
        Self::with_policy(keys, RulePolicy::new(rules))
    }

    /// 설정에서 생성 (허용 키, prefix, bool 규칙)
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        config.validate()?;

        let rules = RuleSet::merged(RuleOverrides::from(&config.rules));
        let policy = RulePolicy::new(rules).with_prefix(config.message_prefix.clone());

        debug!(
            keys = config.keys.len(),
            prefix = %config.message_prefix,
            "Creating strict store from config"
        );

        Ok(Self::with_policy(config.keys.clone(), policy))
    }

    /// 적용 중인 규칙
    pub fn rules(&self) -> &RuleSet {
        self.policy.rules()
    }
}

impl<P: Send + Sync + 'static> StrictStore<P, SilentPolicy> {
    /// 미허용 키를 무시하는 스토어 생성
    pub fn silent(keys: impl Into<AllowedKeys>) -> Self {
        Self::with_policy(keys, SilentPolicy)
    }
}

// ============================================================================
// Operations
// ============================================================================

impl<P, Pol> StrictStore<P, Pol>
where
    P: Send + Sync + 'static,
    Pol: RejectionPolicy,
{
    /// 임의의 정책으로 생성
    pub fn with_policy(keys: impl Into<AllowedKeys>, policy: Pol) -> Self {
        Self {
            registry: ListenerStore::new(),
            validator: KeyValidator::new(keys),
            policy,
        }
    }

    /// 리스너 등록
    ///
    /// 미허용 키이면 등록하지 않고 정책 결과를 반환합니다 (`Ok(false)` 또는 에러).
    pub fn on(&self, event: impl AsRef<str>, listener: Listener<P>) -> Result<bool> {
        let event = event.as_ref();
        if !self.check_event(event, Method::On)? {
            return Ok(false);
        }

        self.registry.on(event, listener);
        Ok(true)
    }

    /// 이벤트 발행
    ///
    /// 미허용 키이면 리스너를 호출하지 않습니다. 검증 에러와 리스너 에러는
    /// 모두 반환된 future를 통해 전달됩니다.
    pub async fn notify(&self, event: impl AsRef<str>, payload: P) -> Result<bool> {
        let event = event.as_ref();
        if !self.check_event(event, Method::Notify)? {
            return Ok(false);
        }

        self.registry.notify(event, &payload).await?;
        Ok(true)
    }

    /// 리스너 해제 (첫 번째 일치 항목만, 검증 없음)
    pub fn off(&self, event: impl AsRef<str>, listener: &Listener<P>) -> bool {
        self.registry.off(event.as_ref(), listener)
    }

    /// 특정 이벤트의 리스너 전체 제거
    pub fn clear_listeners(&self, event: impl AsRef<str>) {
        self.registry.clear_listeners(event.as_ref());
    }

    /// 모든 리스너 제거
    pub fn clear_all_listeners(&self) {
        self.registry.clear_all_listeners();
    }

    /// 키 검증
    ///
    /// 허용 키면 `Ok(true)`, 아니면 정책 결과
    pub fn check_event(&self, event: &str, method: Method) -> Result<bool> {
        if self.validator.is_valid(event) {
            return Ok(true);
        }
        self.on_key_validation_error(event, method)
    }

    fn on_key_validation_error(&self, event: &str, method: Method) -> Result<bool> {
        let action = self.policy.decide(event, method);
        trace!(event, method = %method, action = ?action, "Rejected unknown event");
        action.execute()
    }

    pub fn is_allowed(&self, event: impl AsRef<str>) -> bool {
        self.validator.is_valid(event.as_ref())
    }

    pub fn keys(&self) -> &AllowedKeys {
        self.validator.keys()
    }

    pub fn policy(&self) -> &Pol {
        &self.policy
    }

    /// 내부 리스너 저장소 (조회용)
    pub fn registry(&self) -> &ListenerStore<P> {
        &self.registry
    }

    pub fn listener_count(&self, event: impl AsRef<str>) -> usize {
        self.registry.listener_count(event.as_ref())
    }
}

impl<P, Pol> std::fmt::Debug for StrictStore<P, Pol>
where
    P: Send + Sync + 'static,
    Pol: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrictStore")
            .field("keys", self.validator.keys())
            .field("policy", &self.policy)
            .field("registry", &self.registry)
            .finish()
    }
}
