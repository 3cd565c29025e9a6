//! Policy - 키 검증 실패 처리 정책
//!
//! ```text
//! check_event(name, method)
//!     │
//!     ├── 허용 키 ──────────────► Registry
//!     │
//!     └── 미허용 ──► RejectionPolicy::decide ──► RejectionAction::execute
//!                                                 ├── Ok(false)  (무시/로그)
//!                                                 └── Err(..)    (에러)
//! ```
//!
//! - `RulePolicy`: `RuleSet` 기반 (StrictStore 기본)
//! - `SilentPolicy`: 항상 무시 (로그/에러 없음)

mod action;
mod rules;

pub use action::{LogAction, RaiseAction, RejectionAction};
pub use rules::{ErrorFactory, Logger, LoggerFn, PartialRule, Rule, RuleOverrides, RuleSet, Throws};

use strictstore_foundation::{
    failed_to_validate_event_message, Method, UnknownEventError, DEFAULT_MESSAGE_PREFIX,
};

// ============================================================================
// RejectionPolicy Trait
// ============================================================================

/// 검증 실패 처리 정책
pub trait RejectionPolicy: Send + Sync {
    /// 거부된 호출에 대한 동작 결정 (부작용 없음)
    fn decide(&self, event: &str, method: Method) -> RejectionAction;
}

// ============================================================================
// RulePolicy
// ============================================================================

/// `RuleSet` 기반 정책
#[derive(Debug, Clone)]
pub struct RulePolicy {
    rules: RuleSet,
    prefix: String,
}

impl RulePolicy {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            prefix: DEFAULT_MESSAGE_PREFIX.to_string(),
        }
    }

    /// 메시지 prefix 지정
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for RulePolicy {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl RejectionPolicy for RulePolicy {
    fn decide(&self, event: &str, method: Method) -> RejectionAction {
        let rule = self.rules.rule_for(method);

        let log = match &rule.logger {
            Logger::Off => None,
            Logger::Default => Some(LogAction::Default(failed_to_validate_event_message(
                event,
                method,
                &self.prefix,
            ))),
            Logger::Custom(logger) => Some(LogAction::Custom {
                logger: logger.clone(),
                event: event.to_string(),
                method,
            }),
        };

        let raise = match &rule.throws {
            Throws::Never => None,
            Throws::Builtin => Some(RaiseAction::Builtin(UnknownEventError::with_prefix(
                event,
                method,
                &self.prefix,
            ))),
            Throws::Factory(factory) => Some(RaiseAction::Factory {
                factory: factory.clone(),
                event: event.to_string(),
                method,
            }),
        };

        RejectionAction::from_parts(log, raise)
    }
}

// ============================================================================
// SilentPolicy
// ============================================================================

/// 미허용 키를 조용히 무시하는 정책
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPolicy;

impl RejectionPolicy for SilentPolicy {
    fn decide(&self, _event: &str, _method: Method) -> RejectionAction {
        RejectionAction::Ignore
    }
}
