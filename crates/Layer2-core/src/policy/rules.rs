//! Rules - 키 검증 실패 시 동작 규칙
//!
//! 규칙은 메서드 종류별(attachment / notification)로 독립적입니다.
//!
//! | 필드 | 값 | 동작 |
//! |------|----|------|
//! | `throws` | `Never` | 에러 없음 |
//! | `throws` | `Builtin` | `UnknownEventError` 반환 (기본값) |
//! | `throws` | `Factory(f)` | `f(event, method)`가 만든 에러 반환 |
//! | `logger` | `Off` | 로그 없음 (기본값) |
//! | `logger` | `Default` | 표준 메시지를 WARN 레벨로 기록 |
//! | `logger` | `Custom(f)` | `f(event, method)` 호출 |

use std::sync::Arc;
use strictstore_foundation::{Method, RuleConfig, RulesConfig};

/// 사용자 정의 에러 생성 함수
pub type ErrorFactory = Arc<dyn Fn(&str, Method) -> anyhow::Error + Send + Sync>;

/// 사용자 정의 로거 함수
pub type LoggerFn = Arc<dyn Fn(&str, Method) + Send + Sync>;

// ============================================================================
// Throws / Logger
// ============================================================================

/// 검증 실패 시 에러 정책
#[derive(Clone)]
pub enum Throws {
    Never,
    Builtin,
    Factory(ErrorFactory),
}

impl Throws {
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn(&str, Method) -> anyhow::Error + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(f))
    }
}

impl From<bool> for Throws {
    fn from(value: bool) -> Self {
        if value {
            Self::Builtin
        } else {
            Self::Never
        }
    }
}

impl std::fmt::Debug for Throws {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Never => write!(f, "Never"),
            Self::Builtin => write!(f, "Builtin"),
            Self::Factory(_) => write!(f, "Factory(..)"),
        }
    }
}

/// 검증 실패 시 로그 정책
#[derive(Clone)]
pub enum Logger {
    Off,
    Default,
    Custom(LoggerFn),
}

impl Logger {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str, Method) + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }
}

impl From<bool> for Logger {
    fn from(value: bool) -> Self {
        if value {
            Self::Default
        } else {
            Self::Off
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "Off"),
            Self::Default => write!(f, "Default"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

// ============================================================================
// Rule
// ============================================================================

/// 단일 메서드 종류의 규칙
#[derive(Debug, Clone)]
pub struct Rule {
    pub throws: Throws,
    pub logger: Logger,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            throws: Throws::Builtin,
            logger: Logger::Off,
        }
    }
}

impl Rule {
    /// 지정된 필드만 덮어쓰기
    pub fn merge(mut self, partial: PartialRule) -> Self {
        if let Some(throws) = partial.throws {
            self.throws = throws;
        }
        if let Some(logger) = partial.logger {
            self.logger = logger;
        }
        self
    }
}

/// 일부 필드만 지정한 규칙 (없는 필드는 기본값 유지)
#[derive(Debug, Clone, Default)]
pub struct PartialRule {
    pub throws: Option<Throws>,
    pub logger: Option<Logger>,
}

impl PartialRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn throws(mut self, throws: impl Into<Throws>) -> Self {
        self.throws = Some(throws.into());
        self
    }

    pub fn logger(mut self, logger: impl Into<Logger>) -> Self {
        self.logger = Some(logger.into());
        self
    }
}

impl From<&RuleConfig> for PartialRule {
    fn from(config: &RuleConfig) -> Self {
        Self {
            throws: config.throws.map(Throws::from),
            logger: config.logger.map(Logger::from),
        }
    }
}

// ============================================================================
// RuleSet
// ============================================================================

/// 생성 시 전달하는 규칙 덮어쓰기
#[derive(Debug, Clone, Default)]
pub struct RuleOverrides {
    pub attachment: Option<PartialRule>,
    pub notification: Option<PartialRule>,
}

impl RuleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// `on` 규칙
    pub fn attachment(mut self, rule: PartialRule) -> Self {
        self.attachment = Some(rule);
        self
    }

    /// `notify` 규칙
    pub fn notification(mut self, rule: PartialRule) -> Self {
        self.notification = Some(rule);
        self
    }

    /// 두 메서드에 같은 규칙
    pub fn both(self, rule: PartialRule) -> Self {
        self.attachment(rule.clone()).notification(rule)
    }
}

impl From<&RulesConfig> for RuleOverrides {
    fn from(config: &RulesConfig) -> Self {
        Self {
            attachment: config.attachment.as_ref().map(PartialRule::from),
            notification: config.notification.as_ref().map(PartialRule::from),
        }
    }
}

/// 메서드 종류별 규칙 집합
///
/// 기본값: 두 종류 모두 `throws = Builtin`, `logger = Off`
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub attachment: Rule,
    pub notification: Rule,
}

impl RuleSet {
    /// 기본 규칙에 덮어쓰기를 필드 단위로 병합
    pub fn merged(overrides: RuleOverrides) -> Self {
        let defaults = Self::default();
        Self {
            attachment: match overrides.attachment {
                Some(partial) => defaults.attachment.merge(partial),
                None => defaults.attachment,
            },
            notification: match overrides.notification {
                Some(partial) => defaults.notification.merge(partial),
                None => defaults.notification,
            },
        }
    }

    /// 메서드에 해당하는 규칙
    pub fn rule_for(&self, method: Method) -> &Rule {
        match method {
            Method::On => &self.attachment,
            Method::Notify => &self.notification,
        }
    }
}

impl From<RuleOverrides> for RuleSet {
    fn from(overrides: RuleOverrides) -> Self {
        Self::merged(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = RuleSet::default();
        for method in [Method::On, Method::Notify] {
            let rule = rules.rule_for(method);
            assert!(matches!(rule.throws, Throws::Builtin));
            assert!(matches!(rule.logger, Logger::Off));
        }
    }

    #[test]
    fn test_merge_is_field_by_field() {
        let rules = RuleSet::merged(
            RuleOverrides::new().notification(PartialRule::new().logger(true)),
        );

        assert!(matches!(rules.notification.throws, Throws::Builtin));
        assert!(matches!(rules.notification.logger, Logger::Default));
        assert!(matches!(rules.attachment.throws, Throws::Builtin));
        assert!(matches!(rules.attachment.logger, Logger::Off));
    }

    #[test]
    fn test_explicit_false_overrides_default() {
        let rules = RuleSet::merged(RuleOverrides::new().both(PartialRule::new().throws(false)));
        assert!(matches!(rules.attachment.throws, Throws::Never));
        assert!(matches!(rules.notification.throws, Throws::Never));
        assert!(matches!(rules.attachment.logger, Logger::Off));
    }

    #[test]
    fn test_function_overrides() {
        let rules = RuleSet::merged(
            RuleOverrides::new().attachment(
                PartialRule::new()
                    .throws(Throws::factory(|event, _| anyhow::anyhow!("bad {}", event)))
                    .logger(Logger::custom(|_, _| {})),
            ),
        );
        assert!(matches!(rules.attachment.throws, Throws::Factory(_)));
        assert!(matches!(rules.attachment.logger, Logger::Custom(_)));
        assert!(matches!(rules.notification.throws, Throws::Builtin));
    }

    #[test]
    fn test_from_config() {
        let config = RulesConfig {
            attachment: Some(RuleConfig {
                throws: Some(false),
                logger: None,
            }),
            notification: None,
        };
        let rules = RuleSet::from(RuleOverrides::from(&config));
        assert!(matches!(rules.attachment.throws, Throws::Never));
        assert!(matches!(rules.attachment.logger, Logger::Off));
        assert!(matches!(rules.notification.throws, Throws::Builtin));
    }
}
