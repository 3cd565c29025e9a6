//! Store Config - 스토어 설정
//!
//! TOML 또는 JSON으로 허용 키와 검증 규칙을 선언합니다.
//!
//! ```toml
//! keys = ["user:login", "user:logout"]
//! message_prefix = "[AUTH]"
//!
//! [rules.attachment]
//! throws = false
//! logger = true
//! ```
//!
//! 설정 파일에서는 `throws`/`logger`를 bool로만 지정할 수 있습니다.
//! 사용자 정의 함수는 코드에서 `RuleOverrides`로 지정합니다.

use crate::error::DEFAULT_MESSAGE_PREFIX;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Rule Config
// ============================================================================

/// 단일 규칙 설정 (지정하지 않은 필드는 기본값 유지)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// 검증 실패 시 에러 발생 여부
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throws: Option<bool>,

    /// 검증 실패 시 경고 로그 여부
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logger: Option<bool>,
}

impl RuleConfig {
    pub fn is_empty(&self) -> bool {
        self.throws.is_none() && self.logger.is_none()
    }
}

/// attachment / notification 규칙 설정
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// `on` 호출에 대한 규칙
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<RuleConfig>,

    /// `notify` 호출에 대한 규칙
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<RuleConfig>,
}

// ============================================================================
// Store Config
// ============================================================================

/// 스토어 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// 허용 이벤트 키
    pub keys: Vec<String>,

    /// 에러/로그 메시지 prefix
    pub message_prefix: String,

    /// 검증 규칙
    pub rules: RulesConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            message_prefix: DEFAULT_MESSAGE_PREFIX.to_string(),
            rules: RulesConfig::default(),
        }
    }
}

impl StoreConfig {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// TOML 문자열에서 로드
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// JSON 문자열에서 로드
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 파일에서 로드 (확장자로 형식 결정: `.toml` | `.json`)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            other => {
                return Err(Error::Config(format!(
                    "Unsupported config format: {} ({})",
                    other.unwrap_or("<none>"),
                    path.display()
                )))
            }
        };

        tracing::debug!(
            path = %path.display(),
            keys = config.keys.len(),
            "Loaded store config"
        );

        Ok(config)
    }

    /// 설정 검증
    ///
    /// 설정 파일에서만 빈 문자열 키(`""`)를 거부합니다. 공백을 포함한 키는
    /// 코드에서 만든 허용 목록과 마찬가지로 그대로 정확히 비교됩니다.
    pub fn validate(&self) -> Result<()> {
        if let Some(pos) = self.keys.iter().position(|k| k.is_empty()) {
            return Err(Error::Config(format!("Empty event key at index {}", pos)));
        }
        Ok(())
    }
}
