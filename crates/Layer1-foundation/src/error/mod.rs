//! Error types for StrictStore
//!
//! 모든 에러를 중앙에서 관리
//!
//! - `UnknownEventError`: 허용되지 않은 이벤트 키에 대한 기본 에러
//! - `Error`: 스토어 전체에서 사용하는 에러 타입

use crate::event::Method;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// 기본 메시지 prefix
pub const DEFAULT_MESSAGE_PREFIX: &str = "[STRICT STORE]";

/// 키 검증 실패 메시지 생성
///
/// 형식: `<prefix> "<method>" encountered unknown event: <event>`
pub fn failed_to_validate_event_message(event: &str, method: Method, prefix: &str) -> String {
    format!("{} \"{}\" encountered unknown event: {}", prefix, method, event)
}

// ============================================================================
// UnknownEventError
// ============================================================================

/// 허용 목록에 없는 이벤트 키로 `on`/`notify`를 호출했을 때의 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct UnknownEventError {
    /// 거부된 이벤트 이름
    pub event: String,

    /// 거부된 메서드 (`on` | `notify`)
    pub method: Method,

    message: String,
}

impl UnknownEventError {
    /// 에러 종류 식별자
    pub const VARIANT: &'static str = "StrictStoreKeyCheckFailError";

    /// 기본 prefix로 에러 생성
    pub fn new(event: impl Into<String>, method: Method) -> Self {
        Self::with_prefix(event, method, DEFAULT_MESSAGE_PREFIX)
    }

    /// prefix를 지정하여 에러 생성
    pub fn with_prefix(event: impl Into<String>, method: Method, prefix: &str) -> Self {
        let event = event.into();
        let message = failed_to_validate_event_message(&event, method, prefix);
        Self {
            event,
            method,
            message,
        }
    }

    pub fn variant(&self) -> &'static str {
        Self::VARIANT
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// Error
// ============================================================================

/// StrictStore 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 키 검증 관련
    // ========================================================================
    #[error(transparent)]
    UnknownEvent(#[from] UnknownEventError),

    /// 사용자 정의 error factory가 만든 에러 (변환 없이 그대로 전달)
    #[error(transparent)]
    Rejected(anyhow::Error),

    // ========================================================================
    // 리스너 관련
    // ========================================================================
    /// 리스너가 반환한 에러 (원래 에러 값 유지, `downcast_ref`로 복원 가능)
    #[error("Listener for \"{event}\" failed: {source}")]
    Listener {
        event: String,
        #[source]
        source: anyhow::Error,
    },

    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 기본 unknown-event 에러인지 확인
    pub fn is_unknown_event(&self) -> bool {
        matches!(self, Error::UnknownEvent(_))
    }

    /// 기본 unknown-event 에러 참조
    pub fn unknown_event(&self) -> Option<&UnknownEventError> {
        match self {
            Error::UnknownEvent(e) => Some(e),
            _ => None,
        }
    }

    /// 에러 종류 식별자
    pub fn variant(&self) -> &'static str {
        match self {
            Error::UnknownEvent(_) => UnknownEventError::VARIANT,
            Error::Rejected(_) => "Rejected",
            Error::Listener { .. } => "Listener",
            Error::Config(_) => "Config",
            Error::Io(_) => "Io",
            Error::Toml(_) => "Toml",
            Error::Json(_) => "Json",
        }
    }

    /// 리스너 에러 생성 헬퍼
    pub fn listener(event: impl Into<String>, source: anyhow::Error) -> Self {
        Error::Listener {
            event: event.into(),
            source,
        }
    }
}
