//! # strictstore-foundation
//!
//! Foundation layer for StrictStore:
//! - Error: 에러 타입 및 unknown-event 에러
//! - Event: 메서드 종류(`on` | `notify`), 이벤트 키 trait
//! - Config: 허용 키 및 검증 규칙 설정 (TOML/JSON)

pub mod config;
pub mod error;
pub mod event;

// ============================================================================
// Error
// ============================================================================
pub use error::{
    failed_to_validate_event_message, Error, Result, UnknownEventError,
    DEFAULT_MESSAGE_PREFIX,
};

// ============================================================================
// Event (이벤트 키)
// ============================================================================
pub use event::{EventKey, Method};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{RuleConfig, RulesConfig, StoreConfig};
