//! strictstore-core: Core Runtime for StrictStore
//!
//! Layer2 - 이벤트 스토어 레이어
//!
//! # 주요 모듈
//!
//! - `listener`: 리스너 trait 및 핸들 (동기/비동기 클로저 지원)
//! - `registry`: 이벤트 이름 → 리스너 목록 저장소 (검증 없음)
//! - `validator`: 허용 이벤트 키 검증
//! - `policy`: 검증 실패 처리 규칙 (무시/로그/에러)
//! - `store`: `StrictStore` 공개 인터페이스
//!
//! # 사용 예시
//!
//! ```ignore
//! use strictstore_core::{Listener, StrictStore};
//!
//! #[derive(Debug, Clone)]
//! enum Payload {
//!     Login { user_id: String, timestamp: u64 },
//!     Logout { user_id: String, reason: String },
//! }
//!
//! let store = StrictStore::new(["user:login", "user:logout"]);
//! store.on("user:login", Listener::from_fn(|p: &Payload| {
//!     println!("{:?}", p);
//!     Ok(())
//! }))?;
//!
//! store
//!     .notify("user:login", Payload::Login { user_id: "1".into(), timestamp: 1000 })
//!     .await?;
//! ```

pub mod listener;
pub mod policy;
pub mod registry;
pub mod store;
pub mod validator;

// Re-exports: Listener
pub use listener::{EventListener, Listener};

// Re-exports: Registry
pub use registry::ListenerStore;

// Re-exports: Validator
pub use validator::{AllowedKeys, KeyValidator};

// Re-exports: Policy
pub use policy::{
    ErrorFactory, LogAction, Logger, LoggerFn, PartialRule, RaiseAction, RejectionAction,
    RejectionPolicy, Rule, RuleOverrides, RulePolicy, RuleSet, SilentPolicy, Throws,
};

// Re-exports: Store
pub use store::{KeyValidatingStore, StrictStore};

// Re-exports: Foundation
pub use strictstore_foundation::{
    failed_to_validate_event_message, Error, EventKey, Method, Result, StoreConfig,
    UnknownEventError, DEFAULT_MESSAGE_PREFIX,
};
