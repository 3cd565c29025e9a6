//! Event - 이벤트 키 및 메서드 타입
//!
//! 스토어의 이벤트 이름은 문자열이지만, 닫힌 enum으로 키 목록을 정의하면
//! 컴파일 타임에 키 집합을 고정할 수 있습니다.
//!
//! ```ignore
//! #[derive(Debug, Clone, Copy)]
//! enum UserEvent { Login, Logout }
//!
//! impl AsRef<str> for UserEvent {
//!     fn as_ref(&self) -> &str {
//!         match self {
//!             Self::Login => "user:login",
//!             Self::Logout => "user:logout",
//!         }
//!     }
//! }
//!
//! impl EventKey for UserEvent {
//!     const ALL: &'static [Self] = &[Self::Login, Self::Logout];
//! }
//! ```

pub mod types;

pub use types::{EventKey, Method};
