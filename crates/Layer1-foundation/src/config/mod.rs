//! Config - 스토어 설정 관리
//!
//! - `store.rs` - StoreConfig (허용 키, 메시지 prefix, 검증 규칙)

mod store;

pub use store::{RuleConfig, RulesConfig, StoreConfig};
