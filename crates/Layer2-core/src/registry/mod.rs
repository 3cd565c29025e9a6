//! # Listener Registry
//!
//! 이벤트 이름 → 리스너 목록 매핑을 관리하는 기본 저장소
//!
//! ## 설계 원칙
//!
//! 1. **Interior Mutability**: RwLock을 사용하여 `Arc` 내부에서도 변경 가능
//! 2. **Snapshot Fan-out**: `notify`는 호출 시점의 목록 복사본을 순회
//! 3. **No Validation**: 어떤 이벤트 이름이든 허용 (검증은 `StrictStore` 담당)
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                ListenerStore<P>                       │
//! │  RwLock<HashMap<String, Vec<Listener<P>>>>            │
//! │  ┌──────────────┬──────────────┬──────────────┐      │
//! │  │ "user:login" │ "user:logout"│ ...          │      │
//! │  │ [L1, L2, L1] │ [L3]         │              │      │
//! │  └──────────────┴──────────────┴──────────────┘      │
//! └──────────────────────────────────────────────────────┘
//! ```

mod store;

pub use store::ListenerStore;
