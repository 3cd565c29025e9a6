//! Event Types - 메서드 종류와 이벤트 키 trait

use serde::{Deserialize, Serialize};

// ============================================================================
// Method
// ============================================================================

/// 키 검증을 거치는 메서드
///
/// `On`은 attachment(리스너 등록), `Notify`는 notification(이벤트 발행)에 해당합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// 리스너 등록
    On,
    /// 이벤트 발행
    Notify,
}

impl Method {
    /// 메서드 문자열 반환
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Notify => "notify",
        }
    }

    /// 규칙 종류 이름 (attachment | notification)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::On => "attachment",
            Self::Notify => "notification",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// EventKey
// ============================================================================

/// 닫힌 이벤트 키 집합
///
/// `ALL`은 허용 키 목록을 만들 때 사용되고, `AsRef<str>`는 실제 이벤트 이름입니다.
pub trait EventKey: Copy + AsRef<str> + 'static {
    /// 모든 키
    const ALL: &'static [Self];

    /// 모든 키의 이름
    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|key| key.as_ref()).collect()
    }
}
