//! Key Validator - 허용 이벤트 키 검증
//!
//! 스토어마다 허용된 이벤트 이름 목록을 보관하고, 이름이 정확히 일치하는지만 확인합니다.

use std::collections::{BTreeMap, HashMap};
use strictstore_foundation::EventKey;

// ============================================================================
// AllowedKeys
// ============================================================================

/// 허용 이벤트 이름 목록 (생성 후 변경 불가)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedKeys(Vec<String>);

impl AllowedKeys {
    /// 이름 목록으로 생성
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    /// 매핑의 값(value)을 이름으로 사용
    pub fn from_values<I, K, V>(map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        V: Into<String>,
    {
        Self(map.into_iter().map(|(_, v)| v.into()).collect())
    }

    /// `EventKey` enum의 모든 키
    pub fn of<K: EventKey>() -> Self {
        Self::new(K::names())
    }

    /// 정확히 일치하는 이름이 있는지 확인
    pub fn contains(&self, event: &str) -> bool {
        self.0.iter().any(|key| key == event)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> From<Vec<S>> for AllowedKeys {
    fn from(keys: Vec<S>) -> Self {
        Self::new(keys)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for AllowedKeys {
    fn from(keys: [S; N]) -> Self {
        Self::new(keys)
    }
}

impl From<&[&str]> for AllowedKeys {
    fn from(keys: &[&str]) -> Self {
        Self::new(keys.iter().copied())
    }
}

impl<K, V: Into<String>> From<HashMap<K, V>> for AllowedKeys {
    fn from(map: HashMap<K, V>) -> Self {
        Self::from_values(map)
    }
}

impl<K, V: Into<String>> From<BTreeMap<K, V>> for AllowedKeys {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::from_values(map)
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedKeys {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// ============================================================================
// KeyValidator
// ============================================================================

/// 이벤트 키 검증기
#[derive(Debug, Clone, Default)]
pub struct KeyValidator {
    keys: AllowedKeys,
}

impl KeyValidator {
    pub fn new(keys: impl Into<AllowedKeys>) -> Self {
        Self { keys: keys.into() }
    }

    /// 허용된 이벤트인지 확인
    pub fn is_valid(&self, event: &str) -> bool {
        self.keys.contains(event)
    }

    pub fn keys(&self) -> &AllowedKeys {
        &self.keys
    }
}
