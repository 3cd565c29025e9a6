//! ListenerStore - 이벤트별 리스너 목록 저장소

use crate::listener::Listener;
use parking_lot::RwLock;
use std::collections::HashMap;
use strictstore_foundation::{Error, Result};
use tracing::{debug, trace};

/// 이벤트 이름별 리스너 저장소
///
/// - 같은 리스너를 여러 번 등록하면 등록 횟수만큼 호출됩니다.
/// - `off`는 첫 번째로 일치하는 항목 하나만 제거합니다.
pub struct ListenerStore<P: Send + Sync + 'static> {
    listeners: RwLock<HashMap<String, Vec<Listener<P>>>>,
}

impl<P: Send + Sync + 'static> ListenerStore<P> {
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(HashMap::new()),
        }
    }

    /// 리스너 등록 (목록 끝에 추가)
    pub fn on(&self, event: impl Into<String>, listener: Listener<P>) {
        let event = event.into();
        trace!(event = %event, listener = listener.name(), "Registering listener");

        self.listeners.write().entry(event).or_default().push(listener);
    }

    /// 이벤트 발행
    ///
    /// 등록 순서대로 리스너를 하나씩 완료될 때까지 실행합니다.
    /// 리스너가 에러를 반환하면 즉시 중단하고 에러를 반환합니다.
    pub async fn notify(&self, event: &str, payload: &P) -> Result<()> {
        let Some(snapshot) = self.snapshot(event) else {
            return Ok(());
        };

        trace!(event, listeners = snapshot.len(), "Delivering event");

        for listener in &snapshot {
            if let Err(source) = listener.call(payload).await {
                debug!(
                    event,
                    listener = listener.name(),
                    error = %source,
                    "Listener failed, aborting fan-out"
                );
                return Err(Error::listener(event, source));
            }
        }

        Ok(())
    }

    /// 리스너 해제 (첫 번째 일치 항목만)
    pub fn off(&self, event: &str, listener: &Listener<P>) -> bool {
        let mut listeners = self.listeners.write();
        let Some(list) = listeners.get_mut(event) else {
            return false;
        };

        match list.iter().position(|l| l.ptr_eq(listener)) {
            Some(index) => {
                list.remove(index);
                trace!(event, listener = listener.name(), "Removed listener");
                true
            }
            None => false,
        }
    }

    /// 특정 이벤트의 리스너 전체 제거
    pub fn clear_listeners(&self, event: &str) {
        if let Some(list) = self.listeners.write().get_mut(event) {
            list.clear();
        }
    }

    /// 모든 리스너 제거
    pub fn clear_all_listeners(&self) {
        self.listeners.write().clear();
    }

    /// 특정 이벤트의 리스너 수
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.read().get(event).map_or(0, Vec::len)
    }

    pub fn has_listeners(&self, event: &str) -> bool {
        self.listener_count(event) > 0
    }

    /// 리스너가 하나 이상 있는 이벤트 이름 (정렬됨)
    pub fn events(&self) -> Vec<String> {
        let mut events: Vec<String> = self
            .listeners
            .read()
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(event, _)| event.clone())
            .collect();
        events.sort();
        events
    }

    /// 등록된 리스너가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.listeners.read().values().all(Vec::is_empty)
    }

    fn snapshot(&self, event: &str) -> Option<Vec<Listener<P>>> {
        self.listeners.read().get(event).cloned()
    }
}

impl<P: Send + Sync + 'static> Default for ListenerStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Send + Sync + 'static> std::fmt::Debug for ListenerStore<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listeners = self.listeners.read();
        let counts: HashMap<&str, usize> = listeners
            .iter()
            .map(|(event, list)| (event.as_str(), list.len()))
            .collect();
        f.debug_struct("ListenerStore")
            .field("listeners", &counts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    type Calls = Arc<Mutex<Vec<(String, u32)>>>;

    fn recorder(tag: &str, calls: &Calls) -> Listener<u32> {
        let tag = tag.to_string();
        let calls = calls.clone();
        Listener::from_fn(move |payload: &u32| {
            calls.lock().push((tag.clone(), *payload));
            Ok(())
        })
    }

    #[tokio::test]
    async fn test_notify_in_registration_order() {
        let store = ListenerStore::new();
        let calls = Calls::default();

        store.on("tick", recorder("a", &calls));
        store.on("tick", recorder("b", &calls));
        store.on("tick", recorder("c", &calls));

        store.notify("tick", &7).await.unwrap();

        let calls = calls.lock().clone();
        assert_eq!(
            calls,
            vec![
                ("a".to_string(), 7),
                ("b".to_string(), 7),
                ("c".to_string(), 7)
            ]
        );
    }

    #[tokio::test]
    async fn test_notify_without_listeners() {
        let store = ListenerStore::<u32>::new();
        store.notify("nothing", &1).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_registration_and_off() {
        let store = ListenerStore::new();
        let calls = Calls::default();
        let listener = recorder("dup", &calls);

        store.on("tick", listener.clone());
        store.on("tick", listener.clone());
        store.notify("tick", &1).await.unwrap();
        assert_eq!(calls.lock().len(), 2);

        assert!(store.off("tick", &listener));
        store.notify("tick", &2).await.unwrap();
        assert_eq!(calls.lock().len(), 3);

        assert!(store.off("tick", &listener));
        assert!(!store.off("tick", &listener));
        assert!(!store.off("missing", &listener));
        store.notify("tick", &3).await.unwrap();
        assert_eq!(calls.lock().len(), 3);
    }

    #[tokio::test]
    async fn test_off_removes_first_match_only() {
        let store = ListenerStore::new();
        let calls = Calls::default();
        let a = recorder("a", &calls);
        let b = recorder("b", &calls);

        store.on("tick", a.clone());
        store.on("tick", b.clone());
        store.on("tick", a.clone());

        store.off("tick", &a);
        store.notify("tick", &0).await.unwrap();

        let tags: Vec<String> = calls.lock().iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(tags, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_off_is_scoped_to_event() {
        let store = ListenerStore::new();
        let calls = Calls::default();
        let listener = recorder("shared", &calls);

        store.on("first", listener.clone());
        store.on("second", listener.clone());

        store.off("first", &listener);
        assert_eq!(store.listener_count("first"), 0);
        assert_eq!(store.listener_count("second"), 1);

        store.notify("second", &5).await.unwrap();
        assert_eq!(calls.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_listeners() {
        let store = ListenerStore::new();
        let calls = Calls::default();

        store.on("a", recorder("a", &calls));
        store.on("b", recorder("b", &calls));

        store.clear_listeners("a");
        assert!(!store.has_listeners("a"));
        assert!(store.has_listeners("b"));
        assert_eq!(store.events(), vec!["b".to_string()]);

        store.clear_listeners("unknown");

        store.clear_all_listeners();
        assert!(store.is_empty());
        assert!(store.events().is_empty());
    }

    #[tokio::test]
    async fn test_failing_listener_aborts_fan_out() {
        let store = ListenerStore::new();
        let calls = Calls::default();

        store.on("tick", recorder("before", &calls));
        store.on(
            "tick",
            Listener::from_fn(|_: &u32| Err(anyhow::anyhow!("listener exploded"))),
        );
        store.on("tick", recorder("after", &calls));

        let err = store.notify("tick", &1).await.unwrap_err();
        assert!(matches!(err, Error::Listener { ref event, .. } if event == "tick"));
        assert!(err.to_string().contains("listener exploded"));

        let tags: Vec<String> = calls.lock().iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(tags, vec!["before"]);
    }

    #[tokio::test]
    async fn test_failing_async_listener_aborts_fan_out() {
        let store = ListenerStore::new();
        let calls = Calls::default();

        store.on("tick", recorder("before", &calls));
        store.on(
            "tick",
            Listener::from_async(|payload: u32| async move {
                tokio::task::yield_now().await;
                Err::<(), _>(anyhow::anyhow!("async listener failed on {}", payload))
            }),
        );
        store.on("tick", recorder("after", &calls));

        let err = store.notify("tick", &4).await.unwrap_err();
        assert!(matches!(err, Error::Listener { ref event, .. } if event == "tick"));
        assert!(err.to_string().contains("async listener failed on 4"));

        let tags: Vec<String> = calls.lock().iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(tags, vec!["before"]);
        assert_eq!(store.listener_count("tick"), 3);
    }

    #[tokio::test]
    async fn test_async_listeners_complete_before_notify_returns() {
        let store = ListenerStore::new();
        let calls = Calls::default();

        let sink = calls.clone();
        store.on(
            "tick",
            Listener::from_async(move |payload: u32| {
                let sink = sink.clone();
                async move {
                    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
                    sink.lock().push(("slow".to_string(), payload));
                    Ok(())
                }
            }),
        );
        store.on("tick", recorder("fast", &calls));

        store.notify("tick", &9).await.unwrap();

        let tags: Vec<String> = calls.lock().iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(tags, vec!["slow", "fast"]);
    }

    #[tokio::test]
    async fn test_reentrant_registration_uses_snapshot() {
        let store = Arc::new(ListenerStore::<u32>::new());
        let calls = Calls::default();

        let inner_store = Arc::downgrade(&store);
        let late = recorder("late", &calls);
        let sink = calls.clone();
        store.on(
            "tick",
            Listener::from_fn(move |payload: &u32| {
                sink.lock().push(("registrar".to_string(), *payload));
                if let Some(store) = inner_store.upgrade() {
                    store.on("tick", late.clone());
                }
                Ok(())
            }),
        );

        store.notify("tick", &1).await.unwrap();
        assert_eq!(calls.lock().len(), 1);
        assert_eq!(store.listener_count("tick"), 2);

        store.notify("tick", &2).await.unwrap();
        let tags: Vec<String> = calls.lock().iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(tags, vec!["registrar", "registrar", "late"]);
    }

    #[tokio::test]
    async fn test_reentrant_removal_does_not_skip() {
        let store = Arc::new(ListenerStore::<u32>::new());
        let calls = Calls::default();
        let victim = recorder("victim", &calls);

        let inner_store = Arc::downgrade(&store);
        let target = victim.clone();
        store.on(
            "tick",
            Listener::from_fn(move |_: &u32| {
                if let Some(store) = inner_store.upgrade() {
                    store.off("tick", &target);
                }
                Ok(())
            }),
        );
        store.on("tick", victim.clone());

        store.notify("tick", &1).await.unwrap();
        assert_eq!(calls.lock().len(), 1);
        assert_eq!(store.listener_count("tick"), 1);

        store.notify("tick", &2).await.unwrap();
        assert_eq!(calls.lock().len(), 1);
    }
}
