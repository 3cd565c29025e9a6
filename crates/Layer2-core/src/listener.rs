//! Listener - 이벤트 리스너
//!
//! 리스너는 `Listener<P>` 핸들로 등록/해제됩니다. 핸들은 `Arc` 기반이라
//! 복제 비용이 작고, 해제 시에는 포인터 동일성만 비교합니다.
//!
//! ```ignore
//! // 동기 리스너
//! let on_login = Listener::from_fn(|payload: &Payload| {
//!     println!("login: {:?}", payload);
//!     Ok(())
//! });
//!
//! // 비동기 리스너 (payload 복제본을 받음)
//! let audit = Listener::from_async(|payload: Payload| async move {
//!     write_audit(payload).await
//! });
//!
//! // 직접 구현한 리스너
//! let custom = Listener::from(Arc::new(MyListener::new()));
//! ```

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

// ============================================================================
// EventListener Trait
// ============================================================================

/// 이벤트 리스너 trait
///
/// 반환된 에러는 `notify` 호출자에게 전파되고, 뒤에 등록된 리스너는 호출되지 않습니다.
#[async_trait]
pub trait EventListener<P>: Send + Sync
where
    P: Send + Sync + 'static,
{
    /// 리스너 이름 (디버깅용)
    fn name(&self) -> &str {
        "anonymous"
    }

    /// 이벤트 처리
    async fn on_event(&self, payload: &P) -> anyhow::Result<()>;
}

// ============================================================================
// Closure adapters
// ============================================================================

struct FnListener<F> {
    name: String,
    f: F,
}

#[async_trait]
impl<P, F> EventListener<P> for FnListener<F>
where
    P: Send + Sync + 'static,
    F: Fn(&P) -> anyhow::Result<()> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn on_event(&self, payload: &P) -> anyhow::Result<()> {
        (self.f)(payload)
    }
}

struct AsyncFnListener<F> {
    name: String,
    f: F,
}

#[async_trait]
impl<P, F, Fut> EventListener<P> for AsyncFnListener<F>
where
    P: Clone + Send + Sync + 'static,
    F: Fn(P) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn on_event(&self, payload: &P) -> anyhow::Result<()> {
        (self.f)(payload.clone()).await
    }
}

// ============================================================================
// Listener handle
// ============================================================================

/// 등록 가능한 리스너 핸들
pub struct Listener<P: Send + Sync + 'static>(Arc<dyn EventListener<P>>);

impl<P: Send + Sync + 'static> Listener<P> {
    /// `EventListener` 구현체로 생성
    pub fn new<L>(listener: L) -> Self
    where
        L: EventListener<P> + 'static,
    {
        Self(Arc::new(listener))
    }

    /// 동기 클로저로 생성
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&P) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self::new(FnListener {
            name: "fn".to_string(),
            f,
        })
    }

    /// 비동기 클로저로 생성
    pub fn from_async<F, Fut>(f: F) -> Self
    where
        P: Clone,
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self::new(AsyncFnListener {
            name: "async_fn".to_string(),
            f,
        })
    }

    /// 리스너 이름
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// 같은 리스너(같은 할당)인지 확인
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::as_ptr(&self.0) as *const () == Arc::as_ptr(&other.0) as *const ()
    }

    pub(crate) async fn call(&self, payload: &P) -> anyhow::Result<()> {
        self.0.on_event(payload).await
    }
}

impl<P: Send + Sync + 'static> Clone for Listener<P> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<P, L> From<Arc<L>> for Listener<P>
where
    P: Send + Sync + 'static,
    L: EventListener<P> + 'static,
{
    fn from(listener: Arc<L>) -> Self {
        Self(listener)
    }
}

impl<P: Send + Sync + 'static> std::fmt::Debug for Listener<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("name", &self.name())
            .field("ptr", &(Arc::as_ptr(&self.0) as *const ()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingListener {
        count: AtomicUsize,
    }

    #[async_trait]
    impl EventListener<u32> for CountingListener {
        fn name(&self) -> &str {
            "counting"
        }

        async fn on_event(&self, payload: &u32) -> anyhow::Result<()> {
            self.count.fetch_add(*payload as usize, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_identity() {
        let a = Listener::<u32>::from_fn(|_| Ok(()));
        let b = Listener::<u32>::from_fn(|_| Ok(()));
        let a2 = a.clone();

        assert!(a.ptr_eq(&a2));
        assert!(!a.ptr_eq(&b));
    }

    #[tokio::test]
    async fn test_arc_listener_keeps_identity() {
        let inner = Arc::new(CountingListener {
            count: AtomicUsize::new(0),
        });
        let a: Listener<u32> = Listener::from(inner.clone());
        let b: Listener<u32> = Listener::from(inner.clone());

        assert!(a.ptr_eq(&b));
        assert_eq!(a.name(), "counting");

        a.call(&3).await.unwrap();
        b.call(&4).await.unwrap();
        assert_eq!(inner.count.load(Ordering::SeqCst), 7);
    }

    #[tokio::test]
    async fn test_async_listener() {
        let seen = Arc::new(AtomicUsize::new(0));
        let sink = seen.clone();
        let listener = Listener::from_async(move |payload: u32| {
            let sink = sink.clone();
            async move {
                tokio::task::yield_now().await;
                sink.store(payload as usize, Ordering::SeqCst);
                Ok(())
            }
        });

        listener.call(&42).await.unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 42);
    }
}
