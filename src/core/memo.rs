use crate::utils::error::Result;
use std::future::Future;
use tokio::sync::OnceCell;

/// Per-instance cache for a fallible async computation.
///
/// The first successful initialization is stored for the lifetime of the
/// owning instance; later accesses return the stored reference without
/// running the computation again. A failed initialization leaves the cell
/// empty, so the error propagates and a later access may retry. There is no
/// invalidation.
#[derive(Debug)]
pub struct Memo<T> {
    cell: OnceCell<T>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Memo<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Returns the cached value, running `init` at most once per instance.
    pub async fn get_or_try_init<F, Fut>(&self, init: F) -> Result<&T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.cell.get_or_try_init(init).await
    }

    /// Returns the cached value if the computation already ran.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ClientError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_computation_runs_exactly_once() {
        let calls = AtomicUsize::new(0);
        let memo: Memo<u64> = Memo::new();

        for _ in 0..3 {
            let value = memo
                .get_or_try_init(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(42)
                })
                .await
                .unwrap();
            assert_eq!(*value, 42);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(memo.get(), Some(&42));
    }

    #[test]
    fn test_default_cell_is_empty() {
        // Must hold for value types that are not themselves Default.
        struct Opaque(#[allow(dead_code)] u8);

        let memo: Memo<Opaque> = Memo::default();
        assert!(memo.get().is_none());
    }

    #[tokio::test]
    async fn test_failed_init_leaves_cell_empty() {
        let calls = AtomicUsize::new(0);
        let memo: Memo<u64> = Memo::new();

        let err = memo
            .get_or_try_init(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(ClientError::Payload {
                    message: "boom".to_string(),
                })
            })
            .await;
        assert!(err.is_err());
        assert!(memo.get().is_none());

        // A later access retries and can succeed.
        let value = memo
            .get_or_try_init(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(7)
            })
            .await
            .unwrap();
        assert_eq!(*value, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
