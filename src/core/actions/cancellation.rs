/// Pixels processed between two polls of a [`CancelToken`].
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "operation cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Polled from rendering loops; returning true abandons the pass.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn test_never_cancel_is_never_cancelled() {
        assert!(!NeverCancel.is_cancelled());
    }

    #[test]
    fn test_closure_token_tracks_superseding_generation() {
        let latest = AtomicU64::new(1);
        let job_generation = 1;
        let token = || latest.load(Ordering::Relaxed) != job_generation;

        assert!(!token.is_cancelled());

        latest.store(2, Ordering::Relaxed);
        assert!(token.is_cancelled());
    }
}
