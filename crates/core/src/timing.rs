//! Cooperative timing primitives
//!
//! Debounce and throttle are modeled as owned values rather than wrapped
//! closures: the holder decides what runs, the primitive decides when.
//! Everything runs on tokio's timer; no threads are spawned.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};

/// Suspend the current task for the given duration.
pub async fn delay(duration: Duration) {
    sleep(duration).await;
}

/// Coalesces rapid calls, running only the most recent one after a quiet
/// period.
///
/// Each [`call`](Debouncer::call) cancels the previously scheduled action,
/// so a burst of calls results in exactly one execution, `wait` after the
/// last call. Requires a tokio runtime; a pending action is cancelled when
/// the debouncer is dropped.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    #[must_use]
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Schedule `action`, cancelling any previously scheduled action.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let wait = self.wait;
        self.pending = Some(tokio::spawn(async move {
            sleep(wait).await;
            action();
        }));
    }

    /// Cancel the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Rate-limits calls to at most one per window, dropping the rest.
///
/// The first call in a window runs immediately; calls arriving before the
/// window elapses are discarded.
#[derive(Debug)]
pub struct Throttler {
    window: Duration,
    last_fired: Option<Instant>,
}

impl Throttler {
    /// Create a throttler with the given window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    /// Run `action` if the window has elapsed; returns whether it ran.
    pub fn call<F>(&mut self, action: F) -> bool
    where
        F: FnOnce(),
    {
        let now = Instant::now();
        let open = self
            .last_fired
            .is_none_or(|last| now.duration_since(last) >= self.window);

        if open {
            self.last_fired = Some(now);
            action();
        }

        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_delay_waits() {
        let start = Instant::now();
        delay(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_debounce_fires_once_after_burst() {
        let count = Arc::new(AtomicU32::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(50));

        for _ in 0..5 {
            let count = Arc::clone(&count);
            debouncer.call(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
            sleep(Duration::from_millis(5)).await;
        }

        sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_debounce_cancel() {
        let count = Arc::new(AtomicU32::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(20));

        {
            let count = Arc::clone(&count);
            debouncer.call(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }
        debouncer.cancel();

        sleep(Duration::from_millis(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_throttle_drops_calls_within_window() {
        let count = Arc::new(AtomicU32::new(0));
        let mut throttler = Throttler::new(Duration::from_millis(100));

        for _ in 0..5 {
            let count = Arc::clone(&count);
            throttler.call(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_throttle_fires_again_after_window() {
        let count = Arc::new(AtomicU32::new(0));
        let mut throttler = Throttler::new(Duration::from_millis(20));

        let c = Arc::clone(&count);
        assert!(throttler.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));

        sleep(Duration::from_millis(40)).await;

        let c = Arc::clone(&count);
        assert!(throttler.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
