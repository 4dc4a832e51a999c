//! Owned set of pending completion notifiers.
//!
//! Each scheduled notifier is a Tokio task that sleeps for the requested
//! duration and then calls the callback exactly once. Tasks live in a
//! [`JoinSet`] owned by the vibrator instead of being detached, so they
//! can be counted, cancelled, and are aborted when the vibrator is dropped.
//!
//! ```text
//! on(50, cb) ──► schedule ──► [sleep 50ms] ──► cb.on_complete()
//! on(500, cb)──► schedule ──► [sleep 500ms] ─────────────────► cb.on_complete()
//!                              (independent; neither cancels the other)
//! ```

use crate::callback::CallbackRef;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{error, trace, warn};

/// Pending completion notifiers.
#[derive(Debug, Default)]
pub struct NotifierSet {
    tasks: Mutex<JoinSet<()>>,
}

impl NotifierSet {
    /// Create an empty notifier set.
    pub fn new() -> Self {
        Self::default()
    }

    fn tasks(&self) -> MutexGuard<'_, JoinSet<()>> {
        self.tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Schedule `callback` to be notified once after `delay`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule(&self, delay: Duration, callback: CallbackRef) {
        let mut tasks = self.tasks();
        Self::reap(&mut tasks);

        tasks.spawn(async move {
            trace!("Completion notifier armed for {}ms", delay.as_millis());
            tokio::time::sleep(delay).await;
            trace!("Notifying on complete");
            if let Err(e) = callback.on_complete() {
                error!("Failed to call on_complete: {}", e);
            }
        });
    }

    /// Abort every notifier that has not fired yet.
    pub fn cancel_all(&self) {
        let mut tasks = self.tasks();
        if !tasks.is_empty() {
            trace!("Cancelling {} pending notifier(s)", tasks.len());
        }
        tasks.abort_all();
        Self::reap(&mut tasks);
    }

    /// Number of notifiers that have not finished yet.
    pub fn pending(&self) -> usize {
        let mut tasks = self.tasks();
        Self::reap(&mut tasks);
        tasks.len()
    }

    /// Drop finished tasks from the set.
    fn reap(tasks: &mut JoinSet<()>) {
        while let Some(result) = tasks.try_join_next() {
            if let Err(e) = result
                && e.is_panic()
            {
                warn!("Completion notifier panicked: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_callback() -> (CallbackRef, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let callback: CallbackRef = Arc::new(move || -> vibrator_core::Result<()> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        (callback, count)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_delay() {
        let set = NotifierSet::new();
        let (callback, count) = counting_callback();

        set.schedule(Duration::from_millis(100), callback);
        assert_eq!(set.pending(), 1);

        tokio::time::sleep(Duration::from_millis(99)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(set.pending(), 0);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all() {
        let set = NotifierSet::new();
        let (callback, count) = counting_callback();

        set.schedule(Duration::from_millis(100), Arc::clone(&callback));
        set.schedule(Duration::from_millis(200), callback);
        set.cancel_all();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(set.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_callback_is_contained() {
        let set = NotifierSet::new();
        let callback: CallbackRef = Arc::new(|| -> vibrator_core::Result<()> {
            Err(vibrator_core::Error::callback("transport closed"))
        });

        set.schedule(Duration::from_millis(10), callback);
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(set.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending() {
        let (callback, count) = counting_callback();
        {
            let set = NotifierSet::new();
            set.schedule(Duration::from_millis(10), callback);
        }

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
