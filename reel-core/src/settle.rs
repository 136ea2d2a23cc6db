//! Debounced "resizing" flag.
//!
//! Every resize raises the flag and restarts a quiet window; the flag drops
//! only once a full window passes without another resize. Consumers use it to
//! suppress transitions while the viewport is being dragged.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::constants::resize::SETTLE_MS;
use crate::error::{CarouselError, Result};

/// Resizing flag with a restartable quiet window.
#[derive(Debug)]
pub struct ResizeSettle {
    window: Duration,
    flag: Arc<watch::Sender<bool>>,
    // Bumped per trigger so a timer that already woke cannot clear a newer
    // resize.
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl ResizeSettle {
    /// Settle after `window` without a resize.
    pub fn new(window: Duration) -> Self {
        let (flag, _) = watch::channel(false);
        Self {
            window,
            flag: Arc::new(flag),
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// Whether a resize happened within the last quiet window.
    pub fn is_resizing(&self) -> bool {
        *self.flag.borrow()
    }

    /// Receiver that observes every flag transition.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.flag.subscribe()
    }

    /// Raise the flag and restart the quiet window, cancelling any timer
    /// still pending from an earlier resize.
    ///
    /// Needs a tokio runtime for the timer; without one the flag is left
    /// clear and [`CarouselError::NoRuntime`] is returned.
    pub fn trigger(&mut self) -> Result<()> {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.abort_pending();

        let Ok(handle) = Handle::try_current() else {
            self.flag.send_replace(false);
            return Err(CarouselError::NoRuntime);
        };

        self.flag.send_replace(true);

        let window = self.window;
        let guard = SettleGuard {
            flag: Arc::clone(&self.flag),
            current: Arc::clone(&self.generation),
            generation,
        };
        self.pending = Some(handle.spawn(async move {
            // A runtime without timers panics here; the guard still clears
            // the flag as the task unwinds.
            tokio::time::sleep(window).await;
            tracing::debug!("resize settled");
            drop(guard);
        }));

        Ok(())
    }

    /// Drop the pending timer and clear the flag immediately.
    pub fn cancel(&mut self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.abort_pending();
        self.flag.send_replace(false);
    }

    fn abort_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Default for ResizeSettle {
    fn default() -> Self {
        Self::new(Duration::from_millis(SETTLE_MS))
    }
}

impl Drop for ResizeSettle {
    fn drop(&mut self) {
        // Retire the generation so the aborted task leaves the flag alone.
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.abort_pending();
    }
}

/// Lowers the flag when the settle task finishes or dies, unless a newer
/// resize has taken over.
struct SettleGuard {
    flag: Arc<watch::Sender<bool>>,
    current: Arc<AtomicU64>,
    generation: u64,
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        self.flag.send_if_modified(|resizing| {
            if self.current.load(Ordering::Acquire) != self.generation
                || !*resizing
            {
                return false;
            }
            *resizing = false;
            true
        });
    }
}
