//! One-shot transient signals, currently just the income animation flag.
//!
//! Adding an income transaction raises the flag; a scheduled task clears
//! it after a fixed window. The task is explicitly cancellable and tied to
//! the owning store's lifetime, so nothing fires after teardown.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::warn;

/// How long the income flag stays raised before auto-clearing.
pub const INCOME_FLAG_WINDOW: Duration = Duration::from_secs(4);

/// A transient boolean flag with a scheduled auto-reset.
///
/// Not persisted; a fresh process always starts with the flag lowered.
#[derive(Debug)]
pub struct IncomeFlag {
    visible: Arc<AtomicBool>,
    window: Duration,
    reset: Option<JoinHandle<()>>,
}

impl Default for IncomeFlag {
    fn default() -> Self {
        Self::new(INCOME_FLAG_WINDOW)
    }
}

impl IncomeFlag {
    /// Creates a lowered flag with the given auto-reset window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            visible: Arc::new(AtomicBool::new(false)),
            window,
            reset: None,
        }
    }

    /// Raises the flag and (re)schedules the auto-reset.
    ///
    /// A pending reset from an earlier trigger is aborted first, so the
    /// flag always stays up for one full window after the latest trigger.
    /// Must run inside a tokio runtime for the reset to be scheduled; when
    /// none is available the flag is raised without one.
    pub fn trigger(&mut self) {
        self.cancel();
        self.visible.store(true, Ordering::SeqCst);

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("no tokio runtime; income flag will not auto-clear");
            return;
        };

        let visible = Arc::clone(&self.visible);
        let window = self.window;
        self.reset = Some(handle.spawn(async move {
            tokio::time::sleep(window).await;
            visible.store(false, Ordering::SeqCst);
        }));
    }

    /// Whether the flag is currently raised.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Lowers the flag and aborts any pending reset.
    pub fn cancel(&mut self) {
        if let Some(reset) = self.reset.take() {
            reset.abort();
        }
        self.visible.store(false, Ordering::SeqCst);
    }
}

impl Drop for IncomeFlag {
    fn drop(&mut self) {
        if let Some(reset) = self.reset.take() {
            reset.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_flag_raises_and_auto_clears() {
        let mut flag = IncomeFlag::default();
        assert!(!flag.is_visible());

        flag.trigger();
        assert!(flag.is_visible());

        // Still visible just before the window closes
        tokio::time::sleep(Duration::from_millis(3_900)).await;
        assert!(flag.is_visible());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!flag.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retrigger_restarts_the_window() {
        let mut flag = IncomeFlag::default();
        flag.trigger();

        tokio::time::sleep(Duration::from_secs(3)).await;
        flag.trigger();

        // The first window would have expired by now; the second keeps it up
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(flag.is_visible());

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(!flag.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_lowers_immediately() {
        let mut flag = IncomeFlag::default();
        flag.trigger();
        flag.cancel();
        assert!(!flag.is_visible());

        // Nothing fires later either
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(!flag.is_visible());
    }
}
