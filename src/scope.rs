//! Liveness scope for work started on behalf of a view.
//!
//! A view owns a [`ViewScope`]; background tasks hold a [`ScopeHandle`] and
//! must check it before delivering results. Dropping the scope closes it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tracing::debug;

pub struct ViewScope {
    closed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            closed: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Close the scope and wake every task waiting on it.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            debug!("view scope closed");
            self.notify.notify_waiters();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Create a handle for sharing with background tasks.
    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            closed: Arc::clone(&self.closed),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.close();
    }
}

/// Lightweight handle for checking whether the owning view is still alive.
#[derive(Clone)]
pub struct ScopeHandle {
    closed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScopeHandle {
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Resolves once the owning scope is closed.
    pub async fn closed(&self) {
        // Register interest before reading the flag; notify_waiters() only
        // wakes futures that are already enabled.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_closed() {
            return;
        }
        notified.await;
    }
}
