// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot expiry timers.
//!
//! Each scheduled expiry is a Tokio task that sleeps for the notification's
//! lifetime and then runs a callback. The task's [`AbortHandle`] is kept per
//! notification id so a manual dismissal can cancel it.

use super::notification::NotificationId;
use std::collections::HashMap;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Stand-in deadline for lifetimes too long to represent as an instant.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Pending expiry tasks keyed by notification id.
#[derive(Debug)]
pub(crate) struct ExpiryTimers {
    runtime: Handle,
    pending: HashMap<NotificationId, AbortHandle>,
}

impl ExpiryTimers {
    pub(crate) fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: HashMap::new(),
        }
    }

    /// Runs `on_expire` once `delay` has elapsed, unless cancelled first.
    ///
    /// Scheduling an id that already has a pending timer replaces (and
    /// cancels) the previous one.
    pub(crate) fn schedule<F>(&mut self, id: NotificationId, delay: Duration, on_expire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        // Deadline is taken now, not when the task is first polled, and on
        // the runtime's clock even when called from a foreign thread.
        let deadline = {
            let _context = self.runtime.enter();
            let now = Instant::now();
            now.checked_add(delay).unwrap_or_else(|| now + FAR_FUTURE)
        };
        let task = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_expire();
        });

        if let Some(previous) = self.pending.insert(id, task.abort_handle()) {
            previous.abort();
        }
    }

    /// Cancels the pending timer for `id`.
    ///
    /// Returns `false` if no timer was pending (already fired or never scheduled).
    pub(crate) fn cancel(&mut self, id: NotificationId) -> bool {
        match self.pending.remove(&id) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Drops the bookkeeping for a timer that has fired.
    pub(crate) fn forget(&mut self, id: NotificationId) {
        self.pending.remove(&id);
    }

    /// Cancels every pending timer.
    pub(crate) fn cancel_all(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for ExpiryTimers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
