// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationCenter` owns the ordered list of active notifications and
//! one expiry timer per notification. It is constructed once at startup and
//! handed out by cloning; every clone talks to the same queue.

use super::expiry::ExpiryTimers;
use super::notification::{Notification, NotificationId, NotificationInput, DEFAULT_TTL};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;

/// Immutable, ordered view of the active notifications (oldest first).
pub type Snapshot = Arc<[Notification]>;

/// Usage errors of the notification service.
///
/// Both variants point at wiring mistakes rather than transient conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NotificationError {
    #[error("notification center needs a Tokio runtime to schedule expiry timers")]
    NoRuntime,
    #[error("notification center has been closed")]
    Closed,
}

/// Construction options for [`NotificationCenter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterOptions {
    /// Lifetime used when an input does not set one.
    pub default_ttl: Duration,
}

impl Default for CenterOptions {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL,
        }
    }
}

#[derive(Debug)]
struct State {
    active: Vec<Notification>,
    timers: ExpiryTimers,
    closed: bool,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<State>,
    snapshots: watch::Sender<Snapshot>,
    default_ttl: Duration,
}

impl Shared {
    /// Publishes the current list. Called with the state lock held so
    /// subscribers never see a half-applied change.
    fn publish(&self, state: &State) {
        let snapshot: Snapshot = state.active.iter().cloned().collect();
        self.snapshots.send_replace(snapshot);
    }

    fn expire(&self, id: NotificationId) {
        let mut state = self.state.lock();
        state.timers.forget(id);
        if remove_by_id(&mut state.active, id) {
            tracing::debug!(%id, "notification expired");
            self.publish(&state);
        }
    }
}

/// Handle to the shared notification queue.
///
/// Cloning is cheap. Dropping the last handle cancels every pending timer.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    shared: Arc<Shared>,
}

impl NotificationCenter {
    /// Creates a center bound to the Tokio runtime of the calling context.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::NoRuntime`] when called outside a runtime.
    pub fn new(options: CenterOptions) -> Result<Self, NotificationError> {
        let runtime = Handle::try_current().map_err(|_| NotificationError::NoRuntime)?;
        Ok(Self::on_runtime(runtime, options))
    }

    /// Creates a center that schedules its expiry timers on `runtime`.
    ///
    /// The handle may then be used from any thread, including threads that
    /// are not part of the runtime (such as a GUI event loop).
    #[must_use]
    pub fn on_runtime(runtime: Handle, options: CenterOptions) -> Self {
        let (snapshots, _) = watch::channel(Snapshot::from(Vec::new()));
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    active: Vec::new(),
                    timers: ExpiryTimers::new(runtime),
                    closed: false,
                }),
                snapshots,
                default_ttl: options.default_ttl,
            }),
        }
    }

    /// Lifetime applied to inputs without an explicit one.
    #[must_use]
    pub fn default_ttl(&self) -> Duration {
        self.shared.default_ttl
    }

    /// Appends a notification and schedules its expiry.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Closed`] after [`close`](Self::close).
    pub fn enqueue(&self, input: NotificationInput) -> Result<NotificationId, NotificationError> {
        let mut state = self.shared.state.lock();
        if state.closed {
            return Err(NotificationError::Closed);
        }

        let notification = input.into_notification(self.shared.default_ttl);
        let id = notification.id();
        let ttl = notification.ttl();
        tracing::debug!(
            %id,
            kind = %notification.kind(),
            ?ttl,
            "notification enqueued"
        );

        let weak: Weak<Shared> = Arc::downgrade(&self.shared);
        state.timers.schedule(id, ttl, move || {
            if let Some(shared) = weak.upgrade() {
                shared.expire(id);
            }
        });
        state.active.push(notification);

        self.shared.publish(&state);
        Ok(id)
    }

    /// Removes the notification with `id` and cancels its timer.
    ///
    /// Unknown ids (already expired or dismissed) are ignored. Returns
    /// whether a notification was removed.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Closed`] after [`close`](Self::close).
    pub fn dismiss(&self, id: NotificationId) -> Result<bool, NotificationError> {
        let mut state = self.shared.state.lock();
        if state.closed {
            return Err(NotificationError::Closed);
        }

        state.timers.cancel(id);
        if !remove_by_id(&mut state.active, id) {
            return Ok(false);
        }

        tracing::debug!(%id, "notification dismissed");
        self.shared.publish(&state);
        Ok(true)
    }

    /// Removes every notification and cancels every timer.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Closed`] after [`close`](Self::close).
    pub fn clear(&self) -> Result<(), NotificationError> {
        let mut state = self.shared.state.lock();
        if state.closed {
            return Err(NotificationError::Closed);
        }

        state.timers.cancel_all();
        if !state.active.is_empty() {
            state.active.clear();
            self.shared.publish(&state);
        }
        Ok(())
    }

    /// Ends the service scope: timers are cancelled, the list is emptied and
    /// later `enqueue`/`dismiss`/`clear` calls fail. Calling it twice is harmless.
    pub fn close(&self) {
        let mut state = self.shared.state.lock();
        if state.closed {
            return;
        }

        state.closed = true;
        state.timers.cancel_all();
        state.active.clear();
        self.shared.publish(&state);
        tracing::debug!("notification center closed");
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().closed
    }

    /// Returns the active notifications in insertion order.
    #[must_use]
    pub fn active(&self) -> Snapshot {
        self.shared.snapshots.borrow().clone()
    }

    /// Returns a receiver that is marked changed after every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.shared.snapshots.subscribe()
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.state.lock().active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of expiry timers still pending.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.shared.state.lock().timers.len()
    }
}

fn remove_by_id(active: &mut Vec<Notification>, id: NotificationId) -> bool {
    match active.iter().position(|n| n.id() == id) {
        Some(pos) => {
            active.remove(pos);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Kind;
    use std::collections::HashSet;

    async fn advance(ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    fn center() -> NotificationCenter {
        NotificationCenter::new(CenterOptions::default()).expect("test runs inside a runtime")
    }

    fn titles(center: &NotificationCenter) -> Vec<String> {
        center.active().iter().map(|n| n.title().to_string()).collect()
    }

    #[test]
    fn construction_outside_runtime_fails() {
        let result = NotificationCenter::new(CenterOptions::default());
        assert_eq!(result.err(), Some(NotificationError::NoRuntime));
    }

    #[tokio::test(start_paused = true)]
    async fn new_center_is_empty() {
        let center = center();
        assert!(center.is_empty());
        assert!(center.active().is_empty());
        assert_eq!(center.pending_timers(), 0);
        assert_eq!(center.default_ttl(), DEFAULT_TTL);
    }

    #[tokio::test(start_paused = true)]
    async fn enqueue_preserves_call_order() {
        let center = center();
        for title in ["Press 1 stopped", "Press 2 stopped", "Oven online", "Shift saved"] {
            center.enqueue(NotificationInput::info(title)).unwrap();
        }

        assert_eq!(
            titles(&center),
            vec!["Press 1 stopped", "Press 2 stopped", "Oven online", "Shift saved"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn enqueue_returns_distinct_ids() {
        let center = center();
        let ids: HashSet<_> = (0..50)
            .map(|i| center.enqueue(NotificationInput::info(format!("n{i}"))).unwrap())
            .collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(center.pending_timers(), 50);
    }

    #[tokio::test(start_paused = true)]
    async fn default_ttl_expires_after_four_seconds() {
        let center = center();
        center.enqueue(NotificationInput::success("Saved")).unwrap();

        let active = center.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title(), "Saved");
        assert_eq!(active[0].kind(), Kind::Success);

        advance(3999).await;
        assert_eq!(center.len(), 1);

        advance(1).await;
        assert!(center.is_empty());
        assert_eq!(center.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_default_ttl_applies_to_inputs_without_ttl() {
        let center = NotificationCenter::new(CenterOptions {
            default_ttl: Duration::from_millis(1500),
        })
        .unwrap();
        center.enqueue(NotificationInput::info("Sync done")).unwrap();

        advance(1500).await;
        assert!(center.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn notifications_expire_independently() {
        let center = center();
        center
            .enqueue(NotificationInput::info("short").with_ttl(Duration::from_millis(100)))
            .unwrap();
        center
            .enqueue(NotificationInput::info("long").with_ttl(Duration::from_millis(300)))
            .unwrap();

        advance(100).await;
        assert_eq!(titles(&center), vec!["long"]);

        advance(200).await;
        assert!(center.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_removes_only_matching_entry() {
        let center = center();
        let a = center.enqueue(NotificationInput::info("A")).unwrap();
        let b = center.enqueue(NotificationInput::info("B")).unwrap();
        let c = center.enqueue(NotificationInput::info("C")).unwrap();
        assert_ne!(a, b);

        assert!(center.dismiss(b).unwrap());
        assert_eq!(titles(&center), vec!["A", "C"]);

        assert!(center.dismiss(a).unwrap());
        assert_eq!(titles(&center), vec!["C"]);
        assert_eq!(center.active()[0].id(), c);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_unknown_id_is_a_no_op() {
        let center = center();
        let id = center.enqueue(NotificationInput::info("A")).unwrap();
        center.enqueue(NotificationInput::info("B")).unwrap();

        assert!(center.dismiss(id).unwrap());
        assert!(!center.dismiss(id).unwrap());
        assert_eq!(titles(&center), vec!["B"]);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_before_expiry_cancels_timer() {
        let center = center();
        let id = center
            .enqueue(NotificationInput::warning("Belt slip").with_ttl(Duration::from_millis(100)))
            .unwrap();

        advance(50).await;
        assert!(center.dismiss(id).unwrap());
        assert!(center.is_empty());
        assert_eq!(center.pending_timers(), 0);

        advance(50).await;
        assert!(center.is_empty());
        assert!(!center.dismiss(id).unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_after_expiry_is_harmless() {
        let center = center();
        let id = center
            .enqueue(NotificationInput::info("gone soon").with_ttl(Duration::from_millis(10)))
            .unwrap();
        let keep = center.enqueue(NotificationInput::info("kept")).unwrap();

        advance(10).await;
        assert!(!center.dismiss(id).unwrap());
        assert_eq!(center.active()[0].id(), keep);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_ttl_expires_on_next_poll() {
        let center = center();
        center
            .enqueue(NotificationInput::info("blink").with_ttl(Duration::ZERO))
            .unwrap();

        advance(0).await;
        assert!(center.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn unrepresentable_ttl_stays_until_dismissed() {
        let center = center();
        let id = center
            .enqueue(NotificationInput::info("sticky").with_ttl(Duration::MAX))
            .unwrap();

        assert_eq!(center.len(), 1);
        assert_eq!(center.active().len(), 1);
        assert_eq!(center.pending_timers(), 1);

        advance(3_600_000).await;
        assert_eq!(center.active().len(), 1);

        assert_eq!(center.dismiss(id), Ok(true));
        assert!(center.is_empty());
        assert!(center.active().is_empty());
        assert_eq!(center.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_removes_everything_and_cancels_timers() {
        let center = center();
        for i in 0..5 {
            center.enqueue(NotificationInput::info(format!("n{i}"))).unwrap();
        }

        center.clear().unwrap();
        assert!(center.is_empty());
        assert_eq!(center.pending_timers(), 0);

        center.enqueue(NotificationInput::info("after clear")).unwrap();
        assert_eq!(center.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn closed_center_rejects_usage() {
        let center = center();
        let id = center.enqueue(NotificationInput::info("A")).unwrap();

        center.close();
        center.close();
        assert!(center.is_closed());
        assert!(center.is_empty());
        assert_eq!(center.pending_timers(), 0);

        assert_eq!(
            center.enqueue(NotificationInput::info("late")),
            Err(NotificationError::Closed)
        );
        assert_eq!(center.dismiss(id), Err(NotificationError::Closed));
        assert_eq!(center.clear(), Err(NotificationError::Closed));
    }

    #[tokio::test(start_paused = true)]
    async fn clones_share_one_queue() {
        let center = center();
        let other = center.clone();

        let id = other.enqueue(NotificationInput::success("from clone")).unwrap();
        assert_eq!(center.len(), 1);

        assert!(center.dismiss(id).unwrap());
        assert!(other.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_every_change() {
        let center = center();
        let mut rx = center.subscribe();
        assert!(rx.borrow_and_update().is_empty());

        let id = center.enqueue(NotificationInput::info("A")).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);

        center.dismiss(id).unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());

        center
            .enqueue(NotificationInput::info("B").with_ttl(Duration::from_millis(20)))
            .unwrap();
        rx.borrow_and_update();
        advance(20).await;
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn snapshots_are_immutable() {
        let center = center();
        center.enqueue(NotificationInput::info("A")).unwrap();
        let before = center.active();

        center.enqueue(NotificationInput::info("B")).unwrap();
        assert_eq!(before.len(), 1);
        assert_eq!(center.active().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_last_handle_cancels_timers() {
        let center = center();
        let mut rx = center.subscribe();
        center
            .enqueue(NotificationInput::info("orphan").with_ttl(Duration::from_millis(10)))
            .unwrap();
        rx.borrow_and_update();

        drop(center);
        advance(20).await;
        // Sender is gone with the center, so the receiver reports closure
        // instead of an expiry update.
        assert!(rx.has_changed().is_err());
    }
}
