// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record held by the queue, the
//! `NotificationInput` builder callers hand to [`super::NotificationCenter::enqueue`],
//! and the `Kind` enum used by the presentation layer.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Lifetime applied when neither the caller nor the configuration sets one.
pub const DEFAULT_TTL: Duration = Duration::from_millis(4000);

/// Unique identifier for a notification.
///
/// Ids come from a process-wide counter and are never reused, so an id that
/// has expired or been dismissed can never match a newer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of outcome being reported. Only selects presentation styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Operation completed successfully.
    Success,
    /// Informational message.
    Info,
    /// Something the user should look at, but nothing failed.
    Warning,
    /// Operation failed.
    Error,
}

impl Kind {
    /// All kinds, in display-priority order.
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Info, Kind::Warning, Kind::Error];

    /// Stable lowercase name, used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Info => "info",
            Kind::Warning => "warning",
            Kind::Error => "error",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a caller supplies to enqueue a notification.
///
/// ```
/// use floorboard::notifications::NotificationInput;
/// use std::time::Duration;
///
/// let input = NotificationInput::success("Saved")
///     .with_message("Downtime event #42 was recorded")
///     .with_ttl(Duration::from_secs(6));
/// assert_eq!(input.title(), "Saved");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationInput {
    kind: Kind,
    title: String,
    message: Option<String>,
    ttl: Option<Duration>,
}

impl NotificationInput {
    /// Creates an input with the given kind and title.
    pub fn new(kind: Kind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: None,
            ttl: None,
        }
    }

    /// Creates a success input.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Kind::Success, title)
    }

    /// Creates an info input.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Kind::Info, title)
    }

    /// Creates a warning input.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Kind::Warning, title)
    }

    /// Creates an error input.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Kind::Error, title)
    }

    /// Adds the longer body text shown under the title.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Overrides the lifetime before auto-removal.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Turns the input into a held record, resolving the lifetime.
    pub(crate) fn into_notification(self, default_ttl: Duration) -> Notification {
        Notification {
            id: NotificationId::next(),
            kind: self.kind,
            title: self.title,
            message: self.message,
            ttl: self.ttl.unwrap_or(default_ttl),
        }
    }
}

/// A notification currently held by the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: String,
    message: Option<String>,
    ttl: Duration,
}

impl Notification {
    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Lifetime the expiry timer was scheduled with.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = NotificationInput::success("test").into_notification(DEFAULT_TTL);
        let n2 = NotificationInput::success("test").into_notification(DEFAULT_TTL);
        assert_ne!(n1.id(), n2.id());
        assert!(n2.id() > n1.id());
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(NotificationInput::success("").kind(), Kind::Success);
        assert_eq!(NotificationInput::info("").kind(), Kind::Info);
        assert_eq!(NotificationInput::warning("").kind(), Kind::Warning);
        assert_eq!(NotificationInput::error("").kind(), Kind::Error);
    }

    #[test]
    fn missing_ttl_falls_back_to_default() {
        let notification = NotificationInput::info("Machine online").into_notification(DEFAULT_TTL);
        assert_eq!(notification.ttl(), Duration::from_millis(4000));
    }

    #[test]
    fn explicit_ttl_wins_over_default() {
        let notification = NotificationInput::warning("Spindle temperature high")
            .with_ttl(Duration::from_millis(100))
            .into_notification(DEFAULT_TTL);
        assert_eq!(notification.ttl(), Duration::from_millis(100));
    }

    #[test]
    fn builder_keeps_title_and_message() {
        let notification = NotificationInput::error("Login failed")
            .with_message("Check the operator badge number")
            .into_notification(DEFAULT_TTL);

        assert_eq!(notification.kind(), Kind::Error);
        assert_eq!(notification.title(), "Login failed");
        assert_eq!(
            notification.message(),
            Some("Check the operator badge number")
        );
    }

    #[test]
    fn kind_names_are_distinct() {
        let mut names: Vec<_> = Kind::ALL.iter().map(|k| k.as_str()).collect();
        names.dedup();
        assert_eq!(names.len(), Kind::ALL.len());
    }
}
