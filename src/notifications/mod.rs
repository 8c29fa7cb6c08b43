// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! Short-lived, non-blocking messages that tell the user about the outcome
//! of an action ("Saved", "Login failed", ...). The queue itself knows
//! nothing about rendering; [`crate::ui::toast`] draws whatever snapshot it
//! is given.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, `NotificationInput` builder and `Kind`
//! - [`center`] - `NotificationCenter`, the shared service that owns the queue
//! - `expiry` - cancellable one-shot timers backing auto-removal
//!
//! # Usage
//!
//! ```
//! use floorboard::notifications::{CenterOptions, NotificationCenter, NotificationInput};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), floorboard::notifications::NotificationError> {
//! let center = NotificationCenter::new(CenterOptions::default())?;
//!
//! let id = center.enqueue(NotificationInput::success("Saved"))?;
//! assert_eq!(center.active().len(), 1);
//!
//! center.dismiss(id)?;
//! assert!(center.active().is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior
//!
//! - Notifications are kept in insertion order; nothing reorders them.
//! - Each one disappears after its lifetime (4s by default) or when dismissed.
//! - Dismissing an unknown or already-expired id does nothing.

pub mod center;
mod expiry;
pub mod notification;

pub use center::{CenterOptions, NotificationCenter, NotificationError, Snapshot};
pub use notification::{Kind, Notification, NotificationId, NotificationInput, DEFAULT_TTL};
