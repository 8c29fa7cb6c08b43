// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Redraw cadence while toasts are on screen.
pub const TOAST_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a periodic tick subscription for toast auto-dismiss.
///
/// Expiry happens on the timer runtime; the tick only makes the view pick
/// up the new snapshot. No tick runs while nothing is shown.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TOAST_TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
