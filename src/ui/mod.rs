// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern: components render
//! from borrowed state and report user intent as messages.
//!
//! - [`toast`] - Toast overlay for the notification queue
//! - [`header`] - Top bar with the app title and language selection
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod header;
pub mod toast;
