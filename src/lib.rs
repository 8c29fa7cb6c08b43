// SPDX-License-Identifier: MPL-2.0
//! `floorboard` is the desktop shell of a manufacturing-plant operations
//! dashboard, built with the Iced GUI framework.
//!
//! The shell hosts a localized header and a toast overlay backed by a
//! [`notifications::NotificationCenter`]: any part of the app can enqueue a
//! short-lived success, info, warning or error message, and the center
//! expires it after its time-to-live unless the user dismisses it first.

#![doc(html_root_url = "https://docs.rs/floorboard/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod notifications;
pub mod paths;
pub mod ui;
