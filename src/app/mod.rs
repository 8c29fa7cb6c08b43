// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together localization, persisted preferences and
//! the notification service, and translates messages into side effects like
//! config persistence or toasts. Page components that talk to the plant API
//! plug in under the header; they only need a clone of the
//! [`NotificationCenter`] to report outcomes.

mod message;
mod persistence;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use persistence::apply_language_change;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::notifications::{CenterOptions, NotificationCenter, NotificationInput, Snapshot};
use crate::paths;
use crate::ui::{header, toast};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    /// Shared toast queue; clones go to whatever needs to report outcomes.
    notifications: NotificationCenter,
    /// Snapshot rendered by `view`, refreshed after every message.
    toasts: Snapshot,
    /// Localized tooltip of the toast dismiss button.
    dismiss_label: String,
    /// Config directory override; `None` uses the normal path resolution.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("toasts", &self.toasts.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let notifications = NotificationCenter::on_runtime(
            flags.runtime,
            CenterOptions {
                default_ttl: config.notifications.default_ttl(),
            },
        );

        let mut app = Self::with_parts(i18n, notifications, None);

        app.notify(
            NotificationInput::info(app.i18n.tr("notification-welcome-title"))
                .with_message(app.i18n.tr("notification-welcome-message")),
        );
        if let Some(key) = config_warning {
            app.notify(NotificationInput::warning(app.i18n.tr(&key)));
        }

        (app, Task::none())
    }

    fn with_parts(
        i18n: I18n,
        notifications: NotificationCenter,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let dismiss_label = i18n.tr("toast-dismiss-label");
        let toasts = notifications.active();
        Self {
            i18n,
            notifications,
            toasts,
            dismiss_label,
            config_dir,
        }
    }

    fn notify(&mut self, input: NotificationInput) {
        if let Err(error) = self.notifications.enqueue(input) {
            tracing::error!(%error, "could not show notification");
        }
        self.toasts = self.notifications.active();
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(!self.toasts.is_empty())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(header::Message::LanguageSelected(locale)) => {
                self.change_language(locale);
            }
            Message::Toast(toast::Message::Dismiss(id)) => {
                if let Err(error) = self.notifications.dismiss(id) {
                    tracing::error!(%error, %id, "could not dismiss notification");
                }
            }
            Message::Tick(_) => {}
        }

        self.toasts = self.notifications.active();
        Task::none()
    }

    fn change_language(&mut self, locale: LanguageIdentifier) {
        match apply_language_change(&mut self.i18n, locale.clone(), self.config_dir.clone()) {
            Ok(true) => {
                self.dismiss_label = self.i18n.tr("toast-dismiss-label");
                let language = self.i18n.language_name(&locale);
                let message = self.i18n.tr_with_args(
                    "notification-language-changed-message",
                    &[("language", language.as_str())],
                );
                self.notify(
                    NotificationInput::success(self.i18n.tr("notification-language-changed-title"))
                        .with_message(message),
                );
            }
            Ok(false) => {}
            Err(error) => {
                tracing::error!(%error, "failed to save language preference");
                // The locale is already switched in memory; only persistence failed.
                self.dismiss_label = self.i18n.tr("toast-dismiss-label");
                self.notify(
                    NotificationInput::error(self.i18n.tr("notification-config-save-error-title"))
                        .with_message(self.i18n.tr("notification-config-save-error-message")),
                );
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            toasts: &self.toasts,
            dismiss_label: &self.dismiss_label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::notifications::Kind;
    use std::time::Duration;
    use tempfile::{tempdir, TempDir};

    fn test_app() -> (App, TempDir) {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let center = NotificationCenter::new(CenterOptions::default()).unwrap();
        let app = App::with_parts(i18n, center, Some(temp_dir.path().to_path_buf()));
        (app, temp_dir)
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_message_removes_toast() {
        let (mut app, _dir) = test_app();
        app.notify(NotificationInput::info("Line 3 stopped"));
        let id = app.toasts[0].id();

        let _ = app.update(Message::Toast(toast::Message::Dismiss(id)));

        assert!(app.toasts.is_empty());
        assert!(app.notifications.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn tick_picks_up_expired_toasts() {
        let (mut app, _dir) = test_app();
        app.notify(NotificationInput::info("short").with_ttl(Duration::from_millis(100)));
        assert_eq!(app.toasts.len(), 1);

        tokio::time::advance(Duration::from_millis(100)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        // Cached snapshot is stale until the next message.
        assert_eq!(app.toasts.len(), 1);

        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(app.toasts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn language_change_shows_localized_success_toast() {
        let (mut app, _dir) = test_app();

        let _ = app.update(Message::Header(header::Message::LanguageSelected(
            "fr".parse().unwrap(),
        )));

        assert_eq!(app.i18n.current_locale().to_string(), "fr");
        assert_eq!(app.dismiss_label, "Fermer");
        let toast = app.toasts.last().expect("a toast is shown");
        assert_eq!(toast.kind(), Kind::Success);
        assert_eq!(toast.title(), "Langue mise à jour");
        assert_eq!(
            toast.message(),
            Some("La langue de l'interface est désormais Français.")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn closed_center_does_not_break_updates() {
        let (mut app, _dir) = test_app();
        app.notifications.close();

        app.notify(NotificationInput::info("ignored"));
        let _ = app.update(Message::Tick(std::time::Instant::now()));

        assert!(app.toasts.is_empty());
    }
}
