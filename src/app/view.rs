// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page content sits under the header; the toast overlay is stacked on
//! top of both so it never shifts the layout.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::notifications::Notification;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::toast::Toast;
use iced::widget::{Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub toasts: &'a [Notification],
    pub dismiss_label: &'a str,
}

/// Renders the shell and the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_view = header::view(HeaderViewContext { i18n: ctx.i18n }).map(Message::Header);

    let page = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("dashboard-heading")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("dashboard-empty")).size(typography::BODY));

    let base = Column::new().push(header_view).push(
        Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    );

    let overlay = Toast::view_overlay(ctx.toasts, ctx.dismiss_label).map(Message::Toast);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(overlay)
        .into()
}
