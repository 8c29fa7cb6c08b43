// SPDX-License-Identifier: MPL-2.0
//! Top bar with the application title and language selection.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, Button, Container, Row, Text};
use iced::{alignment, Element, Length};
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
}

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// One entry of the language picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub locale: LanguageIdentifier,
    /// Display name in the current UI language.
    pub name: String,
    pub selected: bool,
}

/// Lists the language buttons in display order, one per available locale.
pub fn language_options(i18n: &I18n) -> Vec<LanguageOption> {
    i18n.available_locales()
        .iter()
        .map(|locale| LanguageOption {
            locale: locale.clone(),
            name: i18n.language_name(locale),
            selected: i18n.current_locale() == locale,
        })
        .collect()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let title = Container::new(Text::new(i18n.tr("app-title")).size(typography::TITLE_MD))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left);

    let mut languages = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("select-language-label")).size(typography::BODY));

    for option in language_options(i18n) {
        let label = Text::new(option.name).size(typography::BODY);
        let style = if option.selected {
            button::primary
        } else {
            button::secondary
        };
        languages = languages.push(
            Button::new(label)
                .on_press(Message::LanguageSelected(option.locale))
                .style(style),
        );
    }

    Container::new(
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(title)
            .push(languages),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::HEADER_HEIGHT))
    .padding([spacing::XS, spacing::MD])
    .align_y(alignment::Vertical::Center)
    .into()
}
