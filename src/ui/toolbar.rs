// SPDX-License-Identifier: MPL-2.0
//! Top toolbar: view mode selector, open folder, theme, visitor count and clock.

use crate::gallery::ViewMode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use fluent_bundle::FluentValue;
use iced::widget::{button, container, row, text, Row, Space};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ViewModeSelected(ViewMode),
    OpenFolder,
    CycleTheme,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub mode: ViewMode,
    /// False while a view transition is running.
    pub controls_enabled: bool,
    pub theme_mode: ThemeMode,
    pub visitor_count: u64,
    pub clock: &'a str,
    pub image_count: usize,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let selector = ViewMode::ALL.iter().fold(
        Row::new().spacing(spacing::XXS),
        |selector, &mode| {
            let style: fn(&Theme, button::Status) -> button::Style = if mode == ctx.mode {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            // Disabled buttons have no on_press.
            let segment = button(text(ctx.i18n.tr(mode.label_key())).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .on_press_maybe(ctx.controls_enabled.then_some(Message::ViewModeSelected(mode)))
                .style(style);
            selector.push(segment)
        },
    );

    let open_folder = button(text(ctx.i18n.tr("toolbar-open-folder")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::OpenFolder)
        .style(styles::button::unselected);

    let theme = button(text(ctx.i18n.tr(ctx.theme_mode.label_key())).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::CycleTheme)
        .style(styles::button::unselected);

    let image_count = ctx.i18n.tr_with_args(
        "gallery-image-count",
        &[("count", FluentValue::from(ctx.image_count))],
    );
    let visitors = ctx.i18n.tr_with_args(
        "visitor-count",
        &[("count", FluentValue::from(ctx.visitor_count))],
    );

    let bar = row![
        text(ctx.i18n.tr("view-mode-label")).size(typography::BODY),
        selector,
        open_folder,
        text(image_count).size(typography::CAPTION),
        Space::new().width(Length::Fill),
        theme,
        text(visitors).size(typography::CAPTION),
        text(ctx.clock.to_owned()).size(typography::BODY),
    ]
    .spacing(spacing::SM)
    .align_y(alignment::Vertical::Center);

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .style(styles::container::toolbar)
        .into()
}
