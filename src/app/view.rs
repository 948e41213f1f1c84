// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The toolbar sits above the gallery canvas (or the empty state); the
//! lightbox and the toasts are stacked on top of both.

use super::Message;
use crate::gallery::thumbnail::ImageCache;
use crate::gallery::{GalleryItem, GalleryLayout, Lightbox, ViewTransition};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery_canvas::GalleryCanvas;
use crate::ui::notifications;
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::{lightbox, styles, toolbar};
use iced::widget::{column, container, text, Canvas, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: &'a GalleryLayout,
    pub transition: &'a ViewTransition,
    pub items: &'a [GalleryItem],
    pub lightbox: &'a Lightbox,
    pub image_cache: &'a ImageCache,
    pub theme_mode: ThemeMode,
    pub visitor_count: u64,
    pub clock: &'a str,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toolbar = toolbar::view(toolbar::ViewContext {
        i18n: ctx.i18n,
        mode: ctx.transition.mode(),
        controls_enabled: ctx.transition.controls_enabled(),
        theme_mode: ctx.theme_mode,
        visitor_count: ctx.visitor_count,
        clock: ctx.clock,
        image_count: ctx.items.len(),
    })
    .map(Message::Toolbar);

    let content = if ctx.items.is_empty() {
        view_empty(ctx.i18n)
    } else {
        view_gallery(&ctx)
    };

    let mut layers = Stack::new().push(
        column![toolbar, content]
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if let Some(overlay) = view_lightbox(&ctx) {
        layers = layers.push(overlay);
    }

    layers
        .push(notifications::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_empty(i18n: &I18n) -> Element<'_, Message> {
    container(
        column![
            text(i18n.tr("gallery-empty-title")).size(typography::TITLE_MD),
            text(i18n.tr("gallery-empty-hint")).size(typography::BODY),
        ]
        .spacing(spacing::XS)
        .align_x(iced::alignment::Horizontal::Center),
    )
    .center(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let canvas = Canvas::new(GalleryCanvas {
        layout: ctx.layout,
        items: ctx.items,
        transition: ctx.transition,
        colors: ColorScheme::for_mode(ctx.theme_mode),
        failed_label: ctx.i18n.tr("gallery-image-failed"),
    })
    .width(Length::Fill)
    .height(Length::Fill);

    container(Element::from(canvas).map(Message::Gallery))
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(styles::container::panel)
        .into()
}

fn view_lightbox<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let index = ctx.lightbox.current()?;
    let item = ctx.items.get(index)?;

    let overlay = lightbox::view(lightbox::ViewContext {
        i18n: ctx.i18n,
        image: ctx.image_cache.peek(&item.entry.path),
        caption: &item.entry.caption,
        index,
        total: ctx.items.len(),
    })
    .map(Message::Lightbox);

    Some(overlay)
}
