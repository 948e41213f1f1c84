// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: the full-size image over a dimmed backdrop, with
//! close, previous and next controls.
//!
//! The image surface is a canvas so that press/release and touch positions
//! can be turned into swipes. Tapping the backdrop outside the image closes
//! the lightbox.

use crate::gallery::geometry::Bounds;
use crate::gallery::{ImageData, Navigation};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::{button, column, container, row, text, Action, Canvas, Space, Stack};
use iced::{alignment, mouse, touch, Element, Length, Point, Rectangle, Renderer, Theme};

const TAP_SLOP: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Navigate(Navigation),
    SwipeStarted(f32),
    SwipeEnded(f32),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Decoded full-size image, `None` while loading.
    pub image: Option<&'a ImageData>,
    pub caption: &'a str,
    /// Zero-based index of the displayed image.
    pub index: usize,
    pub total: usize,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let surface: Element<'_, Message> = Canvas::new(ImageSurface { image: ctx.image })
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let loading: Element<'_, Message> = if ctx.image.is_none() {
        container(text(ctx.i18n.tr("gallery-loading")).size(typography::BODY_LG))
            .center(Length::Fill)
            .into()
    } else {
        Space::new().into()
    };

    let close = nav_button("×", ctx.i18n.tr("lightbox-close"), Navigation::Close);
    let previous = nav_button("‹", ctx.i18n.tr("lightbox-previous"), Navigation::Previous);
    let next = nav_button("›", ctx.i18n.tr("lightbox-next"), Navigation::Next);

    let position = ctx.i18n.tr_with_args(
        "lightbox-position",
        &[
            ("current", FluentValue::from(ctx.index + 1)),
            ("total", FluentValue::from(ctx.total)),
        ],
    );
    let indicator = container(
        text(format!("{}  ·  {}", ctx.caption, position)).size(typography::BODY),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::FULL));

    let controls = column![
        row![Space::new().width(Length::Fill), close].padding(spacing::MD),
        row![previous, Space::new().width(Length::Fill), next]
            .align_y(alignment::Vertical::Center)
            .padding(spacing::MD)
            .height(Length::Fill),
        container(indicator)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::MD),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    container(Stack::new().push(surface).push(loading).push(controls))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop)
        .into()
}

fn nav_button<'a>(glyph: &'a str, label: String, navigation: Navigation) -> Element<'a, Message> {
    let face = text(glyph)
        .size(typography::TITLE_MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .center();

    iced::widget::tooltip(
        button(face)
            .width(Length::Fixed(sizing::NAV_BUTTON))
            .height(Length::Fixed(sizing::NAV_BUTTON))
            .on_press(Message::Navigate(navigation))
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            )),
        text(label).size(typography::CAPTION),
        iced::widget::tooltip::Position::Bottom,
    )
    .into()
}

/// Press position relative to the surface.
#[derive(Debug, Default)]
pub struct SurfaceState {
    pressed_at: Option<Point>,
}

struct ImageSurface<'a> {
    image: Option<&'a ImageData>,
}

impl ImageSurface<'_> {
    /// Screen box of the fitted image, if one is loaded.
    fn image_rect(&self, size: iced::Size) -> Option<Rectangle> {
        let image = self.image?;
        let area = Bounds::new(
            spacing::XL,
            spacing::XL,
            (size.width - 2.0 * spacing::XL).max(0.0),
            (size.height - 2.0 * spacing::XL).max(0.0),
        );
        let fitted = area.fit(image.width as f32, image.height as f32);
        Some(Rectangle {
            x: fitted.left,
            y: fitted.top,
            width: fitted.width,
            height: fitted.height,
        })
    }

    fn release(&self, start: Point, end: Point, size: iced::Size) -> Message {
        let on_image = self
            .image_rect(size)
            .is_some_and(|rect| rect.contains(start));
        if start.distance(end) <= TAP_SLOP && !on_image {
            Message::Navigate(Navigation::Close)
        } else {
            Message::SwipeEnded(end.x)
        }
    }
}

impl canvas::Program<Message> for ImageSurface<'_> {
    type State = SurfaceState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let (press, release) = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                (cursor.position_in(bounds), None)
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                (None, Some(cursor.position_in(bounds)?))
            }
            iced::Event::Touch(touch::Event::FingerPressed { position, .. })
                if bounds.contains(*position) =>
            {
                (Some(Point::new(position.x - bounds.x, position.y - bounds.y)), None)
            }
            iced::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                (None, Some(Point::new(position.x - bounds.x, position.y - bounds.y)))
            }
            _ => (None, None),
        };

        if let Some(start) = press {
            state.pressed_at = Some(start);
            return Some(Action::publish(Message::SwipeStarted(start.x)).and_capture());
        }
        let end = release?;
        let start = state.pressed_at.take()?;
        Some(Action::publish(self.release(start, end, bounds.size())).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        if let (Some(image), Some(rect)) = (self.image, self.image_rect(bounds.size())) {
            frame.draw_image(rect, &image.handle);
        }
        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn image() -> ImageData {
        ImageData::from_rgba(2, 1, vec![0; 8])
    }

    #[test]
    fn image_is_fitted_inside_margins() {
        let image = image();
        let surface = ImageSurface { image: Some(&image) };

        let rect = surface.image_rect(Size::new(464.0, 464.0)).unwrap();

        assert_eq!(rect.width, 400.0);
        assert_eq!(rect.height, 200.0);
        assert_eq!(rect.x, spacing::XL);
    }

    #[test]
    fn tap_on_backdrop_closes() {
        let image = image();
        let surface = ImageSurface { image: Some(&image) };
        let corner = Point::new(2.0, 2.0);

        assert_eq!(
            surface.release(corner, corner, Size::new(464.0, 464.0)),
            Message::Navigate(Navigation::Close)
        );
    }

    #[test]
    fn tap_on_image_is_a_short_swipe() {
        let image = image();
        let surface = ImageSurface { image: Some(&image) };
        let center = Point::new(232.0, 232.0);

        assert_eq!(
            surface.release(center, center, Size::new(464.0, 464.0)),
            Message::SwipeEnded(232.0)
        );
    }

    #[test]
    fn drag_reports_swipe_end() {
        let surface = ImageSurface { image: None };
        let start = Point::new(300.0, 200.0);
        let end = Point::new(150.0, 210.0);

        assert_eq!(
            surface.release(start, end, Size::new(464.0, 464.0)),
            Message::SwipeEnded(150.0)
        );
    }
}
