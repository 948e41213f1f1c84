// SPDX-License-Identifier: MPL-2.0
//! Canvas that renders the gallery items.
//!
//! Items are drawn from the boxes computed by [`GalleryLayout`], each one
//! displaced by the transform the running [`ViewTransition`] gives it, so a
//! mode switch animates without any widget being rebuilt. The canvas also
//! reports its own size, wheel scrolling and item clicks.

use crate::gallery::geometry::Bounds;
use crate::gallery::{GalleryItem, GalleryLayout, LayoutHost, ViewTransition};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::widget::Action;
use iced::{mouse, touch, Color, Point, Rectangle, Renderer, Size, Theme};

/// Pointer travel under which a press and release count as a click.
const CLICK_SLOP: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    ViewportChanged(Size),
    /// Positive values scroll toward the end of the gallery.
    Scrolled(f32),
    ItemClicked(usize),
}

/// Press position, relative to the canvas.
#[derive(Debug, Default)]
pub struct State {
    pressed_at: Option<Point>,
}

pub struct GalleryCanvas<'a> {
    pub layout: &'a GalleryLayout,
    pub items: &'a [GalleryItem],
    pub transition: &'a ViewTransition,
    pub colors: ColorScheme,
    /// Caption drawn in place of an image that failed to decode.
    pub failed_label: String,
}

impl GalleryCanvas<'_> {
    fn to_screen(&self, bounds: Bounds) -> Rectangle {
        Rectangle {
            x: bounds.left,
            y: bounds.top - self.layout.scroll_offset(),
            width: bounds.width,
            height: bounds.height,
        }
    }

    fn click(&self, start: Point, end: Point) -> Option<Message> {
        if start.distance(end) > CLICK_SLOP {
            return None;
        }
        self.layout
            .hit_test(end.x, end.y + self.layout.scroll_offset())
            .map(Message::ItemClicked)
    }

    fn draw_item(&self, frame: &mut Frame, index: usize, viewport: Rectangle) {
        let Some(boxes) = self.layout.item(index) else {
            return;
        };
        let visual = self.transition.visual(index);
        let target = boxes.target();
        let outer = self.to_screen(visual.transform.apply_within(boxes.outer, target));

        if outer.intersection(&viewport).is_none() {
            return;
        }

        frame.fill(
            &Path::rounded_rectangle(outer.position(), outer.size(), radius::SM.into()),
            self.colors.surface_secondary,
        );

        let item = self.items.get(index);
        if let Some(image_box) = boxes.image {
            let image_box = visual.transform.apply(image_box);
            match item.and_then(|item| item.thumbnail.as_ref()) {
                Some(thumbnail) => {
                    let fitted =
                        image_box.fit(thumbnail.width as f32, thumbnail.height as f32);
                    frame.draw_image(self.to_screen(fitted), &thumbnail.handle);
                }
                None => {
                    let placeholder = self.to_screen(image_box);
                    frame.fill_rectangle(
                        placeholder.position(),
                        placeholder.size(),
                        self.colors.placeholder,
                    );
                }
            }
        }

        if let Some(caption_box) = boxes.caption {
            let caption_box = self.to_screen(visual.transform.apply_within(caption_box, target));
            let content = match item {
                Some(item) if item.failed => self.failed_label.clone(),
                Some(item) => item.entry.caption.clone(),
                None => String::new(),
            };
            let color = Color {
                a: self.colors.text_primary.a * visual.caption_opacity,
                ..self.colors.text_primary
            };
            frame.fill_text(canvas::Text {
                content,
                position: Point::new(
                    caption_box.x + spacing::XXS,
                    caption_box.y + (caption_box.height - typography::CAPTION) / 2.0,
                ),
                max_width: (caption_box.width - 2.0 * spacing::XXS).max(0.0),
                color,
                size: typography::CAPTION.into(),
                ..canvas::Text::default()
            });
        }
    }
}

fn relative(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

impl canvas::Program<Message> for GalleryCanvas<'_> {
    type State = State;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let size = bounds.size();
        if (size.width - self.layout.viewport_width()).abs() > 0.5
            || (size.height - self.layout.viewport_height()).abs() > 0.5
        {
            return Some(Action::publish(Message::ViewportChanged(size)));
        }

        match event {
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds)?;
                let dy = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => -y * sizing::WHEEL_LINE,
                    mouse::ScrollDelta::Pixels { y, .. } => -y,
                };
                Some(Action::publish(Message::Scrolled(dy)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                state.pressed_at = Some(cursor.position_in(bounds)?);
                Some(Action::capture())
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let start = state.pressed_at.take()?;
                let end = cursor.position_in(bounds)?;
                self.click(start, end)
                    .map(|message| Action::publish(message).and_capture())
            }
            iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                state.pressed_at = Some(relative(*position, bounds));
                Some(Action::capture())
            }
            iced::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                let start = state.pressed_at.take()?;
                let end = relative(*position, bounds);
                self.click(start, end)
                    .map(|message| Action::publish(message).and_capture())
            }
            _ => None,
        }
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
        let viewport = Rectangle::with_size(bounds.size());

        for index in 0..self.layout.len() {
            self.draw_item(&mut frame, index, viewport);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        cursor
            .position_in(bounds)
            .and_then(|p| self.layout.hit_test(p.x, p.y + self.layout.scroll_offset()))
            .map_or(mouse::Interaction::default(), |_| mouse::Interaction::Pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{CatalogEntry, ItemSpec, LayoutMetrics, TransitionTiming, ViewMode};
    use std::path::PathBuf;

    fn fixture() -> (GalleryLayout, Vec<GalleryItem>, ViewTransition) {
        let mut layout = GalleryLayout::new(LayoutMetrics::default(), ViewMode::Grid);
        layout.set_viewport(800.0, 200.0);
        layout.set_items(vec![ItemSpec::PHOTO; 12]);
        let items = (0..12)
            .map(|i| GalleryItem::new(CatalogEntry::new(PathBuf::from(format!("{i}.png")))))
            .collect();
        (layout, items, ViewTransition::new(TransitionTiming::default()))
    }

    #[test]
    fn click_hits_item_under_pointer() {
        let (layout, items, transition) = fixture();
        let canvas = GalleryCanvas {
            layout: &layout,
            items: &items,
            transition: &transition,
            colors: ColorScheme::dark(),
            failed_label: String::new(),
        };
        let first = layout.item(0).unwrap().outer;
        let inside = Point::new(first.left + 5.0, first.top + 5.0);

        assert_eq!(canvas.click(inside, inside), Some(Message::ItemClicked(0)));
    }

    #[test]
    fn drag_is_not_a_click() {
        let (layout, items, transition) = fixture();
        let canvas = GalleryCanvas {
            layout: &layout,
            items: &items,
            transition: &transition,
            colors: ColorScheme::dark(),
            failed_label: String::new(),
        };
        let first = layout.item(0).unwrap().outer;
        let start = Point::new(first.left + 5.0, first.top + 5.0);
        let end = Point::new(start.x + 40.0, start.y);

        assert_eq!(canvas.click(start, end), None);
    }

    #[test]
    fn click_accounts_for_scroll() {
        let (mut layout, items, transition) = fixture();
        layout.set_scroll_offset(layout.max_scroll());
        let scroll = layout.scroll_offset();
        assert!(scroll > 0.0);

        let last = layout.item(11).unwrap().outer;
        let canvas = GalleryCanvas {
            layout: &layout,
            items: &items,
            transition: &transition,
            colors: ColorScheme::light(),
            failed_label: String::new(),
        };
        let on_screen = Point::new(last.left + 5.0, last.top - scroll + 5.0);

        assert_eq!(canvas.click(on_screen, on_screen), Some(Message::ItemClicked(11)));
        assert_eq!(canvas.to_screen(last).y, last.top - scroll);
    }
}
