// SPDX-License-Identifier: MPL-2.0
//! Button styles for the toolbar and lightbox.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn bordered(background: Color, text_color: Color, border_color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn disabled_style(is_light: bool) -> button::Style {
    let background = if is_light {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };
    bordered(background, palette::GRAY_400, palette::GRAY_400)
}

/// Active segment of a toggle group, such as the current view mode.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            shadow: shadow::SM,
            ..bordered(palette::PRIMARY_500, WHITE, palette::PRIMARY_600)
        },
        button::Status::Hovered => button::Style {
            shadow: shadow::MD,
            ..bordered(palette::PRIMARY_400, WHITE, palette::PRIMARY_500)
        },
        button::Status::Disabled => button::Style {
            // Keeps the active segment recognizable while a transition runs.
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            })),
            ..disabled_style(is_light)
        },
    }
}

/// Inactive segment of a toggle group and plain toolbar actions.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            bordered(bg_color, text_color, palette::GRAY_400)
        }
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                shadow: shadow::SM,
                ..bordered(hover_bg, text_color, palette::PRIMARY_500)
            }
        }
        button::Status::Disabled => disabled_style(is_light),
    }
}

/// Translucent round button drawn over the lightbox image.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_button_uses_brand_colors() {
        let style = selected(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn disabled_segments_are_muted() {
        for style in [
            selected(&Theme::Light, button::Status::Disabled),
            unselected(&Theme::Light, button::Status::Disabled),
        ] {
            assert_eq!(style.text_color, palette::GRAY_400);
        }
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let style_fn = overlay(WHITE, 0.5, 0.8);

        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }
}
