// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard navigation for the lightbox, the once-per-second tick that drives
//! the clock and toast expiry, and display frames while a view transition
//! runs.

use super::Message;
use crate::gallery::Navigation;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes Escape and the horizontal arrow keys, unless a widget captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                key_navigation(&key).map(Message::KeyPressed)
            }
            _ => None,
        }
    })
}

fn key_navigation(key: &Key) -> Option<Navigation> {
    match key {
        Key::Named(Named::Escape) => Some(Navigation::Close),
        Key::Named(Named::ArrowLeft) => Some(Navigation::Previous),
        Key::Named(Named::ArrowRight) => Some(Navigation::Next),
        _ => None,
    }
}

/// Clock refresh and notification auto-dismiss.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(Duration::from_secs(1)).map(Message::Tick)
}

/// Display frames, only while a view transition is running.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::AnimationFrame)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys_map_to_lightbox_commands() {
        assert_eq!(
            key_navigation(&Key::Named(Named::Escape)),
            Some(Navigation::Close)
        );
        assert_eq!(
            key_navigation(&Key::Named(Named::ArrowLeft)),
            Some(Navigation::Previous)
        );
        assert_eq!(
            key_navigation(&Key::Named(Named::ArrowRight)),
            Some(Navigation::Next)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(key_navigation(&Key::Named(Named::Enter)), None);
        assert_eq!(key_navigation(&Key::Character("a".into())), None);
    }
}
