// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! `view` takes a borrowed context and returns an element producing its own
//! message type, which the application maps into its top-level message.
//!
//! - [`toolbar`] - view mode selector, open folder, theme, visitor count, clock
//! - [`gallery_canvas`] - animated grid/list rendering of the items
//! - [`lightbox`] - full-size image overlay with swipe navigation
//! - [`notifications`] - toast notifications
//! - [`styles`], [`design_tokens`], [`theming`] - look and feel

pub mod design_tokens;
pub mod gallery_canvas;
pub mod lightbox;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod toolbar;
