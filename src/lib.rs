// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a photo gallery built with the Iced GUI framework.
//!
//! Images of a directory are shown as a grid or a list. Switching between
//! the two animates every item from its old box to its new one, and a
//! lightbox shows one image at full size with keyboard and swipe navigation.
//! The toolbar also shows a persisted visitor counter and a clock.
//!
//! The [`gallery`] module holds the toolkit-independent core (layout, view
//! transition, lightbox state, preferences); [`ui`] and [`app`] wire it into
//! an Iced application.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
