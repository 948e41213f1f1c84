// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the
//! lightbox and the toolbar.
//!
//! The `App` struct wires together the domains (layout, view transition,
//! lightbox, localization, persisted preferences) and translates messages
//! into side effects like directory scans, image decoding or config writes.

mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::gallery::thumbnail::ImageCache;
use crate::gallery::{clock, visitors, GalleryItem, GalleryLayout, Lightbox, ViewTransition};
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use fluent_bundle::FluentValue;
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::PersistedState;
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// View mode and visitor count, written through on change.
    state: PersistedState,
    layout: GalleryLayout,
    transition: ViewTransition,
    items: Vec<GalleryItem>,
    /// Directory the current catalog was scanned from.
    directory: Option<PathBuf>,
    /// Bumped on every new catalog so stale thumbnail results are dropped.
    generation: u64,
    /// Item slots changed while a transition was running; re-applied once it
    /// completes.
    layout_dirty: bool,
    lightbox: Lightbox,
    image_cache: ImageCache,
    theme_mode: ThemeMode,
    visitor_count: u64,
    clock: String,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.transition.mode())
            .field("items", &self.items.len())
            .field("directory", &self.directory)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and persisted state, records the visit and starts
    /// scanning the startup directory, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let (state, state_warning) = PersistedState::load();

        let mut app = Self::from_parts(i18n, config, state);

        // Show warnings for config/state loading issues
        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = match flags
            .directory
            .or_else(|| app.config.gallery.directory.clone())
        {
            Some(directory) => update::scan_directory(&app.config, directory),
            None => Task::none(),
        };

        (app, task)
    }

    /// Builds the application from already loaded parts.
    ///
    /// Restores the persisted view mode without animation and counts this
    /// launch as a visit.
    fn from_parts(i18n: I18n, config: Config, mut state: PersistedState) -> Self {
        let mut layout = GalleryLayout::new(
            config.gallery.layout_metrics(),
            crate::gallery::ViewMode::default(),
        );
        let mut transition = ViewTransition::new(config.animation.timing());
        let mode = transition.restore(&state, &mut layout);
        let visitor_count = visitors::register_visit(&mut state);
        tracing::info!(%mode, visitor_count, "gallery started");

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            image_cache: ImageCache::new(config.gallery.lightbox_cache_size()),
            config,
            state,
            layout,
            transition,
            items: Vec::new(),
            directory: None,
            generation: 0,
            layout_dirty: false,
            lightbox: Lightbox::new(0),
            visitor_count,
            clock: clock::now_label(),
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        let name = self
            .directory
            .as_ref()
            .and_then(|dir| dir.file_name())
            .map(|name| name.to_string_lossy().into_owned());

        match name {
            Some(directory) => self.i18n.tr_with_args(
                "window-title-directory",
                &[("directory", FluentValue::from(directory))],
            ),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(),
            subscription::create_animation_subscription(self.transition.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &mut self.config,
            state: &mut self.state,
            layout: &mut self.layout,
            transition: &mut self.transition,
            items: &mut self.items,
            directory: &mut self.directory,
            generation: &mut self.generation,
            layout_dirty: &mut self.layout_dirty,
            lightbox: &mut self.lightbox,
            image_cache: &mut self.image_cache,
            theme_mode: &mut self.theme_mode,
            clock: &mut self.clock,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Toolbar(toolbar_message) => {
                update::handle_toolbar_message(&mut ctx, toolbar_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(&mut ctx, lightbox_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::AnimationFrame(now) => update::handle_animation_frame(&mut ctx, now),
            Message::Tick(now) => {
                *ctx.clock = clock::now_label();
                ctx.notifications.tick(now);
                Task::none()
            }
            Message::KeyPressed(navigation) => update::navigate(&mut ctx, navigation),
            Message::FolderPicked(directory) => match directory {
                Some(directory) => update::scan_directory(ctx.config, directory),
                // User cancelled the dialog
                None => Task::none(),
            },
            Message::CatalogScanned { directory, result } => {
                update::handle_catalog_scanned(&mut ctx, directory, result)
            }
            Message::ThumbnailLoaded {
                generation,
                index,
                result,
            } => update::handle_thumbnail_loaded(&mut ctx, generation, index, result),
            Message::FullImageLoaded { path, result } => {
                update::handle_full_image_loaded(&mut ctx, path, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            layout: &self.layout,
            transition: &self.transition,
            items: &self.items,
            lightbox: &self.lightbox,
            image_cache: &self.image_cache,
            theme_mode: self.theme_mode,
            visitor_count: self.visitor_count,
            clock: &self.clock,
            notifications: &self.notifications,
        })
    }
}
