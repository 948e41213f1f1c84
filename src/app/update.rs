// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! [`UpdateContext`] borrows the parts of `App` a handler may touch, so the
//! handlers stay free functions that can be read (and tested) one message at
//! a time.

use super::persisted_state::PersistedState;
use super::{persistence, Message};
use crate::config::Config;
use crate::error::Error;
use crate::gallery::scanner::{self, CatalogEntry};
use crate::gallery::thumbnail::{self, ImageCache};
use crate::gallery::{
    FrameOutcome, GalleryItem, GalleryLayout, ImageData, LayoutHost, Lightbox, Navigation,
    Outcome, ViewTransition,
};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{gallery_canvas, lightbox, toolbar};
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a mut Config,
    pub state: &'a mut PersistedState,
    pub layout: &'a mut GalleryLayout,
    pub transition: &'a mut ViewTransition,
    pub items: &'a mut Vec<GalleryItem>,
    pub directory: &'a mut Option<PathBuf>,
    pub generation: &'a mut u64,
    pub layout_dirty: &'a mut bool,
    pub lightbox: &'a mut Lightbox,
    pub image_cache: &'a mut ImageCache,
    pub theme_mode: &'a mut ThemeMode,
    pub clock: &'a mut String,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Re-applies every item slot to the layout.
    fn sync_layout(&mut self) {
        self.layout
            .set_items(self.items.iter().map(GalleryItem::spec).collect());
        *self.layout_dirty = false;
    }
}

/// Handles toolbar messages.
pub fn handle_toolbar_message(
    ctx: &mut UpdateContext<'_>,
    message: toolbar::Message,
) -> Task<Message> {
    match message {
        toolbar::Message::ViewModeSelected(mode) => {
            match ctx.transition.request(mode, &mut *ctx.layout, &mut *ctx.state) {
                Outcome::Ignored => {}
                Outcome::Applied { scroll_offset } | Outcome::Started { scroll_offset } => {
                    tracing::debug!(%mode, scroll_offset, "view mode applied");
                }
            }
            Task::none()
        }
        toolbar::Message::OpenFolder => open_folder_dialog(ctx.directory.clone()),
        toolbar::Message::CycleTheme => {
            *ctx.theme_mode = ctx.theme_mode.cycled();
            ctx.config.general.theme_mode = *ctx.theme_mode;
            persistence::save_config(ctx.config, ctx.notifications);
            Task::none()
        }
    }
}

/// Handles gallery canvas messages.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_canvas::Message,
) -> Task<Message> {
    match message {
        gallery_canvas::Message::ViewportChanged(size) => {
            // Boxes recorded for a running transition are stale after a resize.
            ctx.transition.finish();
            if *ctx.layout_dirty {
                ctx.sync_layout();
            }
            ctx.layout.set_viewport(size.width, size.height);
            Task::none()
        }
        gallery_canvas::Message::Scrolled(delta) => {
            let offset = ctx.layout.scroll_offset() + delta;
            ctx.layout.set_scroll_offset(offset);
            Task::none()
        }
        gallery_canvas::Message::ItemClicked(index) => {
            if ctx.lightbox.open(index) {
                load_lightbox_images(ctx)
            } else {
                Task::none()
            }
        }
    }
}

/// Handles lightbox overlay messages.
pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    match message {
        lightbox::Message::Navigate(navigation) => navigate(ctx, navigation),
        lightbox::Message::SwipeStarted(x) => {
            ctx.lightbox.begin_swipe(x);
            Task::none()
        }
        lightbox::Message::SwipeEnded(x) => match ctx.lightbox.end_swipe(x) {
            Some(_) => load_lightbox_images(ctx),
            None => Task::none(),
        },
    }
}

/// Applies a lightbox navigation. Does nothing while the lightbox is closed.
pub fn navigate(ctx: &mut UpdateContext<'_>, navigation: Navigation) -> Task<Message> {
    if ctx.lightbox.navigate(navigation) {
        load_lightbox_images(ctx)
    } else {
        Task::none()
    }
}

/// Decodes the displayed image and its two neighbors unless already cached.
fn load_lightbox_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(current) = ctx.lightbox.current() else {
        return Task::none();
    };
    let len = ctx.items.len();
    if len == 0 {
        return Task::none();
    }

    let mut wanted = vec![current, (current + 1) % len, (current + len - 1) % len];
    wanted.dedup();

    let tasks: Vec<Task<Message>> = wanted
        .into_iter()
        .filter_map(|index| ctx.items.get(index))
        .map(|item| item.entry.path.clone())
        .filter(|path| !ctx.image_cache.contains(path))
        .map(|path| {
            Task::perform(thumbnail::decode_full(path.clone()), move |result| {
                Message::FullImageLoaded {
                    path: path.clone(),
                    result,
                }
            })
        })
        .collect();

    Task::batch(tasks)
}

/// Advances the running view transition.
pub fn handle_animation_frame(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if ctx.transition.on_frame(now) == FrameOutcome::Completed && *ctx.layout_dirty {
        ctx.sync_layout();
    }
    Task::none()
}

/// Opens the native folder picker, starting in the current directory.
fn open_folder_dialog(current: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new();
            if let Some(dir) = current.filter(|dir| dir.exists()) {
                dialog = dialog.set_directory(&dir);
            }
            dialog.pick_folder().await.map(|h| h.path().to_path_buf())
        },
        Message::FolderPicked,
    )
}

/// Scans `directory` on the blocking pool.
pub fn scan_directory(config: &Config, directory: PathBuf) -> Task<Message> {
    let sort_order = config.gallery.sort_order.unwrap_or_default();
    Task::perform(
        async move {
            let target = directory.clone();
            let result = tokio::task::spawn_blocking(move || {
                scanner::scan_directory(&target, sort_order)
            })
            .await
            .map_err(|e| Error::Io(e.to_string()))
            .and_then(|result| result);
            (directory, result)
        },
        |(directory, result)| Message::CatalogScanned { directory, result },
    )
}

/// Replaces the catalog and starts decoding its thumbnails.
pub fn handle_catalog_scanned(
    ctx: &mut UpdateContext<'_>,
    directory: PathBuf,
    result: Result<Vec<CatalogEntry>, Error>,
) -> Task<Message> {
    let entries = match result {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(directory = %directory.display(), %error, "directory scan failed");
            ctx.notifications
                .push(Notification::error("notification-scan-error"));
            return Task::none();
        }
    };

    ctx.transition.finish();
    *ctx.items = entries.into_iter().map(GalleryItem::new).collect();
    ctx.sync_layout();
    ctx.layout.set_scroll_offset(0.0);
    ctx.lightbox.reset(ctx.items.len());
    ctx.image_cache.clear();
    *ctx.generation += 1;

    if ctx.config.gallery.directory.as_ref() != Some(&directory) {
        ctx.config.gallery.directory = Some(directory.clone());
        persistence::save_config(ctx.config, ctx.notifications);
    }
    *ctx.directory = Some(directory);

    let generation = *ctx.generation;
    let max_edge = ctx.config.gallery.thumbnail_max_edge();
    Task::batch(ctx.items.iter().enumerate().map(|(index, item)| {
        Task::perform(
            thumbnail::decode_thumbnail(item.entry.path.clone(), max_edge),
            move |result| Message::ThumbnailLoaded {
                generation,
                index,
                result,
            },
        )
    }))
}

/// Stores a decoded thumbnail, or drops the image box of an item whose
/// thumbnail failed to decode.
pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    index: usize,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    if generation != *ctx.generation {
        return Task::none();
    }
    let Some(item) = ctx.items.get_mut(index) else {
        return Task::none();
    };

    match result {
        Ok(image) => item.thumbnail = Some(image),
        Err(error) => {
            tracing::warn!(path = %item.entry.path.display(), %error, "thumbnail decode failed");
            item.thumbnail = None;
            item.failed = true;
            let spec = item.spec();
            if ctx.transition.is_animating() {
                *ctx.layout_dirty = true;
            } else {
                ctx.layout.set_item(index, spec);
            }
        }
    }
    Task::none()
}

/// Caches a decoded lightbox image. Failures are reported only for the
/// image on screen; prefetched neighbors fail silently.
pub fn handle_full_image_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => ctx.image_cache.insert(path, image),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "full image decode failed");
            let on_screen = ctx
                .lightbox
                .current()
                .and_then(|index| ctx.items.get(index))
                .is_some_and(|item| item.entry.path == path);
            if on_screen {
                ctx.notifications.push(Notification::error(error.i18n_key()));
            }
        }
    }
    Task::none()
}
