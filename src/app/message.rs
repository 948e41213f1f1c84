// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::{CatalogEntry, ImageData, Navigation};
use crate::ui::notifications;
use crate::ui::{gallery_canvas, lightbox, toolbar};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(toolbar::Message),
    Gallery(gallery_canvas::Message),
    Lightbox(lightbox::Message),
    Notification(notifications::NotificationMessage),
    /// Display refresh while a view transition runs.
    AnimationFrame(Instant),
    /// Once per second: clock and notification auto-dismiss.
    Tick(Instant),
    /// Arrow keys and Escape, only routed when no widget captured them.
    KeyPressed(Navigation),
    /// Result from the folder picker.
    FolderPicked(Option<PathBuf>),
    /// Result from async directory scanning.
    CatalogScanned {
        directory: PathBuf,
        result: Result<Vec<CatalogEntry>, Error>,
    },
    /// A thumbnail finished decoding. `generation` identifies the catalog it
    /// was requested for; results for an older catalog are dropped.
    ThumbnailLoaded {
        generation: u64,
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// A full-size lightbox image finished decoding.
    FullImageLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory to show on startup, overriding the configured one.
    pub directory: Option<PathBuf>,
    /// Optional data directory override (for the state file).
    /// Takes precedence over `ICED_GALLERY_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
