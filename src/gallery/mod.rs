// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: catalog, layouts, the animated view switch, the lightbox
//! and the visitor counter.
//!
//! Nothing in this module depends on a window. The `app` and `ui` modules
//! drive it from iced messages and render its state.

pub mod clock;
pub mod easing;
pub mod geometry;
pub mod layout;
pub mod lightbox;
pub mod preferences;
pub mod scanner;
pub mod thumbnail;
pub mod transition;
pub mod view_mode;
pub mod visitors;

pub use layout::{GalleryLayout, ItemSpec, LayoutMetrics};
pub use lightbox::{Lightbox, Navigation};
pub use preferences::{MemoryStore, PreferenceStore};
pub use scanner::CatalogEntry;
pub use thumbnail::ImageData;
pub use transition::{FrameOutcome, LayoutHost, Outcome, TransitionTiming, ViewTransition};
pub use view_mode::ViewMode;

/// One photo of the gallery.
#[derive(Debug, Clone)]
pub struct GalleryItem {
    pub entry: CatalogEntry,
    /// Decoded thumbnail; `None` while loading or when decoding failed.
    pub thumbnail: Option<ImageData>,
    pub failed: bool,
}

impl GalleryItem {
    #[must_use]
    pub fn new(entry: CatalogEntry) -> Self {
        Self {
            entry,
            thumbnail: None,
            failed: false,
        }
    }

    /// Layout slot of this item. Items whose image failed to decode have no
    /// image box.
    #[must_use]
    pub fn spec(&self) -> ItemSpec {
        ItemSpec {
            has_image: !self.failed,
            has_caption: !self.entry.caption.is_empty(),
        }
    }
}
