// SPDX-License-Identifier: MPL-2.0
//! Image decoding for thumbnails and the lightbox.
//!
//! Decoding runs on tokio's blocking pool so the UI thread never waits on
//! disk or codec work. Full-size lightbox images are kept in a small LRU
//! cache keyed by path.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// A decoded image ready for rendering.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Bytes held by the decoded RGBA pixels.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Decodes the image at `path` at full resolution.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// it cannot be decoded.
pub fn load_full(path: &Path) -> Result<ImageData> {
    let bytes = std::fs::read(path)?;
    let decoded = image_rs::load_from_memory(&bytes)?;
    let (width, height) = decoded.dimensions();
    Ok(ImageData::from_rgba(width, height, decoded.to_rgba8().into_vec()))
}

/// Decodes the image at `path` and shrinks it so that neither edge exceeds
/// `max_edge`. Images already small enough are left untouched.
///
/// # Errors
///
/// Same as [`load_full`].
pub fn load_thumbnail(path: &Path, max_edge: u32) -> Result<ImageData> {
    let bytes = std::fs::read(path)?;
    let decoded = image_rs::load_from_memory(&bytes)?;
    let (width, height) = decoded.dimensions();
    let decoded = if width > max_edge || height > max_edge {
        decoded.thumbnail(max_edge, max_edge)
    } else {
        decoded
    };
    let (width, height) = decoded.dimensions();
    Ok(ImageData::from_rgba(width, height, decoded.to_rgba8().into_vec()))
}

/// Runs [`load_thumbnail`] on the blocking pool.
pub async fn decode_thumbnail(path: PathBuf, max_edge: u32) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_thumbnail(&path, max_edge))
        .await
        .map_err(|e| Error::Image(e.to_string()))?
}

/// Runs [`load_full`] on the blocking pool.
pub async fn decode_full(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_full(&path))
        .await
        .map_err(|e| Error::Image(e.to_string()))?
}

/// LRU cache of full-size images shown in the lightbox.
pub struct ImageCache {
    cache: LruCache<PathBuf, ImageData>,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .finish()
    }
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    pub fn insert(&mut self, path: PathBuf, image: ImageData) {
        if let Some((evicted, _)) = self.cache.push(path, image) {
            tracing::trace!(path = %evicted.display(), "evicted lightbox image");
        }
    }

    /// Returns the cached image and marks it as recently used.
    pub fn get(&mut self, path: &Path) -> Option<&ImageData> {
        self.cache.get(path)
    }

    /// Returns the cached image without touching its recency.
    #[must_use]
    pub fn peek(&self, path: &Path) -> Option<&ImageData> {
        self.cache.peek(path)
    }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
