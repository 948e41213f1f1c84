// SPDX-License-Identifier: MPL-2.0
//! Directory scanner that builds the gallery catalog.
//!
//! Scans one directory (non-recursively) for supported image formats and
//! sorts the result according to the configured [`SortOrder`].

use crate::config::SortOrder;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Extensions recognized as gallery images, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 9] =
    ["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif", "ico"];

/// One image of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub path: PathBuf,
    /// File stem, shown as the item caption.
    pub caption: String,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let caption = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, caption }
    }
}

/// Returns the sorted catalog of `directory`.
///
/// # Errors
///
/// Returns [`Error::Io`] if `directory` is not a readable directory.
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Vec<CatalogEntry>> {
    if !directory.is_dir() {
        return Err(Error::Io(format!(
            "{} is not a directory",
            directory.display()
        )));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }

    sort_files(&mut files, sort_order);
    tracing::info!(
        directory = %directory.display(),
        images = files.len(),
        "scanned gallery directory"
    );

    Ok(files.into_iter().map(CatalogEntry::new).collect())
}

/// Checks if a file has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

fn sort_files(files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => files.sort_by(|a, b| a.file_name().cmp(&b.file_name())),
        SortOrder::ModifiedDate => {
            files.sort_by_cached_key(|path| file_time(path, |m| m.modified()));
        }
        SortOrder::CreatedDate => {
            files.sort_by_cached_key(|path| file_time(path, |m| m.created()));
        }
    }
}

fn file_time(
    path: &Path,
    read: impl Fn(&std::fs::Metadata) -> std::io::Result<SystemTime>,
) -> SystemTime {
    path.metadata()
        .and_then(|metadata| read(&metadata))
        .unwrap_or(SystemTime::UNIX_EPOCH)
}
