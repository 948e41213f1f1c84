// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Grid cells, list rows, captions and padding
//! - **Thumbnails**: Decoding size and lightbox cache
//! - **Animation**: View transition timing

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default edge length of a square grid cell (logical pixels).
pub const DEFAULT_GRID_CELL_SIZE: f32 = 200.0;

/// Minimum grid cell size.
pub const MIN_GRID_CELL_SIZE: f32 = 64.0;

/// Maximum grid cell size.
pub const MAX_GRID_CELL_SIZE: f32 = 512.0;

/// Default gap between grid cells.
pub const DEFAULT_GRID_GAP: f32 = 12.0;

/// Maximum gap between grid cells.
pub const MAX_GRID_GAP: f32 = 64.0;

/// Default height of a row in list mode.
pub const DEFAULT_LIST_ROW_HEIGHT: f32 = 96.0;

/// Minimum list row height.
pub const MIN_LIST_ROW_HEIGHT: f32 = 32.0;

/// Maximum list row height.
pub const MAX_LIST_ROW_HEIGHT: f32 = 320.0;

/// Default width of the thumbnail shown at the start of a list row.
pub const DEFAULT_LIST_THUMBNAIL_WIDTH: f32 = 128.0;

/// Inset between a list row edge and its thumbnail.
pub const LIST_INSET: f32 = 8.0;

/// Default height of the caption strip under a grid image.
pub const DEFAULT_CAPTION_HEIGHT: f32 = 24.0;

/// Default padding around the gallery content.
pub const DEFAULT_PADDING: f32 = 16.0;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Longest edge of decoded thumbnails (pixels).
pub const DEFAULT_THUMBNAIL_MAX_EDGE: u32 = 384;

/// Minimum thumbnail edge.
pub const MIN_THUMBNAIL_MAX_EDGE: u32 = 64;

/// Maximum thumbnail edge.
pub const MAX_THUMBNAIL_MAX_EDGE: u32 = 1024;

/// Number of full-size images kept decoded for the lightbox.
pub const DEFAULT_LIGHTBOX_CACHE_SIZE: usize = 8;

/// Maximum lightbox cache size.
pub const MAX_LIGHTBOX_CACHE_SIZE: usize = 64;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of each item's transform transition (milliseconds).
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 500;

/// Per-index start offset of the transition cascade (milliseconds).
pub const DEFAULT_STAGGER_MS: u64 = 30;

/// Extra time after the last item settles before controls come back.
pub const DEFAULT_SETTLE_BUFFER_MS: u64 = 100;

/// Delay of the caption fade relative to its item's transform transition.
pub const DEFAULT_CAPTION_OFFSET_MS: u64 = 150;

/// Duration of the caption fade.
pub const DEFAULT_CAPTION_FADE_MS: u64 = 300;

/// Upper bound accepted for any animation timing value.
pub const MAX_ANIMATION_MS: u64 = 5_000;

/// Control points of the transform easing curve, CSS `cubic-bezier()` order.
pub const TRANSITION_EASING: (f32, f32, f32, f32) = (0.25, 0.8, 0.25, 1.0);

/// Minimum horizontal travel for a lightbox swipe (logical pixels).
pub const SWIPE_THRESHOLD: f32 = 50.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_GRID_CELL_SIZE > 0.0);
    assert!(DEFAULT_GRID_CELL_SIZE >= MIN_GRID_CELL_SIZE);
    assert!(DEFAULT_GRID_CELL_SIZE <= MAX_GRID_CELL_SIZE);
    assert!(DEFAULT_GRID_GAP <= MAX_GRID_GAP);

    assert!(DEFAULT_LIST_ROW_HEIGHT >= MIN_LIST_ROW_HEIGHT);
    assert!(DEFAULT_LIST_ROW_HEIGHT <= MAX_LIST_ROW_HEIGHT);
    assert!(MIN_LIST_ROW_HEIGHT > 2.0 * LIST_INSET);

    assert!(DEFAULT_THUMBNAIL_MAX_EDGE >= MIN_THUMBNAIL_MAX_EDGE);
    assert!(DEFAULT_THUMBNAIL_MAX_EDGE <= MAX_THUMBNAIL_MAX_EDGE);
    assert!(DEFAULT_LIGHTBOX_CACHE_SIZE > 0);
    assert!(DEFAULT_LIGHTBOX_CACHE_SIZE <= MAX_LIGHTBOX_CACHE_SIZE);

    // Caption fade must finish inside its item's transform transition.
    assert!(DEFAULT_CAPTION_OFFSET_MS + DEFAULT_CAPTION_FADE_MS <= DEFAULT_TRANSITION_DURATION_MS);
    assert!(DEFAULT_TRANSITION_DURATION_MS <= MAX_ANIMATION_MS);
    assert!(SWIPE_THRESHOLD > 0.0);
};
