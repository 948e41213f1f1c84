// SPDX-License-Identifier: MPL-2.0
//! Grid and list layout of the gallery items.
//!
//! `GalleryLayout` plays the role of the gallery container: it owns the
//! ordered item slots, the active [`ViewMode`], the viewport size and the
//! scroll offset, and recomputes every item's boxes synchronously whenever
//! one of them changes. The renderer draws from these boxes, and the view
//! transition measures them before and after a mode switch.

use super::geometry::Bounds;
use super::transition::LayoutHost;
use super::view_mode::ViewMode;

/// Sizes used to place items, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub grid_cell_size: f32,
    pub grid_gap: f32,
    pub list_row_height: f32,
    pub list_thumbnail_width: f32,
    pub list_inset: f32,
    pub caption_height: f32,
    pub padding: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        crate::config::GalleryConfig::default().layout_metrics()
    }
}

/// Which sub-elements an item slot has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    pub has_image: bool,
    pub has_caption: bool,
}

impl ItemSpec {
    pub const PHOTO: ItemSpec = ItemSpec {
        has_image: true,
        has_caption: true,
    };
}

/// Measured boxes of one item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemBoxes {
    pub outer: Bounds,
    pub image: Option<Bounds>,
    pub caption: Option<Bounds>,
}

impl ItemBoxes {
    /// The box a view transition records: the image when present, the item otherwise.
    #[must_use]
    pub fn target(&self) -> Bounds {
        self.image.unwrap_or(self.outer)
    }
}

#[derive(Debug, Clone)]
pub struct GalleryLayout {
    metrics: LayoutMetrics,
    mode: ViewMode,
    viewport_width: f32,
    viewport_height: f32,
    scroll_offset: f32,
    specs: Vec<ItemSpec>,
    boxes: Vec<ItemBoxes>,
    content_height: f32,
}

impl GalleryLayout {
    #[must_use]
    pub fn new(metrics: LayoutMetrics, mode: ViewMode) -> Self {
        let mut layout = Self {
            metrics,
            mode,
            viewport_width: 0.0,
            viewport_height: 0.0,
            scroll_offset: 0.0,
            specs: Vec::new(),
            boxes: Vec::new(),
            content_height: 0.0,
        };
        layout.relayout();
        layout
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    /// Replaces every item slot.
    pub fn set_items(&mut self, specs: Vec<ItemSpec>) {
        self.specs = specs;
        self.relayout();
    }

    /// Updates a single slot, e.g. when its image failed to decode.
    pub fn set_item(&mut self, index: usize, spec: ItemSpec) {
        if let Some(slot) = self.specs.get_mut(index) {
            if *slot != spec {
                *slot = spec;
                self.relayout();
            }
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport_width = width.max(0.0);
        self.viewport_height = height.max(0.0);
        self.relayout();
    }

    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    #[must_use]
    pub fn boxes(&self) -> &[ItemBoxes] {
        &self.boxes
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&ItemBoxes> {
        self.boxes.get(index)
    }

    /// Total height of the laid-out content, padding included.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Index of the item whose outer box contains the content-space point.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        self.boxes.iter().position(|item| item.outer.contains(x, y))
    }

    /// Number of grid columns for the current viewport width.
    #[must_use]
    pub fn grid_columns(&self) -> usize {
        let m = &self.metrics;
        let usable = self.viewport_width - 2.0 * m.padding + m.grid_gap;
        let columns = (usable / (m.grid_cell_size + m.grid_gap)).floor();
        if columns.is_finite() && columns >= 1.0 {
            columns as usize
        } else {
            1
        }
    }

    fn relayout(&mut self) {
        self.boxes = match self.mode {
            ViewMode::Grid => self.layout_grid(),
            ViewMode::List => self.layout_list(),
        };
        let bottom = self
            .boxes
            .iter()
            .map(|item| item.outer.bottom())
            .fold(0.0_f32, f32::max);
        self.content_height = if self.boxes.is_empty() {
            0.0
        } else {
            bottom + self.metrics.padding
        };
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    fn layout_grid(&self) -> Vec<ItemBoxes> {
        let m = self.metrics;
        let columns = self.grid_columns();
        let cell_height = m.grid_cell_size + m.caption_height;

        self.specs
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let column = index % columns;
                let row = index / columns;
                let left = m.padding + column as f32 * (m.grid_cell_size + m.grid_gap);
                let top = m.padding + row as f32 * (cell_height + m.grid_gap);

                let outer = Bounds::new(left, top, m.grid_cell_size, cell_height);
                let image = spec
                    .has_image
                    .then(|| Bounds::new(left, top, m.grid_cell_size, m.grid_cell_size));
                let caption = spec.has_caption.then(|| {
                    Bounds::new(
                        left,
                        top + m.grid_cell_size,
                        m.grid_cell_size,
                        m.caption_height,
                    )
                });

                ItemBoxes {
                    outer,
                    image,
                    caption,
                }
            })
            .collect()
    }

    fn layout_list(&self) -> Vec<ItemBoxes> {
        let m = self.metrics;
        let row_width = (self.viewport_width - 2.0 * m.padding).max(m.list_thumbnail_width);
        let thumb_height = m.list_row_height - 2.0 * m.list_inset;

        self.specs
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let left = m.padding;
                let top = m.padding + index as f32 * (m.list_row_height + m.grid_gap);

                let outer = Bounds::new(left, top, row_width, m.list_row_height);
                let image = spec.has_image.then(|| {
                    Bounds::new(
                        left + m.list_inset,
                        top + m.list_inset,
                        m.list_thumbnail_width,
                        thumb_height,
                    )
                });
                let caption = spec.has_caption.then(|| {
                    let text_left = if spec.has_image {
                        left + 2.0 * m.list_inset + m.list_thumbnail_width
                    } else {
                        left + m.list_inset
                    };
                    Bounds::new(
                        text_left,
                        top + (m.list_row_height - m.caption_height) / 2.0,
                        (outer.right() - m.list_inset - text_left).max(0.0),
                        m.caption_height,
                    )
                });

                ItemBoxes {
                    outer,
                    image,
                    caption,
                }
            })
            .collect()
    }
}

impl LayoutHost for GalleryLayout {
    fn item_count(&self) -> usize {
        self.boxes.len()
    }

    fn measure(&self) -> Vec<Bounds> {
        self.boxes.iter().map(ItemBoxes::target).collect()
    }

    fn apply_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
        self.relayout();
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll());
    }
}
