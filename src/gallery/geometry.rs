// SPDX-License-Identifier: MPL-2.0
//! Bounding boxes and the inverse transforms used by view transitions.

/// Axis-aligned box in logical pixels, relative to the gallery content origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// The same box moved by `dx`, `dy`.
    #[must_use]
    pub fn translated(&self, dx: f32, dy: f32) -> Bounds {
        Bounds::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Returns true if the point lies inside the box (right/bottom edges excluded).
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }

    /// Scales a `width` x `height` picture to fit inside this box, centered.
    #[must_use]
    pub fn fit(&self, width: f32, height: f32) -> Bounds {
        if width <= 0.0 || height <= 0.0 {
            return *self;
        }
        let scale = (self.width / width).min(self.height / height);
        let fitted_width = width * scale;
        let fitted_height = height * scale;
        Bounds::new(
            self.left + (self.width - fitted_width) / 2.0,
            self.top + (self.height - fitted_height) / 2.0,
            fitted_width,
            fitted_height,
        )
    }
}

/// 2D translate + scale, applied with the origin at the top-left corner of
/// the box it transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    /// The transform that maps `last` back onto `first`.
    ///
    /// A degenerate `last` dimension keeps a scale of 1 on that axis.
    #[must_use]
    pub fn invert(first: Bounds, last: Bounds) -> Self {
        let ratio = |old: f32, new: f32| if new > 0.0 { old / new } else { 1.0 };
        Self {
            translate_x: first.left - last.left,
            translate_y: first.top - last.top,
            scale_x: ratio(first.width, last.width),
            scale_y: ratio(first.height, last.height),
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Applies the transform to `bounds`, using its own top-left as origin.
    #[must_use]
    pub fn apply(&self, bounds: Bounds) -> Bounds {
        Bounds::new(
            bounds.left + self.translate_x,
            bounds.top + self.translate_y,
            bounds.width * self.scale_x,
            bounds.height * self.scale_y,
        )
    }

    /// Applies the transform to `bounds` as if it were a child of `origin`,
    /// so nested boxes move and scale together with their parent.
    #[must_use]
    pub fn apply_within(&self, bounds: Bounds, origin: Bounds) -> Bounds {
        Bounds::new(
            origin.left + self.translate_x + (bounds.left - origin.left) * self.scale_x,
            origin.top + self.translate_y + (bounds.top - origin.top) * self.scale_y,
            bounds.width * self.scale_x,
            bounds.height * self.scale_y,
        )
    }

    /// Interpolates from `self` (progress 0) to identity (progress 1).
    #[must_use]
    pub fn toward_identity(&self, progress: f32) -> Self {
        let remaining = 1.0 - progress.clamp(0.0, 1.0);
        Self {
            translate_x: self.translate_x * remaining,
            translate_y: self.translate_y * remaining,
            scale_x: 1.0 + (self.scale_x - 1.0) * remaining,
            scale_y: 1.0 + (self.scale_y - 1.0) * remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_maps_last_box_onto_first() {
        let first = Bounds::new(10.0, 20.0, 200.0, 200.0);
        let last = Bounds::new(24.0, 300.0, 100.0, 80.0);

        let transform = Transform::invert(first, last);

        assert_eq!(transform.translate_x, -14.0);
        assert_eq!(transform.translate_y, -280.0);
        assert_eq!(transform.scale_x, 2.0);
        assert_eq!(transform.scale_y, 2.5);
        assert_eq!(transform.apply(last), first);
    }

    #[test]
    fn invert_of_identical_boxes_is_identity() {
        let bounds = Bounds::new(5.0, 5.0, 50.0, 50.0);
        assert!(Transform::invert(bounds, bounds).is_identity());
    }

    #[test]
    fn invert_guards_zero_sized_target() {
        let first = Bounds::new(0.0, 0.0, 40.0, 40.0);
        let last = Bounds::new(0.0, 0.0, 0.0, 20.0);
        let transform = Transform::invert(first, last);
        assert_eq!(transform.scale_x, 1.0);
        assert_eq!(transform.scale_y, 2.0);
    }

    #[test]
    fn toward_identity_endpoints() {
        let transform = Transform {
            translate_x: 30.0,
            translate_y: -10.0,
            scale_x: 2.0,
            scale_y: 0.5,
        };
        assert_eq!(transform.toward_identity(0.0), transform);
        assert!(transform.toward_identity(1.0).is_identity());

        let half = transform.toward_identity(0.5);
        assert_eq!(half.translate_x, 15.0);
        assert_eq!(half.scale_x, 1.5);
        assert_eq!(half.scale_y, 0.75);
    }

    #[test]
    fn apply_within_keeps_child_attached_to_parent() {
        let parent = Bounds::new(100.0, 100.0, 100.0, 100.0);
        let child = Bounds::new(110.0, 150.0, 50.0, 20.0);
        let transform = Transform {
            translate_x: -100.0,
            translate_y: 0.0,
            scale_x: 2.0,
            scale_y: 1.0,
        };

        let moved = transform.apply_within(child, parent);

        assert_eq!(moved, Bounds::new(20.0, 150.0, 100.0, 20.0));
    }

    #[test]
    fn fit_centers_picture() {
        let cell = Bounds::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(cell.fit(50.0, 50.0), Bounds::new(50.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn contains_excludes_far_edges() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(bounds.contains(0.0, 0.0));
        assert!(!bounds.contains(10.0, 5.0));
    }
}
