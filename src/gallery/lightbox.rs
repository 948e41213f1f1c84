// SPDX-License-Identifier: MPL-2.0
//! Full-size image overlay with wrap-around navigation.

use crate::config::defaults::SWIPE_THRESHOLD;

/// A navigation command understood by the open lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Close,
    Previous,
    Next,
}

/// Lightbox state over a collection of `len` images.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lightbox {
    current: Option<usize>,
    len: usize,
    swipe_start: Option<f32>,
}

impl Lightbox {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            current: None,
            len,
            swipe_start: None,
        }
    }

    /// Replaces the collection size, closing the lightbox.
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// Opens the lightbox on image `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = Some(index);
        self.swipe_start = None;
        true
    }

    pub fn close(&mut self) {
        self.current = None;
        self.swipe_start = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Index of the displayed image, if open.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn show_previous(&mut self) {
        if let Some(index) = self.current {
            self.current = Some((index + self.len - 1) % self.len);
        }
    }

    pub fn show_next(&mut self) {
        if let Some(index) = self.current {
            self.current = Some((index + 1) % self.len);
        }
    }

    /// Applies `navigation` if the lightbox is open. Returns whether it was.
    pub fn navigate(&mut self, navigation: Navigation) -> bool {
        if !self.is_open() {
            return false;
        }
        match navigation {
            Navigation::Close => self.close(),
            Navigation::Previous => self.show_previous(),
            Navigation::Next => self.show_next(),
        }
        true
    }

    /// Records the horizontal position where a touch or press began.
    pub fn begin_swipe(&mut self, x: f32) {
        if self.is_open() {
            self.swipe_start = Some(x);
        }
    }

    /// Ends a swipe at `x`, navigating when the horizontal travel exceeds the
    /// threshold: rightward shows the previous image, leftward the next.
    pub fn end_swipe(&mut self, x: f32) -> Option<Navigation> {
        let start = self.swipe_start.take()?;
        let navigation = swipe_direction(x - start)?;
        self.navigate(navigation).then_some(navigation)
    }
}

/// Navigation for a horizontal travel of `delta_x` pixels.
#[must_use]
pub fn swipe_direction(delta_x: f32) -> Option<Navigation> {
    if delta_x.abs() <= SWIPE_THRESHOLD {
        None
    } else if delta_x > 0.0 {
        Some(Navigation::Previous)
    } else {
        Some(Navigation::Next)
    }
}
