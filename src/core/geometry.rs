//! Immutable geometry values: `Region` (rectangle), `Padding` (four-sided
//! margin) and `Section` (half-open interval on one axis).
use serde::{Deserialize, Serialize};

use crate::core::image::{Image, ImageView, copy_window, get_h_w_c};
use crate::error::{Error, Result};

/// Four-sided margin in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Padding {
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: usize) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }

    pub fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

/// Axis-aligned pixel rectangle. The origin may be negative after padding;
/// `width` and `height` are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: isize,
    pub y: isize,
    pub width: isize,
    pub height: isize,
}

impl Region {
    pub fn new(x: isize, y: isize, width: isize, height: isize) -> Self {
        debug_assert!(width >= 0 && height >= 0, "region size must be non-negative");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The full extent of an image.
    pub fn of_image(image: &ImageView<'_>) -> Self {
        let (h, w, _) = get_h_w_c(image);
        Region::new(0, 0, w as isize, h as isize)
    }

    pub fn right(&self) -> isize {
        self.x + self.width
    }

    pub fn bottom(&self) -> isize {
        self.y + self.height
    }

    /// Overlap of two regions; zero-area when they do not touch.
    pub fn intersect(&self, other: Region) -> Region {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Region::new(x, y, (right - x).max(0), (bottom - y).max(0))
    }

    pub fn add_padding(&self, pad: Padding) -> Region {
        Region::new(
            self.x - pad.left as isize,
            self.y - pad.top as isize,
            self.width + pad.horizontal() as isize,
            self.height + pad.vertical() as isize,
        )
    }

    /// Owned copy of the addressed sub-raster. The region must lie inside
    /// the image; intersect with `Region::of_image` first to clamp.
    pub fn read_from(&self, image: &ImageView<'_>) -> Result<Image> {
        let bounds = Region::of_image(image);
        if self.x < 0 || self.y < 0 || self.right() > bounds.width || self.bottom() > bounds.height
        {
            return Err(Error::geometry(format!(
                "region {:?} is outside a {}x{} image",
                self, bounds.width, bounds.height
            )));
        }
        Ok(copy_window(
            image,
            self.y as usize,
            self.bottom() as usize,
            self.x as usize,
            self.right() as usize,
        ))
    }
}

/// Half-open interval `[start, end)` on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub start: usize,
    pub end: usize,
}

impl Section {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> usize {
        self.end - self.start
    }

    /// Envelope of both sections; any gap between them is included.
    pub fn union(&self, other: Section) -> Section {
        Section::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn distance_to(&self, index: usize) -> usize {
        if index < self.start {
            self.start - index
        } else if index >= self.end {
            index - self.end
        } else {
            0
        }
    }
}
