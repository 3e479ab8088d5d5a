//! Plain geometry in CSS pixels.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grow by `padding` on every side.
    #[must_use]
    pub fn padded(self, padding: f64) -> Self {
        Self { width: self.width + padding * 2.0, height: self.height + padding * 2.0 }
    }

    /// Whether both dimensions are positive and finite.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Device pixel dimensions after scaling, rounded up.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scaled_pixels(self, scale: f64) -> (u32, u32) {
        let w = (self.width * scale).ceil().max(0.0);
        let h = (self.height * scale).ceil().max(0.0);
        (w.min(f64::from(u32::MAX)) as u32, h.min(f64::from(u32::MAX)) as u32)
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width * 0.5
    }

    /// Shrink by `inset` on every side; never below zero size.
    #[must_use]
    pub fn inset(&self, inset: f64) -> Self {
        Self {
            x: self.x + inset,
            y: self.y + inset,
            width: (self.width - inset * 2.0).max(0.0),
            height: (self.height - inset * 2.0).max(0.0),
        }
    }
}

/// Source crop that makes an image of `source` size cover `dest` without
/// distortion, centered, the way CSS `background-size: cover` does.
///
/// Returns `None` when either size is not drawable.
#[must_use]
pub fn cover_crop(source: Size, dest: Size) -> Option<Rect> {
    if !source.is_drawable() || !dest.is_drawable() {
        return None;
    }
    let source_ratio = source.width / source.height;
    let dest_ratio = dest.width / dest.height;
    if source_ratio > dest_ratio {
        // Source is wider: keep full height, crop the sides.
        let width = source.height * dest_ratio;
        Some(Rect::new((source.width - width) * 0.5, 0.0, width, source.height))
    } else {
        let height = source.width / dest_ratio;
        Some(Rect::new(0.0, (source.height - height) * 0.5, source.width, height))
    }
}
