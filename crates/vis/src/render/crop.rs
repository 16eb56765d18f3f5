//! Bitmap trimming for exported chart images.

use crate::error::Result;
use crate::error::VisError;

/// An RGBA pixel.
pub type Pixel = [u8; 4];

/// A row-major RGBA bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

/// An inclusive pixel rectangle inside a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// The leftmost column.
    pub left: usize,
    /// The topmost row.
    pub top: usize,
    /// The rightmost column.
    pub right: usize,
    /// The bottommost row.
    pub bottom: usize,
}

impl Bounds {
    /// The number of columns covered.
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    /// The number of rows covered.
    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    /// Grows the bounds by `padding` pixels on every side, clamped to
    /// the given bitmap dimensions.
    pub fn pad(&self, padding: usize, width: usize, height: usize) -> Bounds {
        Bounds {
            left: self.left.saturating_sub(padding),
            top: self.top.saturating_sub(padding),
            right: usize::min(self.right + padding, width - 1),
            bottom: usize::min(self.bottom + padding, height - 1),
        }
    }
}

impl Bitmap {
    /// Creates a bitmap from row-major pixels.
    ///
    /// The pixel count must equal `width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Bitmap> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(VisError::BitmapSize {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// The width of the bitmap, in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the bitmap, in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel at the given column and row.
    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        self.pixels[y * self.width + x]
    }

    /// The bounding box of all pixels that differ from the background
    /// color, or `None` when the bitmap is blank.
    pub fn content_bounds(&self, background: Pixel) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;

        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixel(x, y) == background {
                    continue;
                }

                bounds = Some(match bounds {
                    None => Bounds {
                        left: x,
                        top: y,
                        right: x,
                        bottom: y,
                    },
                    Some(bounds) => Bounds {
                        left: bounds.left.min(x),
                        top: bounds.top.min(y),
                        right: bounds.right.max(x),
                        bottom: bounds.bottom.max(y),
                    },
                });
            }
        }

        bounds
    }

    /// Crops the bitmap to its content plus a uniform padding, or
    /// `None` when the bitmap is blank. The padding never extends past
    /// the bitmap edges.
    pub fn trim(&self, background: Pixel, padding: usize) -> Option<Bitmap> {
        let bounds = self
            .content_bounds(background)?
            .pad(padding, self.width, self.height);

        let mut pixels = Vec::with_capacity(bounds.width() * bounds.height());
        for y in bounds.top..=bounds.bottom {
            for x in bounds.left..=bounds.right {
                pixels.push(self.pixel(x, y));
            }
        }

        Some(Self {
            width: bounds.width(),
            height: bounds.height(),
            pixels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Pixel = [255, 255, 255, 255];
    const BLACK: Pixel = [0, 0, 0, 255];

    fn bitmap_with_dot(width: usize, height: usize, x: usize, y: usize) -> Bitmap {
        let mut pixels = vec![WHITE; width * height];
        pixels[y * width + x] = BLACK;
        Bitmap::new(width, height, pixels).unwrap()
    }

    #[test]
    fn mismatched_pixel_counts_fail() {
        let result = Bitmap::new(2, 2, vec![WHITE; 3]);

        assert!(matches!(
            result,
            Err(VisError::BitmapSize { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn blank_bitmaps_have_no_content() {
        let bitmap = Bitmap::new(3, 3, vec![WHITE; 9]).unwrap();

        assert_eq!(bitmap.content_bounds(WHITE), None);
        assert_eq!(bitmap.trim(WHITE, 2), None);
    }

    #[test]
    fn bounds_cover_all_content_pixels() {
        let mut pixels = vec![WHITE; 25];
        pixels[1 * 5 + 2] = BLACK;
        pixels[3 * 5 + 4] = BLACK;
        let bitmap = Bitmap::new(5, 5, pixels).unwrap();

        let bounds = bitmap.content_bounds(WHITE).unwrap();

        assert_eq!(
            bounds,
            Bounds { left: 2, top: 1, right: 4, bottom: 3 }
        );
    }

    #[test]
    fn trim_keeps_the_padding_inside_the_bitmap() {
        let bitmap = bitmap_with_dot(5, 5, 4, 0);

        let trimmed = bitmap.trim(WHITE, 2).unwrap();

        // the dot sits in a corner, so padding is clamped on two sides
        assert_eq!(trimmed.width(), 3);
        assert_eq!(trimmed.height(), 3);
        assert_eq!(trimmed.pixel(2, 0), BLACK);
    }

    #[test]
    fn trim_centers_interior_content() {
        let bitmap = bitmap_with_dot(7, 7, 3, 3);

        let trimmed = bitmap.trim(WHITE, 1).unwrap();

        assert_eq!(trimmed.width(), 3);
        assert_eq!(trimmed.height(), 3);
        assert_eq!(trimmed.pixel(1, 1), BLACK);
    }
}
