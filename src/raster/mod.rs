//! Raster primitives and the pixel matrix.
//!
//! `RasterImage` is the read-only capability set the rest of the crate works
//! against: geometry plus per-coordinate RGBA8 lookup. `PixelMatrix` is the
//! owned, mutable implementation and `MatrixView` a zero-copy crop of one.
//! Any decoder can feed the crate by implementing `RasterImage`; the
//! `image-io` feature provides impls for the `image` crate buffers.

mod matrix;
mod view;

#[cfg(feature = "image-io")]
pub mod io;

pub use matrix::{process_image, PixelMatrix};
pub use view::MatrixView;

/// A single RGBA pixel with 8 bits per channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Creates a pixel from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a pixel with equal color channels.
    pub const fn gray(value: u8, a: u8) -> Self {
        Self::new(value, value, value, a)
    }

    /// Returns the channels in `[r, g, b, a]` order.
    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(px: Rgba) -> Self {
        px.channels()
    }
}

/// Integer offset; `x` is the column and `y` the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const ZERO: Point = Point::new(0, 0);

    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Half-open rectangle covering `min.x..max.x` by `min.y..max.y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Builds a rectangle from its top-left corner and extent.
    pub const fn from_origin(origin: Point, width: usize, height: usize) -> Self {
        Self {
            min: origin,
            max: Point::new(origin.x + width, origin.y + height),
        }
    }

    pub fn width(&self) -> usize {
        self.max.x.saturating_sub(self.min.x)
    }

    pub fn height(&self) -> usize {
        self.max.y.saturating_sub(self.min.y)
    }

    /// Returns true when the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Translates both corners by `offset`.
    pub fn moved(self, offset: Point) -> Self {
        Self {
            min: Point::new(self.min.x + offset.x, self.min.y + offset.y),
            max: Point::new(self.max.x + offset.x, self.max.y + offset.y),
        }
    }

    /// Keeps the top-left corner and sets a new extent.
    pub fn resized(self, width: usize, height: usize) -> Self {
        Self::from_origin(self.min, width, height)
    }
}

/// Read-only raster image with RGBA8 pixels.
///
/// The color model is always 8-bit RGBA: every source, including decoded
/// files, is exposed through [`Rgba`] and the crate performs no color-space
/// conversion when reading pixels.
///
/// Implementors guarantee that `pixel` is valid for every `x < width()` and
/// `y < height()`. Behavior outside that range is up to the implementor and
/// callers in this crate never rely on it.
pub trait RasterImage {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Returns the pixel at column `x`, row `y`.
    fn pixel(&self, x: usize, y: usize) -> Rgba;

    /// Returns the bounding rectangle, anchored at the origin.
    fn bounds(&self) -> Rect {
        Rect::from_origin(Point::ZERO, self.width(), self.height())
    }
}

impl<T: RasterImage + ?Sized> RasterImage for &T {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn pixel(&self, x: usize, y: usize) -> Rgba {
        (**self).pixel(x, y)
    }

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}
