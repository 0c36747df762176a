//! Owned, mutable RGBA pixel matrix.
//!
//! Pixels are stored row-major in one contiguous buffer of `width * height`
//! entries, so every row has the same length. Zero-sized matrices are
//! rejected at construction.

use crate::raster::{MatrixView, Point, RasterImage, Rect, Rgba};
use crate::trace::trace_event;
use crate::transform::PixelTransform;
use crate::util::{PixMatchError, PixMatchResult};

/// Owned RGBA8 pixel grid indexed by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMatrix {
    data: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl PixelMatrix {
    /// Creates a matrix with every channel of every pixel set to zero.
    pub fn new(width: usize, height: usize) -> PixMatchResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            data: vec![Rgba::TRANSPARENT; len],
            width,
            height,
        })
    }

    /// Wraps a row-major pixel buffer of exactly `width * height` entries.
    pub fn from_pixels(data: Vec<Rgba>, width: usize, height: usize) -> PixMatchResult<Self> {
        let needed = checked_len(width, height)?;
        if data.len() != needed {
            return Err(PixMatchError::BufferSizeMismatch {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a matrix from interleaved RGBA8 bytes.
    pub fn from_rgba8(bytes: &[u8], width: usize, height: usize) -> PixMatchResult<Self> {
        let needed = checked_len(width, height)?
            .checked_mul(4)
            .ok_or(PixMatchError::InvalidDimensions { width, height })?;
        if bytes.len() != needed {
            return Err(PixMatchError::BufferSizeMismatch {
                needed,
                got: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a matrix by evaluating `f` at every coordinate in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> PixMatchResult<Self>
    where
        F: FnMut(Point) -> Rgba,
    {
        let len = checked_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(Point::new(x, y)));
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Samples every coordinate of `img` into a new matrix.
    pub fn from_image<I: RasterImage + ?Sized>(img: &I) -> PixMatchResult<Self> {
        Self::from_fn(img.width(), img.height(), |p| img.pixel(p.x, p.y))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `width * height`.
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If the coordinate lies outside the matrix. Use [`PixelMatrix::get`]
    /// for a checked lookup.
    pub fn at(&self, x: usize, y: usize) -> Rgba {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} matrix",
            self.width,
            self.height
        );
        self.data[y * self.width + x]
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Overwrites the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If the coordinate lies outside the matrix.
    pub fn set(&mut self, x: usize, y: usize, px: Rgba) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} matrix",
            self.width,
            self.height
        );
        self.data[y * self.width + x] = px;
    }

    /// Returns row `y` as a slice of `width` pixels.
    pub fn row(&self, y: usize) -> Option<&[Rgba]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// Returns the whole row-major pixel buffer.
    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    /// Returns the pixels as interleaved RGBA8 bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.channels()).collect()
    }

    /// Consumes the matrix and returns its interleaved RGBA8 bytes.
    pub fn into_rgba8(self) -> Vec<u8> {
        self.data.into_iter().flat_map(Rgba::channels).collect()
    }

    /// Returns a read-only view covering the whole matrix.
    pub fn as_image(&self) -> MatrixView<'_> {
        MatrixView::full(&self.data, self.width, self.height)
    }

    /// Returns a zero-copy view cropped to `rect`.
    pub fn sub_image(&self, rect: Rect) -> PixMatchResult<MatrixView<'_>> {
        let Rect { min, .. } = rect;
        let (width, height) = (rect.width(), rect.height());
        if width == 0 || height == 0 {
            return Err(PixMatchError::InvalidDimensions { width, height });
        }
        let out_of_bounds = PixMatchError::RegionOutOfBounds {
            x: min.x,
            y: min.y,
            width,
            height,
            img_width: self.width,
            img_height: self.height,
        };
        if rect.max.x > self.width || rect.max.y > self.height {
            return Err(out_of_bounds);
        }

        let start = min.y * self.width + min.x;
        let data = self.data.get(start..).ok_or(out_of_bounds)?;
        Ok(MatrixView::strided(data, width, height, self.width))
    }

    /// Applies `transform` to every pixel in row-major order.
    ///
    /// Output pixels are written to fresh storage that replaces the old
    /// buffer only once every pixel has been computed.
    pub fn process<T: PixelTransform + ?Sized>(&mut self, transform: &T) -> &mut Self {
        let mut out = Vec::with_capacity(self.data.len());
        for (y, row) in self.data.chunks_exact(self.width).enumerate() {
            for (x, &px) in row.iter().enumerate() {
                out.push(transform.apply(Point::new(x, y), px));
            }
        }
        self.data = out;
        trace_event!(
            "matrix_processed",
            width = self.width,
            height = self.height
        );
        self
    }
}

impl RasterImage for PixelMatrix {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.at(x, y)
    }
}

/// Samples `img` into a new matrix and applies `transform` to it.
pub fn process_image<I, T>(img: &I, transform: &T) -> PixMatchResult<PixelMatrix>
where
    I: RasterImage + ?Sized,
    T: PixelTransform + ?Sized,
{
    let mut matrix = PixelMatrix::from_image(img)?;
    matrix.process(transform);
    Ok(matrix)
}

fn checked_len(width: usize, height: usize) -> PixMatchResult<usize> {
    if width == 0 || height == 0 {
        return Err(PixMatchError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(PixMatchError::InvalidDimensions { width, height })
}
