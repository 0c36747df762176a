//! Borrowed views into a `PixelMatrix`.
//!
//! A view keeps the stride of its parent, so cropping never copies pixels.
//! The stride counts pixels between the starts of consecutive rows.

use crate::raster::{PixelMatrix, RasterImage, Rgba};
use crate::util::PixMatchResult;

/// Read-only, possibly cropped view of a pixel matrix.
#[derive(Copy, Clone, Debug)]
pub struct MatrixView<'a> {
    data: &'a [Rgba],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> MatrixView<'a> {
    pub(crate) fn full(data: &'a [Rgba], width: usize, height: usize) -> Self {
        Self::strided(data, width, height, width)
    }

    /// Caller guarantees `(height - 1) * stride + width <= data.len()`.
    pub(crate) fn strided(data: &'a [Rgba], width: usize, height: usize, stride: usize) -> Self {
        debug_assert!(stride >= width);
        debug_assert!((height - 1) * stride + width <= data.len());
        Self {
            data,
            width,
            height,
            stride,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in pixels between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the pixel at `(x, y)` if it is within the view.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x).copied()
    }

    /// Returns row `y` of the view, `width` pixels long.
    pub fn row(&self, y: usize) -> Option<&'a [Rgba]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        self.data.get(start..start + self.width)
    }

    /// Copies the viewed pixels into a new owned matrix.
    pub fn to_matrix(&self) -> PixMatchResult<PixelMatrix> {
        PixelMatrix::from_image(self)
    }
}

impl RasterImage for MatrixView<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    /// # Panics
    ///
    /// If `(x, y)` lies outside the view.
    fn pixel(&self, x: usize, y: usize) -> Rgba {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} view",
            self.width,
            self.height
        );
        self.data[y * self.stride + x]
    }
}
