//! Adapters between the `image` crate and pixel matrices.
//!
//! Available when the `image-io` feature is enabled.

use crate::raster::{PixelMatrix, RasterImage, Rgba};
use crate::util::{PixMatchError, PixMatchResult};
use image::GenericImageView;
use std::path::Path;

impl RasterImage for image::RgbaImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn pixel(&self, x: usize, y: usize) -> Rgba {
        Rgba::from(self.get_pixel(x as u32, y as u32).0)
    }
}

impl RasterImage for image::DynamicImage {
    fn width(&self) -> usize {
        GenericImageView::width(self) as usize
    }

    fn height(&self) -> usize {
        GenericImageView::height(self) as usize
    }

    fn pixel(&self, x: usize, y: usize) -> Rgba {
        Rgba::from(self.get_pixel(x as u32, y as u32).0)
    }
}

impl PixelMatrix {
    /// Copies the matrix into an `image::RgbaImage` for encoding.
    pub fn to_rgba_image(&self) -> PixMatchResult<image::RgbaImage> {
        let (width, height) = (self.width(), self.height());
        let invalid = PixMatchError::InvalidDimensions { width, height };
        let w = u32::try_from(width).map_err(|_| invalid.clone())?;
        let h = u32::try_from(height).map_err(|_| invalid.clone())?;
        image::RgbaImage::from_raw(w, h, self.to_rgba8()).ok_or(invalid)
    }
}

/// Converts any decoded image to an RGBA8 pixel matrix.
pub fn matrix_from_dynamic_image(img: &image::DynamicImage) -> PixMatchResult<PixelMatrix> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelMatrix::from_rgba8(rgba.as_raw(), width as usize, height as usize)
}

/// Decodes an image file into a pixel matrix.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> PixMatchResult<PixelMatrix> {
    let img = image::open(path).map_err(|err| PixMatchError::ImageIo {
        reason: err.to_string(),
    })?;
    matrix_from_dynamic_image(&img)
}

/// Encodes a pixel matrix to disk; the format follows the file extension.
pub fn save_matrix<P: AsRef<Path>>(matrix: &PixelMatrix, path: P) -> PixMatchResult<()> {
    matrix
        .to_rgba_image()?
        .save(path)
        .map_err(|err| PixMatchError::ImageIo {
            reason: err.to_string(),
        })
}
