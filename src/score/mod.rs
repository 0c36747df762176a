//! Closeness and similarity scores on a 0..=1000 scale.
//!
//! Per-pixel closeness is `1000 - sum(|delta|) * 1000 / (255 * 4)` over all
//! four channels, using integer division. Image similarity is the floored
//! mean closeness over the overlapping region of the luminance-gray
//! versions of both images.

use crate::raster::{PixelMatrix, RasterImage, Rgba};
use crate::trace::{trace_event, trace_span};
use crate::transform::LumaGray;
use crate::util::{PixMatchError, PixMatchResult};

/// Score of two identical pixels or images.
pub const MAX_SCORE: u32 = 1000;

const MAX_DIFF: u32 = 255 * 4;

/// Closeness of two pixels: 1000 when equal, 0 when every channel differs by 255.
#[inline]
pub fn closeness(p1: Rgba, p2: Rgba) -> u32 {
    let diff: u32 = p1
        .channels()
        .iter()
        .zip(p2.channels().iter())
        .map(|(a, b)| u32::from(a.abs_diff(*b)))
        .sum();
    MAX_SCORE - diff * MAX_SCORE / MAX_DIFF
}

/// Mean closeness over the overlapping top-left region of two images.
///
/// No color conversion is applied. The overlap is `min` of the widths by
/// `min` of the heights; an empty overlap is an error.
pub fn mean_closeness<A, B>(a: &A, b: &B) -> PixMatchResult<u32>
where
    A: RasterImage + ?Sized,
    B: RasterImage + ?Sized,
{
    let width = a.width().min(b.width());
    let height = a.height().min(b.height());
    if width == 0 || height == 0 {
        return Err(PixMatchError::InvalidDimensions { width, height });
    }

    let mut sum = 0u64;
    for y in 0..height {
        for x in 0..width {
            sum += u64::from(closeness(a.pixel(x, y), b.pixel(x, y)));
        }
    }
    let count = (width as u64) * (height as u64);
    Ok((sum / count) as u32)
}

/// Similarity of two images in `0..=1000`.
///
/// Both images are converted to luminance gray before comparison. Images of
/// different sizes are compared over their overlapping top-left region.
pub fn similarity<A, B>(img1: &A, img2: &B) -> PixMatchResult<u32>
where
    A: RasterImage + ?Sized,
    B: RasterImage + ?Sized,
{
    let _span = trace_span!("similarity").entered();
    let m1 = gray_matrix(img1)?;
    let m2 = gray_matrix(img2)?;
    let score = mean_closeness(&m1, &m2)?;
    trace_event!("similarity_result", score = score);
    Ok(score)
}

/// Samples `img` and converts it with [`LumaGray`].
pub(crate) fn gray_matrix<I: RasterImage + ?Sized>(img: &I) -> PixMatchResult<PixelMatrix> {
    let mut matrix = PixelMatrix::from_image(img)?;
    matrix.process(&LumaGray);
    Ok(matrix)
}
