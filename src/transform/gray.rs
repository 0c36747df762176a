//! Grayscale presets.
//!
//! Every preset writes the same value to R, G and B and keeps alpha.

use crate::raster::{Point, Rgba};
use crate::transform::{truncate_channel, PixelTransform};

/// Fixed-point luminance with weights 0.299 / 0.587 / 0.114.
///
/// `gray = (R * 19595 + G * 38469 + B * 7472) >> 16`. The weights sum to
/// `1 << 16`, so the shift lands directly in the 8-bit range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LumaGray;

/// Gamma-weighted grayscale:
/// `(0.2973 * R^2.2 + 0.6274 * G^2.2 + 0.0753 * B^2.2)^(1 / 2.2)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PerceptualGray;

/// Unweighted mean of the three color channels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AverageGray;

const GAMMA: f64 = 2.2;

impl LumaGray {
    /// Luminance of a single pixel.
    #[inline]
    pub fn luma(color: Rgba) -> u8 {
        let r = u32::from(color.r);
        let g = u32::from(color.g);
        let b = u32::from(color.b);
        ((r * 19595 + g * 38469 + b * 7472) >> 16) as u8
    }
}

impl PixelTransform for LumaGray {
    fn apply(&self, _point: Point, color: Rgba) -> Rgba {
        Rgba::gray(Self::luma(color), color.a)
    }
}

impl PixelTransform for PerceptualGray {
    fn apply(&self, _point: Point, color: Rgba) -> Rgba {
        let lin = |c: u8| f64::from(c).powf(GAMMA);
        let sum = 0.2973 * lin(color.r) + 0.6274 * lin(color.g) + 0.0753 * lin(color.b);
        Rgba::gray(truncate_channel(sum.powf(1.0 / GAMMA)), color.a)
    }
}

impl PixelTransform for AverageGray {
    fn apply(&self, _point: Point, color: Rgba) -> Rgba {
        let sum = f64::from(color.r) + f64::from(color.g) + f64::from(color.b);
        Rgba::gray(truncate_channel(sum / 3.0), color.a)
    }
}

#[cfg(test)]
mod tests {
    use super::{AverageGray, LumaGray, PerceptualGray};
    use crate::raster::{Point, Rgba};
    use crate::transform::PixelTransform;

    #[test]
    fn luma_matches_fixed_point_weights() {
        assert_eq!(LumaGray::luma(Rgba::new(255, 0, 0, 255)), 76);
        assert_eq!(LumaGray::luma(Rgba::new(0, 255, 0, 255)), 149);
        assert_eq!(LumaGray::luma(Rgba::new(0, 0, 255, 255)), 29);
        assert_eq!(LumaGray::luma(Rgba::new(10, 20, 30, 255)), 18);
        assert_eq!(LumaGray::luma(Rgba::new(255, 255, 255, 0)), 255);
    }

    #[test]
    fn luma_keeps_alpha() {
        let out = LumaGray.apply(Point::ZERO, Rgba::new(10, 20, 30, 77));
        assert_eq!(out, Rgba::new(18, 18, 18, 77));
    }

    #[test]
    fn average_truncates() {
        let out = AverageGray.apply(Point::ZERO, Rgba::new(1, 1, 2, 9));
        assert_eq!(out, Rgba::new(1, 1, 1, 9));
        let out = AverageGray.apply(Point::ZERO, Rgba::new(255, 255, 255, 255));
        assert_eq!(out.r, 255);
    }

    #[test]
    fn perceptual_weights_favour_green() {
        let red = PerceptualGray.apply(Point::ZERO, Rgba::new(255, 0, 0, 255));
        let green = PerceptualGray.apply(Point::ZERO, Rgba::new(0, 255, 0, 255));
        let blue = PerceptualGray.apply(Point::ZERO, Rgba::new(0, 0, 255, 255));
        assert!(green.r > red.r && red.r > blue.r);
        assert_eq!(PerceptualGray.apply(Point::ZERO, Rgba::new(0, 0, 0, 3)), Rgba::gray(0, 3));
    }

    #[test]
    fn perceptual_preserves_neutral_gray() {
        for v in [0u8, 17, 128, 200, 255] {
            let out = PerceptualGray.apply(Point::ZERO, Rgba::gray(v, 255));
            assert!(out.r.abs_diff(v) <= 1, "{v} -> {}", out.r);
        }
    }
}
