//! Color tint presets.

use crate::raster::{Point, Rgba};
use crate::transform::{truncate_channel, PixelTransform};

/// "Sunset" tint: red and green are scaled by `ratio`, blue and alpha are
/// left untouched.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sunset {
    ratio: f64,
}

impl Sunset {
    pub const DEFAULT_RATIO: f64 = 0.7;

    /// Creates the tint; a ratio of exactly `0.0` selects [`Sunset::DEFAULT_RATIO`].
    pub fn new(ratio: f64) -> Self {
        let ratio = if ratio == 0.0 {
            Self::DEFAULT_RATIO
        } else {
            ratio
        };
        Self { ratio }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

impl Default for Sunset {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATIO)
    }
}

impl PixelTransform for Sunset {
    fn apply(&self, _point: Point, color: Rgba) -> Rgba {
        Rgba {
            r: truncate_channel(f64::from(color.r) * self.ratio),
            g: truncate_channel(f64::from(color.g) * self.ratio),
            b: color.b,
            a: color.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Sunset;
    use crate::raster::{Point, Rgba};
    use crate::transform::PixelTransform;

    #[test]
    fn zero_ratio_selects_default() {
        assert_eq!(Sunset::new(0.0).ratio(), Sunset::DEFAULT_RATIO);
        assert_eq!(Sunset::default(), Sunset::new(0.0));
    }

    #[test]
    fn scales_red_and_green_only() {
        let out = Sunset::new(0.5).apply(Point::ZERO, Rgba::new(200, 101, 60, 128));
        assert_eq!(out, Rgba::new(100, 50, 60, 128));
    }

    #[test]
    fn large_ratios_saturate() {
        let out = Sunset::new(3.0).apply(Point::new(4, 4), Rgba::new(200, 10, 1, 255));
        assert_eq!(out, Rgba::new(255, 30, 1, 255));
    }
}
