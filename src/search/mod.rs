//! Brute-force template location.
//!
//! The locator converts the template to luminance gray once, converts each
//! search image the same way, then scores every placement where the
//! template fits entirely inside the image. Because the gray conversion is
//! per-pixel, scoring a crop of the converted image is the same as running
//! [`similarity`](crate::similarity) on a crop of the original.
//!
//! Cost is `O((W - w + 1) * (H - h + 1) * w * h)` per search. Integral
//! images or FFT-based correlation would lower it; neither is implemented.

use crate::raster::{PixelMatrix, Point, RasterImage};
use crate::score::gray_matrix;
use crate::trace::{trace_event, trace_span};
use crate::util::{PixMatchError, PixMatchResult};

pub(crate) mod scan;

#[cfg(feature = "rayon")]
pub(crate) mod rayon;

/// Best placement of a template inside an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    /// Top-left corner of the matched region in image coordinates.
    pub offset: Point,
    /// Similarity of the region and the template, `0..=1000`.
    pub score: u32,
}

/// Locator configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocateConfig {
    /// Scan rows in parallel. Requires the `rayon` feature; ignored otherwise.
    pub parallel: bool,
}

/// Template prepared for repeated searches.
#[derive(Clone, Debug)]
pub struct Locator {
    template: PixelMatrix,
    cfg: LocateConfig,
}

impl Locator {
    /// Prepares `template` with the default configuration.
    pub fn new<T: RasterImage + ?Sized>(template: &T) -> PixMatchResult<Self> {
        Ok(Self {
            template: gray_matrix(template)?,
            cfg: LocateConfig::default(),
        })
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: LocateConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn config(&self) -> LocateConfig {
        self.cfg
    }

    /// Returns the gray template used for scoring.
    pub fn template(&self) -> &PixelMatrix {
        &self.template
    }

    /// Finds the placement of the template with the highest similarity.
    ///
    /// Ties keep the first placement in row-major order. An image with a
    /// zero dimension is rejected before the size check; a template larger
    /// than the image in either axis is rejected after it.
    pub fn locate<I: RasterImage + ?Sized>(&self, image: &I) -> PixMatchResult<Match> {
        let tpl = &self.template;
        let (img_width, img_height) = (image.width(), image.height());
        let _span = trace_span!(
            "locate_template",
            img_width = img_width,
            img_height = img_height,
            tpl_width = tpl.width(),
            tpl_height = tpl.height()
        )
        .entered();

        if img_width == 0 || img_height == 0 {
            return Err(PixMatchError::InvalidDimensions {
                width: img_width,
                height: img_height,
            });
        }
        if img_width < tpl.width() || img_height < tpl.height() {
            return Err(PixMatchError::TemplateTooLarge {
                tpl_width: tpl.width(),
                tpl_height: tpl.height(),
                img_width,
                img_height,
            });
        }
        let gray = gray_matrix(image)?;

        let rows = 0..gray.height() - tpl.height() + 1;
        #[cfg(feature = "rayon")]
        let best = if self.cfg.parallel {
            self::rayon::scan_rows_par(&gray, tpl, rows)?
        } else {
            scan::scan_rows(&gray, tpl, rows)?
        };
        #[cfg(not(feature = "rayon"))]
        let best = scan::scan_rows(&gray, tpl, rows)?;
        let best = best.ok_or(PixMatchError::TemplateTooLarge {
            tpl_width: tpl.width(),
            tpl_height: tpl.height(),
            img_width,
            img_height,
        })?;

        trace_event!(
            "locate_result",
            x = best.offset.x,
            y = best.offset.y,
            score = best.score
        );
        Ok(best)
    }
}

/// Finds where `template` best matches inside `image`.
pub fn locate_template<I, T>(image: &I, template: &T) -> PixMatchResult<Match>
where
    I: RasterImage + ?Sized,
    T: RasterImage + ?Sized,
{
    Locator::new(template)?.locate(image)
}
