//! pixmatch turns raster images into RGBA pixel matrices, applies per-pixel
//! transforms, scores how similar two images are, and finds where a small
//! image sits inside a larger one by brute-force search.
//!
//! Any image source works through the [`RasterImage`] trait; the
//! `image-io` feature adds adapters for the `image` crate. The `rayon`
//! feature enables a row-parallel template scan.

pub mod raster;
pub mod score;
pub mod search;
mod trace;
pub mod transform;
pub mod util;

pub use raster::{process_image, MatrixView, PixelMatrix, Point, RasterImage, Rect, Rgba};
pub use score::{closeness, mean_closeness, similarity, MAX_SCORE};
pub use search::{locate_template, LocateConfig, Locator, Match};
pub use transform::{
    AverageGray, LumaGray, PerceptualGray, PixelTransform, Preset, Sunset, TransformChain,
};
pub use util::{PixMatchError, PixMatchResult};

#[cfg(feature = "image-io")]
pub use raster::io;
