//! Per-pixel color transforms.
//!
//! A transform maps `(position, color)` to a new color and must be a pure
//! function of its inputs and its own captured configuration. Closures of
//! the form `Fn(Point, Rgba) -> Rgba` are transforms, as are the presets in
//! this module.

use crate::raster::{Point, Rgba};

mod gray;
mod tint;

pub use gray::{AverageGray, LumaGray, PerceptualGray};
pub use tint::Sunset;

/// Maps a pixel's position and color to a new color.
pub trait PixelTransform {
    fn apply(&self, point: Point, color: Rgba) -> Rgba;
}

impl<F> PixelTransform for F
where
    F: Fn(Point, Rgba) -> Rgba,
{
    fn apply(&self, point: Point, color: Rgba) -> Rgba {
        self(point, color)
    }
}

/// Named presets for configuration surfaces.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Preset {
    LumaGray,
    PerceptualGray,
    AverageGray,
    /// Warm tint; `0.0` selects the default ratio.
    Sunset(f64),
}

impl Preset {
    /// Returns the transform this preset names.
    pub fn transform(self) -> Box<dyn PixelTransform + Send + Sync> {
        match self {
            Preset::LumaGray => Box::new(LumaGray),
            Preset::PerceptualGray => Box::new(PerceptualGray),
            Preset::AverageGray => Box::new(AverageGray),
            Preset::Sunset(ratio) => Box::new(Sunset::new(ratio)),
        }
    }
}

/// Applies several transforms in order, feeding each output to the next.
#[derive(Default)]
pub struct TransformChain {
    stages: Vec<Box<dyn PixelTransform + Send + Sync>>,
}

impl TransformChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage and returns the chain for further chaining.
    pub fn then<T>(mut self, transform: T) -> Self
    where
        T: PixelTransform + Send + Sync + 'static,
    {
        self.stages.push(Box::new(transform));
        self
    }

    /// Appends an already boxed stage.
    pub fn push(&mut self, transform: Box<dyn PixelTransform + Send + Sync>) {
        self.stages.push(transform);
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl PixelTransform for TransformChain {
    fn apply(&self, point: Point, color: Rgba) -> Rgba {
        self.stages
            .iter()
            .fold(color, |acc, stage| stage.apply(point, acc))
    }
}

/// Truncates a floating-point channel value to `u8`, saturating at the ends.
pub(crate) fn truncate_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
