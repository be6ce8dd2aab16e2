use assetkit::{AssetError, Swatch, check_dimensions};
use image::RgbImage;
use rand::{Rng, rngs::SmallRng};
use serde::Serialize;

use crate::{gradient, shapes, structured, texture};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererKind {
    Gradient,
    RadialGradient,
    Geometric,
    Organic,
    Stripes,
    Dots,
    Waves,
    Checkerboard,
    Spiral,
    Noise,
    Marble,
}

impl RendererKind {
    pub const ALL: [RendererKind; 11] = [
        RendererKind::Gradient,
        RendererKind::RadialGradient,
        RendererKind::Geometric,
        RendererKind::Organic,
        RendererKind::Stripes,
        RendererKind::Dots,
        RendererKind::Waves,
        RendererKind::Checkerboard,
        RendererKind::Spiral,
        RendererKind::Noise,
        RendererKind::Marble,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RendererKind::Gradient => "gradient",
            RendererKind::RadialGradient => "radial_gradient",
            RendererKind::Geometric => "geometric",
            RendererKind::Organic => "organic",
            RendererKind::Stripes => "stripes",
            RendererKind::Dots => "dots",
            RendererKind::Waves => "waves",
            RendererKind::Checkerboard => "checkerboard",
            RendererKind::Spiral => "spiral",
            RendererKind::Noise => "noise",
            RendererKind::Marble => "marble",
        }
    }

    pub fn random(rng: &mut SmallRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Number of distinct palette colors this renderer is fed, or `None` for
    /// the whole palette.
    pub fn color_count(self, rng: &mut SmallRng) -> Option<usize> {
        match self {
            RendererKind::Gradient => Some(2),
            RendererKind::RadialGradient => Some(rng.random_range(2..=3)),
            _ => None,
        }
    }
}

pub fn render(
    kind: RendererKind,
    width: u32,
    height: u32,
    swatch: &Swatch,
    rng: &mut SmallRng,
) -> Result<RgbImage, AssetError> {
    check_dimensions(width, height)?;

    let img = match kind {
        RendererKind::Gradient => gradient::linear(width, height, swatch),
        RendererKind::RadialGradient => gradient::radial(width, height, swatch),
        RendererKind::Geometric => shapes::geometric(width, height, swatch, rng),
        RendererKind::Organic => shapes::organic(width, height, swatch, rng),
        RendererKind::Stripes => structured::stripes(width, height, swatch, rng),
        RendererKind::Dots => structured::dots(width, height, swatch, rng),
        RendererKind::Waves => structured::waves(width, height, swatch, rng),
        RendererKind::Checkerboard => structured::checkerboard(width, height, swatch, rng),
        RendererKind::Spiral => structured::spiral(width, height, swatch, rng),
        RendererKind::Noise => texture::noise(width, height, swatch, rng),
        RendererKind::Marble => texture::marble(width, height, swatch, rng),
    };
    debug_assert_eq!(img.dimensions(), (width, height));
    Ok(img)
}
