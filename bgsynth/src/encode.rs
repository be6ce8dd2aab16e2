use std::{io::Write, ops::RangeInclusive};

use image::{
    ImageError, ImageFormat, ImageResult, RgbImage,
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
    error::{EncodingError, ImageFormatHint},
};
use rand::{Rng, rngs::SmallRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg { quality: u8 },
    WebP { quality: u8 },
}

impl OutputFormat {
    /// Uniform over the three formats; lossy ones draw a quality from `quality`.
    pub fn sample(rng: &mut SmallRng, quality: &RangeInclusive<u8>) -> Self {
        match rng.random_range(0..3) {
            0 => OutputFormat::Png,
            1 => OutputFormat::Jpeg {
                quality: rng.random_range(quality.clone()),
            },
            _ => OutputFormat::WebP {
                quality: rng.random_range(quality.clone()),
            },
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg { .. } => "jpg",
            OutputFormat::WebP { .. } => "webp",
        }
    }

    pub fn quality(self) -> Option<u8> {
        match self {
            OutputFormat::Png => None,
            OutputFormat::Jpeg { quality } | OutputFormat::WebP { quality } => Some(quality),
        }
    }

    pub fn encode<W: Write>(self, img: &RgbImage, mut out: W) -> ImageResult<()> {
        match self {
            OutputFormat::Png => img.write_with_encoder(PngEncoder::new(out)),
            OutputFormat::Jpeg { quality } => {
                img.write_with_encoder(JpegEncoder::new_with_quality(out, quality))
            }
            OutputFormat::WebP { quality } => {
                let bytes = webp::Encoder::from_rgb(img.as_raw(), img.width(), img.height())
                    .encode_simple(false, quality as f32)
                    .map_err(|e| {
                        ImageError::Encoding(EncodingError::new(
                            ImageFormatHint::Exact(ImageFormat::WebP),
                            format!("libwebp: {e:?}"),
                        ))
                    })?;
                out.write_all(&bytes)?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetkit::Color;
    use rand::SeedableRng;

    use crate::draw::canvas;

    #[test]
    fn lossy_quality_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(4);
        let range = 85..=95;
        let mut seen = [0usize; 3];
        for _ in 0..600 {
            let f = OutputFormat::sample(&mut rng, &range);
            match f {
                OutputFormat::Png => {
                    seen[0] += 1;
                    assert_eq!(f.quality(), None);
                }
                OutputFormat::Jpeg { quality } | OutputFormat::WebP { quality } => {
                    assert!(range.contains(&quality));
                    seen[if f.extension() == "jpg" { 1 } else { 2 }] += 1;
                }
            }
        }
        assert!(seen.iter().all(|n| *n > 120), "{seen:?}");
    }

    #[test]
    fn encoded_bytes_decode_to_same_size() {
        let img = canvas(32, 24, Color::rgb(200, 40, 90));
        for (fmt, expect) in [
            (OutputFormat::Png, ImageFormat::Png),
            (OutputFormat::Jpeg { quality: 90 }, ImageFormat::Jpeg),
            (OutputFormat::WebP { quality: 90 }, ImageFormat::WebP),
        ] {
            let mut buf = Vec::new();
            fmt.encode(&img, &mut buf).unwrap();
            assert_eq!(image::guess_format(&buf).unwrap(), expect);
            let back = image::load_from_memory(&buf).unwrap();
            assert_eq!((back.width(), back.height()), (32, 24));
        }
    }

    #[test]
    fn png_round_trips_pixels() {
        let img = canvas(16, 16, Color::rgb(3, 140, 250));
        let mut buf = Vec::new();
        OutputFormat::Png.encode(&img, &mut buf).unwrap();
        let back = image::load_from_memory(&buf).unwrap().to_rgb8();
        assert_eq!(back, img);
    }

    fn busy(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            let v = (x * 37 + y * 91) ^ (x * y);
            image::Rgb([(v % 256) as u8, ((v / 3) % 256) as u8, ((x + 2 * y) * 5 % 256) as u8])
        })
    }

    #[test]
    fn webp_quality_changes_the_encoding() {
        let img = busy(64, 64);
        let encode = |quality| {
            let mut buf = Vec::new();
            OutputFormat::WebP { quality }.encode(&img, &mut buf).unwrap();
            buf
        };
        let (low, high) = (encode(85), encode(95));
        assert_ne!(low, high);
        assert!(high.len() > low.len(), "{} vs {}", high.len(), low.len());

        // Lossy: the busy image does not survive bit-exact.
        let back = image::load_from_memory(&low).unwrap().to_rgb8();
        assert_eq!(back.dimensions(), (64, 64));
        assert_ne!(back, img);
    }
}
