use std::{ops::RangeInclusive, path::PathBuf};

/// Batch and rendering parameters for the background generator.
#[derive(Clone, Debug)]
pub struct BackgroundCfg {
    pub out_dir: PathBuf, // "backgrounds"
    pub count: u32,
    pub width: u32,
    pub height: u32,
    pub progress_every: u32,
    pub blur_chance: f64,
    pub blur_sigma: RangeInclusive<f32>,
    pub brightness_chance: f64,
    pub brightness: RangeInclusive<f32>,
    pub quality: RangeInclusive<u8>, // JPEG / WEBP
    pub manifest: Option<PathBuf>,   // one JSON line per written background
}

impl Default for BackgroundCfg {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("backgrounds"),
            count: 160,
            width: 800,
            height: 600,
            progress_every: 20,
            blur_chance: 0.5,
            blur_sigma: 0.5..=2.0,
            brightness_chance: 0.3,
            brightness: 0.8..=1.2,
            quality: 85..=95,
            manifest: Some(PathBuf::from("backgrounds.jsonl")),
        }
    }
}
