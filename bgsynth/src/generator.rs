use std::{
    fs, io,
    path::{Path, PathBuf},
};

use assetkit::{AssetError, AssetGenerator, Swatch};
use image::RgbImage;
use log::debug;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    config::BackgroundCfg,
    effects::Effects,
    encode::OutputFormat,
    io::Manifest,
    palettes,
    record::JsonRecord,
    renderer::{self, RendererKind},
};

/// Everything decided for one background before any pixel is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundPlan {
    pub renderer: RendererKind,
    pub palette: &'static str,
    pub colors: Swatch,
    pub effects: Effects,
    pub format: OutputFormat,
}

pub struct BackgroundGenerator {
    cfg: BackgroundCfg,
    manifest: Option<Manifest>,
}

impl BackgroundGenerator {
    /// Opens the manifest named in `cfg`, if any.
    pub fn new(cfg: BackgroundCfg) -> io::Result<Self> {
        let manifest = cfg.manifest.as_ref().map(Manifest::create).transpose()?;
        Ok(Self { cfg, manifest })
    }

    pub fn config(&self) -> &BackgroundCfg {
        &self.cfg
    }

    pub fn plan(&self, rng: &mut SmallRng) -> BackgroundPlan {
        let renderer = RendererKind::random(rng);
        let palette = palettes::random_palette(rng);
        let colors = match renderer.color_count(rng) {
            Some(n) => palette.swatch().sample_distinct(rng, n),
            None => palette.swatch(),
        };
        BackgroundPlan {
            renderer,
            palette: palette.name,
            colors,
            effects: Effects::sample(rng, &self.cfg),
            format: OutputFormat::sample(rng, &self.cfg.quality),
        }
    }

    pub fn render(&self, plan: &BackgroundPlan, rng: &mut SmallRng) -> Result<RgbImage, AssetError> {
        let img = renderer::render(
            plan.renderer,
            self.cfg.width,
            self.cfg.height,
            &plan.colors,
            rng,
        )?;
        Ok(plan.effects.apply(img))
    }

    pub fn file_name(index: u32, format: OutputFormat) -> String {
        format!("bg-{index:03}.{}", format.extension())
    }

    /// Encodes `img` into the output directory, creating it when missing.
    /// Nothing is written when encoding fails.
    pub fn write(&self, index: u32, img: &RgbImage, format: OutputFormat) -> Result<PathBuf, AssetError> {
        let dir = &self.cfg.out_dir;
        let path = dir.join(Self::file_name(index, format));

        let mut bytes = Vec::new();
        format
            .encode(img, &mut bytes)
            .map_err(|e| AssetError::encode(&path, e))?;

        fs::create_dir_all(dir).map_err(|source| AssetError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        fs::write(&path, bytes).map_err(|source| AssetError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Flushes and syncs the manifest.
    pub fn finalize(self) -> io::Result<()> {
        match self.manifest {
            Some(m) => m.finalize(),
            None => Ok(()),
        }
    }
}

impl AssetGenerator for BackgroundGenerator {
    fn label(&self) -> &str {
        "backgrounds"
    }

    fn output_dir(&self) -> &Path {
        &self.cfg.out_dir
    }

    fn generate(&mut self, index: u32, seed: u64) -> Result<PathBuf, AssetError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let plan = self.plan(&mut rng);
        debug!(
            "bg {index}: {} / {} / {:?} / {}",
            plan.renderer.name(),
            plan.palette,
            plan.effects,
            plan.format.extension()
        );

        let img = self.render(&plan, &mut rng)?;
        let path = self.write(index, &img, plan.format)?;

        if let Some(manifest) = self.manifest.as_mut() {
            let image = Self::file_name(index, plan.format);
            manifest.append(&JsonRecord {
                schema: "v1",
                image,
                index,
                seed,
                renderer: plan.renderer,
                palette: plan.palette,
                blur_sigma: plan.effects.blur_sigma,
                brightness: plan.effects.brightness,
                format: plan.format.extension(),
                quality: plan.format.quality(),
            })?;
        }

        Ok(path)
    }
}
