use std::{
    fs,
    path::{Path, PathBuf},
};

use assetkit::{AssetError, AssetGenerator};
use log::debug;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    config::DecorationCfg,
    kind::{self, DecorationKind},
    palettes,
    svg::SvgDocument,
};

pub struct DecorationGenerator {
    cfg: DecorationCfg,
}

impl DecorationGenerator {
    pub fn new(cfg: DecorationCfg) -> Self {
        Self { cfg }
    }

    pub fn asset_name(index: u32, category: &str) -> String {
        format!("decoration-{index:03}-{category}")
    }

    /// Picks category, renderer and theme, then renders.
    pub fn compose(index: u32, rng: &mut SmallRng) -> SvgDocument {
        let category = kind::random_category(rng);
        let kind = DecorationKind::random(rng);
        let palette = palettes::random_palette(rng);
        let name = Self::asset_name(index, category);
        debug!("{name}: {} / {}", kind.name(), palette.name);
        kind::render(kind, &name, &palette.swatch(), rng)
    }

    pub fn write(&self, doc: &SvgDocument) -> Result<PathBuf, AssetError> {
        let dir = &self.cfg.out_dir;
        fs::create_dir_all(dir).map_err(|source| AssetError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(format!("{}.svg", doc.id()));
        fs::write(&path, doc.to_string()).map_err(|source| AssetError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

impl AssetGenerator for DecorationGenerator {
    fn label(&self) -> &str {
        "decorations"
    }

    fn output_dir(&self) -> &Path {
        &self.cfg.out_dir
    }

    fn generate(&mut self, index: u32, seed: u64) -> Result<PathBuf, AssetError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let doc = Self::compose(index, &mut rng);
        self.write(&doc)
    }
}
