//! Raster background generator: palettes, pattern renderers, post effects,
//! encoders and the per-index generator driven by `assetkit::BatchDriver`.

pub mod config;
pub mod effects;
pub mod encode;
pub mod generator;
pub mod gradient;
pub mod io;
pub mod palettes;
pub mod record;
pub mod renderer;
pub mod shapes;
pub mod structured;
pub mod texture;

mod draw;

pub use config::BackgroundCfg;
pub use generator::{BackgroundGenerator, BackgroundPlan};
pub use renderer::{RendererKind, render};
