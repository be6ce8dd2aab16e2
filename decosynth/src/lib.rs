//! Vector decoration generator. Each asset is a small SVG document drawn by
//! one of a fixed set of pattern renderers in a themed palette.

pub mod config;
pub mod generator;
pub mod kind;
pub mod palettes;
pub mod patterns;
pub mod svg;

pub use config::DecorationCfg;
pub use generator::DecorationGenerator;
pub use kind::{DecorationKind, render};
pub use svg::{Shape, SvgDocument};
