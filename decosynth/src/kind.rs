use assetkit::Swatch;
use rand::{Rng, rngs::SmallRng};

use crate::{patterns, svg::SvgDocument};

/// Labels used only in file names.
pub const CATEGORIES: [&str; 10] = [
    "geometric",
    "organic",
    "celebration",
    "nature",
    "tech",
    "vintage",
    "minimal",
    "playful",
    "abstract",
    "artistic",
];

pub fn random_category(rng: &mut SmallRng) -> &'static str {
    CATEGORIES[rng.random_range(0..CATEGORIES.len())]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    Circle,
    Geometric,
    Organic,
    Star,
    Abstract,
    Celebration,
    Nature,
    Tech,
    Vintage,
    Minimal,
    Playful,
}

impl DecorationKind {
    pub const ALL: [DecorationKind; 11] = [
        DecorationKind::Circle,
        DecorationKind::Geometric,
        DecorationKind::Organic,
        DecorationKind::Star,
        DecorationKind::Abstract,
        DecorationKind::Celebration,
        DecorationKind::Nature,
        DecorationKind::Tech,
        DecorationKind::Vintage,
        DecorationKind::Minimal,
        DecorationKind::Playful,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DecorationKind::Circle => "circle",
            DecorationKind::Geometric => "geometric",
            DecorationKind::Organic => "organic",
            DecorationKind::Star => "star",
            DecorationKind::Abstract => "abstract",
            DecorationKind::Celebration => "celebration",
            DecorationKind::Nature => "nature",
            DecorationKind::Tech => "tech",
            DecorationKind::Vintage => "vintage",
            DecorationKind::Minimal => "minimal",
            DecorationKind::Playful => "playful",
        }
    }

    pub fn random(rng: &mut SmallRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Renders one decoration; `name` becomes the document id.
pub fn render(kind: DecorationKind, name: &str, swatch: &Swatch, rng: &mut SmallRng) -> SvgDocument {
    let mut doc = SvgDocument::new(name);
    let draw = match kind {
        DecorationKind::Circle => patterns::circles,
        DecorationKind::Geometric => patterns::geometric,
        DecorationKind::Organic => patterns::organic,
        DecorationKind::Star => patterns::stars,
        DecorationKind::Abstract => patterns::abstract_strokes,
        DecorationKind::Celebration => patterns::celebration,
        DecorationKind::Nature => patterns::nature,
        DecorationKind::Tech => patterns::tech,
        DecorationKind::Vintage => patterns::vintage,
        DecorationKind::Minimal => patterns::minimal,
        DecorationKind::Playful => patterns::playful,
    };
    draw(&mut doc, swatch, rng);
    doc
}
