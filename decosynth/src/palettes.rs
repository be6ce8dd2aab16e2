use assetkit::{Color, Palette};
use rand::{Rng, rngs::SmallRng};

pub static PALETTES: [Palette; 4] = [
    Palette::new(
        "warm",
        &[
            Color::hex(0xFF6B6B),
            Color::hex(0xFF8E8E),
            Color::hex(0xFFB3B3),
            Color::hex(0xFFD93D),
            Color::hex(0xFFE66D),
            Color::hex(0xFF6B9D),
        ],
    ),
    Palette::new(
        "cool",
        &[
            Color::hex(0x4ECDC4),
            Color::hex(0x45B7D1),
            Color::hex(0x96CEB4),
            Color::hex(0x6C5CE7),
            Color::hex(0xA29BFE),
            Color::hex(0x74B9FF),
        ],
    ),
    // Two grays appear twice, which doubles their weight.
    Palette::new(
        "neutral",
        &[
            Color::hex(0x636E72),
            Color::hex(0xB2BEC3),
            Color::hex(0xDFE6E9),
            Color::hex(0x2D3436),
            Color::hex(0x636E72),
            Color::hex(0xB2BEC3),
        ],
    ),
    Palette::new(
        "pastel",
        &[
            Color::hex(0xFFB3BA),
            Color::hex(0xBAFFC9),
            Color::hex(0xBAE1FF),
            Color::hex(0xFFFFBA),
            Color::hex(0xFFB3F7),
            Color::hex(0xB3F7FF),
        ],
    ),
];

pub fn palette_for(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|p| p.name == name)
}

pub fn random_palette(rng: &mut SmallRng) -> &'static Palette {
    &PALETTES[rng.random_range(0..PALETTES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_are_registered() {
        for name in ["warm", "cool", "neutral", "pastel"] {
            assert_eq!(palette_for(name).unwrap().colors().len(), 6);
        }
        assert!(palette_for("earth").is_none());
    }
}
