use assetkit::{Color, Palette};
use rand::{Rng, rngs::SmallRng};

const fn c(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(r, g, b)
}

pub static PALETTES: [Palette; 8] = [
    Palette::new(
        "warm",
        &[c(255, 107, 107), c(78, 205, 196), c(69, 183, 209), c(150, 206, 180), c(255, 234, 167)],
    ),
    Palette::new(
        "cool",
        &[c(108, 92, 231), c(162, 155, 254), c(253, 121, 168), c(116, 185, 255), c(9, 132, 227)],
    ),
    Palette::new(
        "earth",
        &[c(225, 112, 85), c(253, 203, 110), c(0, 184, 148), c(0, 206, 201), c(116, 185, 255)],
    ),
    Palette::new(
        "pastel",
        &[c(168, 230, 207), c(220, 237, 193), c(255, 211, 182), c(255, 182, 193), c(255, 203, 110)],
    ),
    Palette::new(
        "vibrant",
        &[c(255, 217, 61), c(255, 107, 107), c(255, 142, 142), c(108, 92, 231), c(162, 155, 254)],
    ),
    Palette::new(
        "monochrome",
        &[c(45, 52, 54), c(52, 73, 94), c(74, 85, 104), c(99, 110, 114), c(116, 125, 136)],
    ),
    Palette::new(
        "sunset",
        &[c(255, 107, 107), c(255, 159, 67), c(255, 203, 110), c(255, 142, 142), c(253, 121, 168)],
    ),
    Palette::new(
        "ocean",
        &[c(0, 184, 148), c(0, 206, 201), c(116, 185, 255), c(9, 132, 227), c(45, 52, 54)],
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
    use rand::SeedableRng;

    #[test]
    fn every_theme_is_registered() {
        for name in [
            "warm", "cool", "earth", "pastel", "vibrant", "monochrome", "sunset", "ocean",
        ] {
            let p = palette_for(name).unwrap();
            assert_eq!(p.colors().len(), 5, "{name}");
        }
        assert!(palette_for("neon").is_none());
    }

    #[test]
    fn random_selection_reaches_all_themes() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..400 {
            seen.insert(random_palette(&mut rng).name);
        }
        assert_eq!(seen.len(), PALETTES.len());
    }
}
