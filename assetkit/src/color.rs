use std::fmt;

use rand::{Rng, seq::IndexedRandom};

use crate::error::AssetError;

/// An opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn hex(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear interpolation, exact at `t = 0` and `t = 1`. `t` is clamped.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            let (a, b) = (a as f64, b as f64);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Multiplies every channel by `factor`, saturating at 0 and 255.
    pub fn scale(self, factor: f64) -> Color {
        let s = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Color {
            r: s(self.r),
            g: s(self.g),
            b: s(self.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A named, fixed color set. Always non-empty.
#[derive(Debug)]
pub struct Palette {
    pub name: &'static str,
    colors: &'static [Color],
}

impl Palette {
    pub const fn new(name: &'static str, colors: &'static [Color]) -> Self {
        assert!(!colors.is_empty(), "palette must not be empty");
        Self { name, colors }
    }

    pub fn colors(&self) -> &'static [Color] {
        self.colors
    }

    pub fn swatch(&self) -> Swatch {
        Swatch(self.colors.to_vec())
    }
}

/// The non-empty color list handed to one renderer call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Swatch(Vec<Color>);

impl Swatch {
    pub fn new(colors: Vec<Color>) -> Result<Self, AssetError> {
        if colors.is_empty() {
            return Err(AssetError::EmptyPalette);
        }
        Ok(Self(colors))
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: Color) -> bool {
        self.0.contains(&c)
    }

    /// Color at `i`, or the last color when the swatch is shorter.
    pub fn nth_or_last(&self, i: usize) -> Color {
        self.0[i.min(self.0.len() - 1)]
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.0[rng.random_range(0..self.0.len())]
    }

    /// Samples `n` entries without replacement, keeping at least one.
    pub fn sample_distinct<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Swatch {
        let n = n.clamp(1, self.0.len());
        Swatch(self.0.choose_multiple(rng, n).copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    #[test]
    fn hex_literal_and_display_agree() {
        let c = Color::hex(0xFF6B9D);
        assert_eq!(c, Color::rgb(255, 107, 157));
        assert_eq!(c.to_string(), "#FF6B9D");
        assert_eq!(Color::rgb(9, 132, 227).to_string(), "#0984E3");
    }

    #[test]
    fn lerp_hits_endpoints_and_is_monotonic() {
        assert_eq!(RED.lerp(BLUE, 0.0), RED);
        assert_eq!(RED.lerp(BLUE, 1.0), BLUE);
        assert_eq!(RED.lerp(BLUE, 7.0), BLUE);

        let mut prev = RED;
        for i in 1..=100 {
            let c = RED.lerp(BLUE, i as f64 / 100.0);
            assert!(c.r <= prev.r && c.b >= prev.b);
            prev = c;
        }
    }

    #[test]
    fn scale_saturates() {
        let c = Color::rgb(200, 100, 0);
        assert_eq!(c.scale(1.2), Color::rgb(240, 120, 0));
        assert_eq!(c.scale(2.0), Color::rgb(255, 200, 0));
        assert_eq!(c.scale(0.0), Color::rgb(0, 0, 0));
    }

    #[test]
    fn empty_swatch_is_rejected() {
        assert!(matches!(Swatch::new(vec![]), Err(AssetError::EmptyPalette)));
    }

    #[test]
    fn sample_distinct_draws_without_replacement() {
        let s = Swatch::new(vec![
            RED,
            BLUE,
            Color::rgb(0, 255, 0),
            Color::rgb(1, 2, 3),
        ])
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(3);
        for n in 1..=4 {
            let sub = s.sample_distinct(&mut rng, n);
            assert_eq!(sub.len(), n);
            for (i, c) in sub.colors().iter().enumerate() {
                assert!(s.contains(*c));
                assert!(!sub.colors()[i + 1..].contains(c));
            }
        }
        assert_eq!(s.sample_distinct(&mut rng, 9).len(), 4);
        assert_eq!(s.sample_distinct(&mut rng, 0).len(), 1);
    }

    #[test]
    fn nth_or_last_clamps() {
        let s = Swatch::new(vec![RED]).unwrap();
        assert_eq!(s.nth_or_last(0), RED);
        assert_eq!(s.nth_or_last(2), RED);
    }
}
