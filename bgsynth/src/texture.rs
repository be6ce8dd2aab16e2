use assetkit::Swatch;
use image::RgbImage;
use rand::{Rng, rngs::SmallRng};

use crate::draw::{canvas, in_bounds, polyline, px};

/// Sparse speckle: every second pixel on both axes has a 30% chance of an
/// opaque palette color.
pub fn noise(width: u32, height: u32, swatch: &Swatch, rng: &mut SmallRng) -> RgbImage {
    let mut img = canvas(width, height, swatch.pick(rng));

    for x in (0..width).step_by(2) {
        for y in (0..height).step_by(2) {
            if rng.random_bool(0.3) {
                img.put_pixel(x, y, px(swatch.pick(rng)));
            }
        }
    }
    img
}

/// Veins: short polylines wandering within 50 px of a random start point.
pub fn marble(width: u32, height: u32, swatch: &Swatch, rng: &mut SmallRng) -> RgbImage {
    let mut img = canvas(width, height, swatch.pick(rng));

    for _ in 0..rng.random_range(5..=15) {
        let color = swatch.pick(rng);
        let sx = rng.random_range(0..=width) as f32;
        let sy = rng.random_range(0..=height) as f32;

        let mut points = vec![(sx, sy)];
        for _ in 0..rng.random_range(3..=8) {
            let x = sx + rng.random_range(-50..=50) as f32;
            let y = sy + rng.random_range(-50..=50) as f32;
            if in_bounds(&img, x, y) {
                points.push((x, y));
            }
        }

        if points.len() > 1 {
            let stroke = rng.random_range(1..=3);
            polyline(&mut img, &points, color, stroke);
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn noise_points_are_opaque_palette_colors_on_even_cells() {
        let sw = Swatch::new(vec![
            assetkit::Color::rgb(0, 0, 0),
            assetkit::Color::rgb(255, 255, 255),
        ])
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(11);
        let img = noise(60, 40, &sw, &mut rng);
        let base = img.get_pixel(1, 1).0;

        let mut speckles = 0;
        for (x, y, p) in img.enumerate_pixels() {
            assert!(p.0 == [0, 0, 0] || p.0 == [255, 255, 255], "blended {p:?}");
            if p.0 != base {
                assert!(x % 2 == 0 && y % 2 == 0, "speckle off grid at {x},{y}");
                speckles += 1;
            }
        }
        assert!(speckles > 0);
    }
}
