use assetkit::Swatch;
use image::RgbImage;
use imageproc::point::Point;
use rand::{Rng, rngs::SmallRng};

use crate::draw::{canvas, disc, polygon, rect};

/// 10–25 circles and squares scattered over a base fill.
pub fn geometric(width: u32, height: u32, swatch: &Swatch, rng: &mut SmallRng) -> RgbImage {
    let mut img = canvas(width, height, swatch.pick(rng));

    for _ in 0..rng.random_range(10..=25) {
        let color = swatch.pick(rng);
        let x = rng.random_range(0..=width) as i32;
        let y = rng.random_range(0..=height) as i32;
        let size = rng.random_range(20..=100);

        if rng.random_bool(0.5) {
            disc(&mut img, x, y, size, color);
        } else {
            let side = (2 * size + 1) as u32;
            rect(&mut img, x - size, y - size, side, side, color);
        }
    }
    img
}

/// 8–15 filled polygons with 4–8 vertices anywhere on the canvas.
pub fn organic(width: u32, height: u32, swatch: &Swatch, rng: &mut SmallRng) -> RgbImage {
    let mut img = canvas(width, height, swatch.pick(rng));

    for _ in 0..rng.random_range(8..=15) {
        let color = swatch.pick(rng);
        let points = (0..rng.random_range(4..=8))
            .map(|_| {
                Point::new(
                    rng.random_range(0..=width) as i32,
                    rng.random_range(0..=height) as i32,
                )
            })
            .collect();
        polygon(&mut img, points, color);
    }
    img
}
