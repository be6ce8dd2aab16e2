use std::f32::consts::PI;

use assetkit::Swatch;
use image::RgbImage;
use rand::{Rng, rngs::SmallRng};

use crate::draw::{canvas, disc, in_bounds, polyline, rect};

pub fn stripes(width: u32, height: u32, swatch: &Swatch, rng: &mut SmallRng) -> RgbImage {
    let mut img = canvas(width, height, swatch.pick(rng));
    let stripe = rng.random_range(20..=60u32);
    let vertical = rng.random_bool(0.5);

    let extent = if vertical { width } else { height };
    for off in (0..extent).step_by(2 * stripe as usize) {
        let color = swatch.pick(rng);
        if vertical {
            rect(&mut img, off as i32, 0, stripe, height, color);
        } else {
            rect(&mut img, 0, off as i32, width, stripe, color);
        }
    }
    img
}

/// Dot grid with spacing three times the dot radius; each cell is kept with
/// probability 0.7.
pub fn dots(width: u32, height: u32, swatch: &Swatch, rng: &mut SmallRng) -> RgbImage {
    let mut img = canvas(width, height, swatch.pick(rng));
    let r = rng.random_range(4..=12u32);
    let spacing = r * 3;

    for x in (spacing..width).step_by(spacing as usize) {
        for y in (spacing..height).step_by(spacing as usize) {
            if rng.random_bool(0.7) {
                let color = swatch.pick(rng);
                disc(&mut img, x as i32, y as i32, r as i32, color);
            }
        }
    }
    img
}

/// Sine lines around the horizontal midline. Each line gets its own
/// amplitude and a phase equal to its ordinal.
pub fn waves(width: u32, height: u32, swatch: &Swatch, rng: &mut SmallRng) -> RgbImage {
    let mut img = canvas(width, height, swatch.pick(rng));
    let color = swatch.pick(rng);
    let stroke = rng.random_range(2..=5);
    let mid = (height / 2) as f32;

    for i in 0..rng.random_range(3..=7) {
        let amplitude = rng.random_range(30.0..=80.0f32);
        let points: Vec<(f32, f32)> = (0..width)
            .step_by(5)
            .map(|x| {
                let x = x as f32;
                (x, mid + (x * 0.02 + i as f32).sin() * amplitude)
            })
            .collect();
        if points.len() > 1 {
            polyline(&mut img, &points, color, stroke);
        }
    }
    img
}

pub fn checkerboard(width: u32, height: u32, swatch: &Swatch, rng: &mut SmallRng) -> RgbImage {
    let square = rng.random_range(20..=60u32);
    let mut img = canvas(width, height, swatch.nth_or_last(0));

    for x in (0..width).step_by(square as usize) {
        for y in (0..height).step_by(square as usize) {
            let color = swatch.pick(rng);
            rect(&mut img, x as i32, y as i32, square, square, color);
        }
    }
    img
}

/// Archimedean spiral from the center, ten turns in 10° steps with the radius
/// growing half a pixel per degree. Points off the canvas split the stroke.
pub fn spiral(width: u32, height: u32, swatch: &Swatch, rng: &mut SmallRng) -> RgbImage {
    let mut img = canvas(width, height, swatch.pick(rng));
    let color = swatch.pick(rng);
    let cx = (width / 2) as f32;
    let cy = (height / 2) as f32;

    let mut run: Vec<(f32, f32)> = Vec::new();
    for deg in (0..3600).step_by(10) {
        let angle = deg as f32 * PI / 180.0;
        let radius = deg as f32 * 0.5;
        let (x, y) = (cx + angle.cos() * radius, cy + angle.sin() * radius);

        if in_bounds(&img, x, y) {
            run.push((x, y));
        } else if !run.is_empty() {
            if run.len() > 1 {
                polyline(&mut img, &run, color, 3);
            }
            run.clear();
        }
    }
    if run.len() > 1 {
        polyline(&mut img, &run, color, 3);
    }
    img
}
