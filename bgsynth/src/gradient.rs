use assetkit::{Color, Swatch};
use image::RgbImage;

use crate::draw::px;

/// Vertical two-color gradient: the top row is the first color, the bottom
/// row the second.
pub fn linear(width: u32, height: u32, swatch: &Swatch) -> RgbImage {
    let from = swatch.nth_or_last(0);
    let to = swatch.nth_or_last(1);
    let span = height.saturating_sub(1).max(1) as f64;

    let rows: Vec<_> = (0..height)
        .map(|y| px(from.lerp(to, y as f64 / span)))
        .collect();

    RgbImage::from_fn(width, height, |_, y| rows[y as usize])
}

/// Distance-from-center gradient over two stops, or three stops split at the
/// half radius when the swatch holds at least three colors.
pub fn radial(width: u32, height: u32, swatch: &Swatch) -> RgbImage {
    let cx = (width / 2) as f64;
    let cy = (height / 2) as f64;
    let max_r = (cx * cx + cy * cy).sqrt();
    let stops: Vec<Color> = swatch.colors().iter().copied().take(3).collect();

    RgbImage::from_fn(width, height, |x, y| {
        let d = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt();
        let ratio = if max_r > 0.0 { (d / max_r).min(1.0) } else { 0.0 };
        px(stop_color(&stops, ratio))
    })
}

fn stop_color(stops: &[Color], ratio: f64) -> Color {
    match stops {
        [only] => *only,
        [a, b] => a.lerp(*b, ratio),
        [a, b, c, ..] => {
            if ratio < 0.5 {
                a.lerp(*b, ratio * 2.0)
            } else {
                b.lerp(*c, (ratio - 0.5) * 2.0)
            }
        }
        [] => Color::rgb(0, 0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn red_blue() -> Swatch {
        Swatch::new(vec![RED, BLUE]).unwrap()
    }

    #[test]
    fn linear_runs_red_to_blue_monotonically() {
        let img = linear(40, 30, &red_blue());
        assert_eq!(img.dimensions(), (40, 30));
        for x in 0..40 {
            assert_eq!(img.get_pixel(x, 0).0, [255, 0, 0]);
            assert_eq!(img.get_pixel(x, 29).0, [0, 0, 255]);
        }
        for y in 1..30 {
            let prev = img.get_pixel(0, y - 1).0;
            let cur = img.get_pixel(0, y).0;
            assert!(cur[0] <= prev[0], "red rises at row {y}");
            assert!(cur[2] >= prev[2], "blue falls at row {y}");
            assert_eq!(cur[1], 0);
        }
    }

    #[test]
    fn linear_rows_are_uniform() {
        let img = linear(17, 9, &red_blue());
        for y in 0..9 {
            let first = img.get_pixel(0, y);
            assert!((0..17).all(|x| img.get_pixel(x, y) == first));
        }
    }

    #[test]
    fn single_row_or_single_color_does_not_panic() {
        let img = linear(5, 1, &red_blue());
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
        let img = linear(5, 5, &Swatch::new(vec![GREEN]).unwrap());
        assert!(img.pixels().all(|p| p.0 == [0, 255, 0]));
    }

    #[test]
    fn radial_two_stops_center_and_corner() {
        let img = radial(101, 101, &red_blue());
        assert_eq!(img.get_pixel(50, 50).0, [255, 0, 0]);
        // The corner distance equals the max radius.
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255]);
    }

    #[test]
    fn radial_three_stops_passes_through_middle() {
        let sw = Swatch::new(vec![RED, GREEN, BLUE]).unwrap();
        assert_eq!(stop_color(sw.colors(), 0.5), GREEN);
        assert_eq!(stop_color(sw.colors(), 0.0), RED);
        assert_eq!(stop_color(sw.colors(), 1.0), BLUE);

        let img = radial(64, 48, &sw);
        assert_eq!(img.get_pixel(32, 24).0, [255, 0, 0]);
    }

    #[test]
    fn radial_one_pixel() {
        let img = radial(1, 1, &red_blue());
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
    }
}
