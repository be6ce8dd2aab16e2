//! Thin helpers over `imageproc::drawing` for the primitives the renderers
//! share.

use assetkit::Color;
use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut},
    point::Point,
    rect::Rect,
};

pub(crate) fn px(c: Color) -> Rgb<u8> {
    Rgb(c.channels())
}

pub(crate) fn canvas(width: u32, height: u32, base: Color) -> RgbImage {
    RgbImage::from_pixel(width, height, px(base))
}

pub(crate) fn in_bounds(img: &RgbImage, x: f32, y: f32) -> bool {
    x >= 0.0 && y >= 0.0 && x < img.width() as f32 && y < img.height() as f32
}

/// Axis-aligned square or rectangle given by its top-left corner. Clipped to
/// the canvas.
pub(crate) fn rect(img: &mut RgbImage, x: i32, y: i32, w: u32, h: u32, color: Color) {
    if w == 0 || h == 0 {
        return;
    }
    draw_filled_rect_mut(img, Rect::at(x, y).of_size(w, h), px(color));
}

pub(crate) fn disc(img: &mut RgbImage, cx: i32, cy: i32, r: i32, color: Color) {
    draw_filled_circle_mut(img, (cx, cy), r, px(color));
}

/// Filled polygon. Closing duplicates are dropped; fewer than three distinct
/// vertices draws nothing.
pub(crate) fn polygon(img: &mut RgbImage, mut points: Vec<Point<i32>>, color: Color) {
    points.dedup();
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.len() < 3 {
        return;
    }
    draw_polygon_mut(img, &points, px(color));
}

/// Pixel offsets of a round brush exactly `width` pixels across. Even widths
/// sit half a pixel down and right of the stamp point.
fn brush(width: u32) -> Vec<(i32, i32)> {
    let w = width.max(1) as i32;
    let lo = -(w - 1) / 2;
    let hi = lo + w - 1;
    let c = (lo + hi) as f32 / 2.0;
    let r2 = (width as f32 / 2.0).powi(2) + 0.01;

    let mut offsets = Vec::new();
    for dy in lo..=hi {
        for dx in lo..=hi {
            if (dx as f32 - c).powi(2) + (dy as f32 - c).powi(2) <= r2 {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

fn stamp(img: &mut RgbImage, x: f32, y: f32, brush: &[(i32, i32)], pixel: Rgb<u8>) {
    let (x, y) = (x.round() as i64, y.round() as i64);
    let (w, h) = (img.width() as i64, img.height() as i64);
    for &(dx, dy) in brush {
        let (px, py) = (x + dx as i64, y + dy as i64);
        if (0..w).contains(&px) && (0..h).contains(&py) {
            img.put_pixel(px as u32, py as u32, pixel);
        }
    }
}

/// Open polyline whose stroke is `width` pixels thick. Hairlines go through
/// `draw_line_segment_mut`; wider strokes stamp a round brush along each
/// segment.
pub(crate) fn polyline(img: &mut RgbImage, points: &[(f32, f32)], color: Color, width: u32) {
    let pixel = px(color);
    if width <= 1 && points.len() > 1 {
        for seg in points.windows(2) {
            draw_line_segment_mut(img, seg[0], seg[1], pixel);
        }
        return;
    }

    let brush = brush(width);
    if let [(x, y)] = points {
        stamp(img, *x, *y, &brush, pixel);
        return;
    }
    for seg in points.windows(2) {
        let (a, b) = (seg[0], seg[1]);
        let len = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        let steps = (len.ceil() as usize).max(1);
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            stamp(img, a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t, &brush, pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::rgb(0, 0, 0);
    const FG: Color = Color::rgb(255, 255, 255);

    fn lit(img: &RgbImage) -> usize {
        img.pixels().filter(|p| p.0 == FG.channels()).count()
    }

    #[test]
    fn degenerate_polygons_are_ignored() {
        let mut img = canvas(20, 20, BG);
        polygon(&mut img, vec![Point::new(1, 1), Point::new(5, 5), Point::new(1, 1)], FG);
        polygon(&mut img, vec![Point::new(3, 3); 4], FG);
        assert_eq!(lit(&img), 0);

        polygon(
            &mut img,
            vec![Point::new(2, 2), Point::new(15, 2), Point::new(15, 15), Point::new(2, 2)],
            FG,
        );
        assert!(lit(&img) > 0);
    }

    #[test]
    fn rect_is_clipped_to_canvas() {
        let mut img = canvas(10, 10, BG);
        rect(&mut img, -5, -5, 30, 30, FG);
        assert_eq!(lit(&img), 100);
        rect(&mut img, 50, 50, 0, 4, BG);
    }

    fn column_thickness(img: &RgbImage, x: u32) -> usize {
        (0..img.height()).filter(|&y| img.get_pixel(x, y).0 == FG.channels()).count()
    }

    fn row_thickness(img: &RgbImage, y: u32) -> usize {
        (0..img.width()).filter(|&x| img.get_pixel(x, y).0 == FG.channels()).count()
    }

    #[test]
    fn stroke_thickness_matches_width() {
        for width in 1..=6 {
            let mut img = canvas(40, 40, BG);
            polyline(&mut img, &[(2.0, 20.0), (37.0, 20.0)], FG, width);
            assert_eq!(column_thickness(&img, 15), width as usize, "horizontal {width}");

            let mut img = canvas(40, 40, BG);
            polyline(&mut img, &[(20.0, 2.0), (20.0, 37.0)], FG, width);
            assert_eq!(row_thickness(&img, 15), width as usize, "vertical {width}");
        }
    }

    #[test]
    fn brush_spans_width_on_both_axes() {
        for width in 1..=8 {
            let b = brush(width);
            let xs: std::collections::HashSet<i32> = b.iter().map(|p| p.0).collect();
            let ys: std::collections::HashSet<i32> = b.iter().map(|p| p.1).collect();
            assert_eq!(xs.len(), width as usize);
            assert_eq!(ys.len(), width as usize);
        }
    }

    #[test]
    fn stroke_near_edge_is_clipped() {
        let mut img = canvas(10, 10, BG);
        polyline(&mut img, &[(-5.0, 0.0), (15.0, 0.0)], FG, 3);
        assert_eq!(lit(&img), 20);
    }

    #[test]
    fn in_bounds_is_half_open() {
        let img = canvas(4, 3, BG);
        assert!(in_bounds(&img, 0.0, 0.0));
        assert!(in_bounds(&img, 3.9, 2.9));
        assert!(!in_bounds(&img, 4.0, 1.0));
        assert!(!in_bounds(&img, 1.0, -0.1));
    }
}
