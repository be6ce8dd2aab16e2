//! The decoration renderers. Each one fills a fresh document with randomly
//! placed shapes in palette colors; coordinates are in the 100×100 view box.

use std::f32::consts::PI;

use assetkit::Swatch;
use rand::{Rng, rngs::SmallRng};

use crate::svg::{Pt, Shape, SvgDocument};

fn int(rng: &mut SmallRng, lo: i32, hi: i32) -> f32 {
    rng.random_range(lo..=hi) as f32
}

fn point(rng: &mut SmallRng, lo: i32, hi: i32) -> Pt {
    (int(rng, lo, hi), int(rng, lo, hi))
}

fn opacity(rng: &mut SmallRng) -> f32 {
    rng.random_range(0.6..=0.9)
}

/// `n` vertices around `center`, `step` degrees apart, starting at 0°.
fn ring(center: Pt, n: usize, step: f32, radius: impl Fn(usize) -> f32) -> Vec<Pt> {
    (0..n)
        .map(|i| {
            let a = i as f32 * step * PI / 180.0;
            let r = radius(i);
            (center.0 + r * a.cos(), center.1 + r * a.sin())
        })
        .collect()
}

pub fn circles(doc: &mut SvgDocument, sw: &Swatch, rng: &mut SmallRng) {
    for _ in 0..rng.random_range(3..=8) {
        doc.push(Shape::Circle {
            center: point(rng, 10, 90),
            r: int(rng, 3, 12),
            fill: sw.pick(rng),
            opacity: opacity(rng),
        });
    }
}

pub fn geometric(doc: &mut SvgDocument, sw: &Swatch, rng: &mut SmallRng) {
    for _ in 0..rng.random_range(4..=7) {
        let fill = sw.pick(rng);
        let opacity = opacity(rng);
        let shape = match rng.random_range(0..3) {
            0 => Shape::Rect {
                origin: point(rng, 5, 80),
                size: point(rng, 8, 20),
                fill,
                opacity,
                rotate: Some(int(rng, 0, 360)),
            },
            1 => Shape::Polygon {
                points: (0..3).map(|_| point(rng, 10, 90)).collect(),
                fill,
                opacity,
            },
            _ => Shape::Ellipse {
                center: point(rng, 15, 85),
                radii: (int(rng, 8, 20), int(rng, 5, 15)),
                fill,
                opacity,
                rotate: None,
            },
        };
        doc.push(shape);
    }
}

/// Sweeping left-to-right curves plus a few blobs.
pub fn organic(doc: &mut SvgDocument, sw: &Swatch, rng: &mut SmallRng) {
    for _ in 0..rng.random_range(2..=4) {
        let stroke = sw.pick(rng);
        let opacity = opacity(rng);
        doc.push(Shape::Curve {
            from: (int(rng, 10, 30), int(rng, 20, 80)),
            ctrl: (int(rng, 30, 50), int(rng, 10, 40)),
            to: (int(rng, 70, 90), int(rng, 20, 80)),
            stroke,
            width: int(rng, 2, 6),
            opacity,
        });
    }
    for _ in 0..rng.random_range(2..=4) {
        doc.push(Shape::Circle {
            fill: sw.pick(rng),
            opacity: opacity(rng),
            center: point(rng, 15, 85),
            r: int(rng, 5, 15),
        });
    }
}

/// Five-pointed stars: ten vertices alternating outer and half radius.
pub fn stars(doc: &mut SvgDocument, sw: &Swatch, rng: &mut SmallRng) {
    for _ in 0..rng.random_range(3..=6) {
        let center = point(rng, 15, 85);
        let r = int(rng, 5, 12);
        doc.push(Shape::Polygon {
            points: ring(center, 10, 36.0, |i| if i % 2 == 0 { r } else { r * 0.5 }),
            fill: sw.pick(rng),
            opacity: opacity(rng),
        });
    }
}

pub fn abstract_strokes(doc: &mut SvgDocument, sw: &Swatch, rng: &mut SmallRng) {
    for _ in 0..rng.random_range(3..=6) {
        let stroke = sw.pick(rng);
        let opacity = opacity(rng);
        doc.push(Shape::Curve {
            from: point(rng, 10, 90),
            ctrl: point(rng, 10, 90),
            to: point(rng, 10, 90),
            stroke,
            width: int(rng, 3, 8),
            opacity,
        });
    }
    for _ in 0..rng.random_range(2..=4) {
        let fill = sw.pick(rng);
        let opacity = opacity(rng);
        let origin = point(rng, 15, 85);
        let side = int(rng, 8, 20);
        doc.push(Shape::Rect {
            origin,
            size: (side, side),
            fill,
            opacity,
            rotate: Some(int(rng, 0, 45)),
        });
    }
}

/// Confetti and streamers.
pub fn celebration(doc: &mut SvgDocument, sw: &Swatch, rng: &mut SmallRng) {
    for _ in 0..rng.random_range(8..=15) {
        let fill = sw.pick(rng);
        let opacity = opacity(rng);
        doc.push(Shape::Rect {
            origin: point(rng, 5, 95),
            size: point(rng, 2, 6),
            fill,
            opacity,
            rotate: Some(int(rng, 0, 360)),
        });
    }
    for _ in 0..rng.random_range(2..=4) {
        let stroke = sw.pick(rng);
        let opacity = opacity(rng);
        doc.push(Shape::Line {
            from: (int(rng, 10, 90), int(rng, 10, 30)),
            to: (int(rng, 10, 90), int(rng, 70, 90)),
            stroke,
            width: int(rng, 2, 5),
            opacity,
        });
    }
}

/// Leaves (rotated ellipses) and six-petal flowers.
pub fn nature(doc: &mut SvgDocument, sw: &Swatch, rng: &mut SmallRng) {
    for _ in 0..rng.random_range(3..=6) {
        let fill = sw.pick(rng);
        let opacity = opacity(rng);
        let center = point(rng, 15, 85);
        let size = int(rng, 8, 20);
        doc.push(Shape::Ellipse {
            center,
            radii: (size, size / 2.0),
            fill,
            opacity,
            rotate: Some(int(rng, 0, 360)),
        });
    }
    for _ in 0..rng.random_range(2..=4) {
        let fill = sw.pick(rng);
        let opacity = opacity(rng);
        let center = point(rng, 20, 80);
        let r = int(rng, 6, 15);
        for petal in ring(center, 6, 60.0, |_| r) {
            doc.push(Shape::Circle {
                center: petal,
                r: r * 0.4,
                fill,
                opacity,
            });
        }
        doc.push(Shape::Circle {
            center,
            r: r * 0.3,
            fill: sw.pick(rng),
            opacity,
        });
    }
}

/// Circuit traces: axis-aligned lines and solder points.
pub fn tech(doc: &mut SvgDocument, sw: &Swatch, rng: &mut SmallRng) {
    for _ in 0..rng.random_range(4..=8) {
        let stroke = sw.pick(rng);
        let opacity = opacity(rng);
        let from = point(rng, 10, 90);
        let to = if rng.random_bool(0.5) {
            (int(rng, 10, 90), from.1)
        } else {
            (from.0, int(rng, 10, 90))
        };
        doc.push(Shape::Line {
            from,
            to,
            stroke,
            width: int(rng, 1, 3),
            opacity,
        });
    }
    for _ in 0..rng.random_range(3..=6) {
        let fill = sw.pick(rng);
        let opacity = opacity(rng);
        doc.push(Shape::Circle {
            center: point(rng, 15, 85),
            r: int(rng, 2, 5),
            fill,
            opacity,
        });
    }
}

const VINTAGE_BORDER: [[Pt; 3]; 4] = [
    [(10.0, 10.0), (50.0, 20.0), (90.0, 10.0)],
    [(90.0, 10.0), (80.0, 50.0), (90.0, 90.0)],
    [(90.0, 90.0), (50.0, 80.0), (10.0, 90.0)],
    [(10.0, 90.0), (20.0, 50.0), (10.0, 10.0)],
];

const VINTAGE_CORNERS: [[Pt; 3]; 4] = [
    [(15.0, 15.0), (25.0, 25.0), (15.0, 35.0)],
    [(85.0, 15.0), (75.0, 25.0), (85.0, 35.0)],
    [(85.0, 85.0), (75.0, 75.0), (85.0, 65.0)],
    [(15.0, 85.0), (25.0, 75.0), (15.0, 65.0)],
];

/// Fixed ornamental frame; only colors, widths and opacities vary.
pub fn vintage(doc: &mut SvgDocument, sw: &Swatch, rng: &mut SmallRng) {
    for [from, ctrl, to] in VINTAGE_BORDER.into_iter().chain(VINTAGE_CORNERS) {
        let stroke = sw.pick(rng);
        let opacity = opacity(rng);
        doc.push(Shape::Curve {
            from,
            ctrl,
            to,
            stroke,
            width: int(rng, 2, 4),
            opacity,
        });
    }
}

pub fn minimal(doc: &mut SvgDocument, sw: &Swatch, rng: &mut SmallRng) {
    for _ in 0..rng.random_range(2..=4) {
        let fill = sw.pick(rng);
        let opacity = rng.random_range(0.7..=0.9);
        let shape = if rng.random_bool(0.5) {
            Shape::Circle {
                center: point(rng, 20, 80),
                r: int(rng, 8, 20),
                fill,
                opacity,
            }
        } else {
            Shape::Rect {
                origin: point(rng, 20, 70),
                size: point(rng, 15, 30),
                fill,
                opacity,
                rotate: None,
            }
        };
        doc.push(shape);
    }
}

pub fn playful(doc: &mut SvgDocument, sw: &Swatch, rng: &mut SmallRng) {
    for _ in 0..rng.random_range(4..=7) {
        let fill = sw.pick(rng);
        let opacity = opacity(rng);
        let shape = match rng.random_range(0..4) {
            0 => Shape::Circle {
                center: point(rng, 15, 85),
                r: int(rng, 5, 15),
                fill,
                opacity,
            },
            1 => {
                let center = point(rng, 20, 80);
                let r = int(rng, 8, 15);
                Shape::Polygon {
                    points: ring(center, 5, 72.0, |_| r),
                    fill,
                    opacity,
                }
            }
            2 => {
                let (x, y) = point(rng, 20, 80);
                let s = int(rng, 8, 20);
                Shape::Polygon {
                    points: vec![(x, y - s), (x - s, y + s), (x + s, y + s)],
                    fill,
                    opacity,
                }
            }
            _ => {
                let (x, y) = point(rng, 20, 80);
                let s = int(rng, 8, 20);
                Shape::Polygon {
                    points: vec![(x, y - s), (x + s, y), (x, y + s), (x - s, y)],
                    fill,
                    opacity,
                }
            }
        };
        doc.push(shape);
    }
}
