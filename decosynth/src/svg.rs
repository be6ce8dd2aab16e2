use std::fmt;

use assetkit::Color;

/// Decorations are drawn in a fixed 100×100 user space.
pub const VIEW_SIZE: u32 = 100;

pub type Pt = (f32, f32);

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle {
        center: Pt,
        r: f32,
        fill: Color,
        opacity: f32,
    },
    /// `rotate` is in degrees about the rectangle's center.
    Rect {
        origin: Pt,
        size: Pt,
        fill: Color,
        opacity: f32,
        rotate: Option<f32>,
    },
    /// `rotate` is in degrees about the ellipse's center.
    Ellipse {
        center: Pt,
        radii: Pt,
        fill: Color,
        opacity: f32,
        rotate: Option<f32>,
    },
    Polygon {
        points: Vec<Pt>,
        fill: Color,
        opacity: f32,
    },
    /// Quadratic Bézier stroke.
    Curve {
        from: Pt,
        ctrl: Pt,
        to: Pt,
        stroke: Color,
        width: f32,
        opacity: f32,
    },
    Line {
        from: Pt,
        to: Pt,
        stroke: Color,
        width: f32,
        opacity: f32,
    },
}

impl Shape {
    /// The fill or stroke color.
    pub fn paint(&self) -> Color {
        match self {
            Shape::Circle { fill, .. }
            | Shape::Rect { fill, .. }
            | Shape::Ellipse { fill, .. }
            | Shape::Polygon { fill, .. } => *fill,
            Shape::Curve { stroke, .. } | Shape::Line { stroke, .. } => *stroke,
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            Shape::Circle { opacity, .. }
            | Shape::Rect { opacity, .. }
            | Shape::Ellipse { opacity, .. }
            | Shape::Polygon { opacity, .. }
            | Shape::Curve { opacity, .. }
            | Shape::Line { opacity, .. } => *opacity,
        }
    }
}

/// Compact number: integers without a fraction, others with at most two
/// decimals.
struct N(f32);

impl fmt::Display for N {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = (self.0 * 100.0).round() / 100.0;
        if v.fract() == 0.0 {
            write!(f, "{}", v as i64)
        } else {
            let s = format!("{v:.2}");
            f.write_str(s.trim_end_matches('0'))
        }
    }
}

struct Rotation(Option<f32>, Pt);

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(deg) => write!(
                f,
                r#" transform="rotate({} {} {})""#,
                N(deg),
                N(self.1.0),
                N(self.1.1)
            ),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle {
                center,
                r,
                fill,
                opacity,
            } => write!(
                f,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}" opacity="{opacity:.2}"/>"#,
                N(center.0),
                N(center.1),
                N(*r)
            ),
            Shape::Rect {
                origin,
                size,
                fill,
                opacity,
                rotate,
            } => {
                let pivot = (origin.0 + size.0 / 2.0, origin.1 + size.1 / 2.0);
                write!(
                    f,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}" opacity="{opacity:.2}"{}/>"#,
                    N(origin.0),
                    N(origin.1),
                    N(size.0),
                    N(size.1),
                    Rotation(*rotate, pivot)
                )
            }
            Shape::Ellipse {
                center,
                radii,
                fill,
                opacity,
                rotate,
            } => write!(
                f,
                r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{fill}" opacity="{opacity:.2}"{}/>"#,
                N(center.0),
                N(center.1),
                N(radii.0),
                N(radii.1),
                Rotation(*rotate, *center)
            ),
            Shape::Polygon {
                points,
                fill,
                opacity,
            } => {
                f.write_str(r#"<polygon points=""#)?;
                for (i, (x, y)) in points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{},{}", N(*x), N(*y))?;
                }
                write!(f, r#"" fill="{fill}" opacity="{opacity:.2}"/>"#)
            }
            Shape::Curve {
                from,
                ctrl,
                to,
                stroke,
                width,
                opacity,
            } => write!(
                f,
                r#"<path d="M{},{} Q{},{} {},{}" stroke="{stroke}" stroke-width="{}" fill="none" opacity="{opacity:.2}"/>"#,
                N(from.0),
                N(from.1),
                N(ctrl.0),
                N(ctrl.1),
                N(to.0),
                N(to.1),
                N(*width)
            ),
            Shape::Line {
                from,
                to,
                stroke,
                width,
                opacity,
            } => write!(
                f,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{}" opacity="{opacity:.2}"/>"#,
                N(from.0),
                N(from.1),
                N(to.0),
                N(to.1),
                N(*width)
            ),
        }
    }
}

/// An SVG 1.1 document over the fixed view box, one shape per line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgDocument {
    id: String,
    shapes: Vec<Shape>,
}

impl SvgDocument {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<svg")?;
        if !self.id.is_empty() {
            write!(f, r#" id="{}""#, escape_attr(&self.id))?;
        }
        writeln!(
            f,
            r#" width="{VIEW_SIZE}" height="{VIEW_SIZE}" viewBox="0 0 {VIEW_SIZE} {VIEW_SIZE}" version="1.1" xmlns="http://www.w3.org/2000/svg">"#
        )?;
        for shape in &self.shapes {
            writeln!(f, "  {shape}")?;
        }
        f.write_str("</svg>")
    }
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
