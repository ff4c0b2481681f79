//! SVG builder — accumulates SVG elements and produces the final string.
//!
//! Also converts [`Path`] command lists into SVG path data.

use std::fmt::Write;

use crate::geometry::Point;
use crate::model::RgbaColor;

use super::constants::*;
use super::path::{arc_sweep, Path, PathCommand};
use super::{Shape, Style};

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            fmt_num(self.width),
            fmt_num(self.height),
            fmt_num(self.width),
            fmt_num(self.height)
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn shape(&mut self, shape: &Shape) {
        let d = path_data(&shape.path);
        if d.is_empty() {
            return;
        }
        match shape.style {
            Style::Stroke { color, width } => self.elements.push(format!(
                r#"<path d="{}" fill="none" stroke="{}"{} stroke-width="{:.2}" stroke-linecap="round" stroke-linejoin="round"/>"#,
                d,
                color.to_hex(),
                opacity_attr("stroke-opacity", &color),
                width
            )),
            Style::Fill { color } => self.elements.push(format!(
                r#"<path d="{}" fill="{}"{} stroke="none"/>"#,
                d,
                color.to_hex(),
                opacity_attr("fill-opacity", &color)
            )),
        }
    }
}

fn opacity_attr(name: &str, color: &RgbaColor) -> String {
    let opacity = color.opacity();
    if opacity >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{opacity:.3}""#)
    }
}

/// Two decimals, with trailing zeros trimmed and no negative zero.
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Path → SVG path data
// ═══════════════════════════════════════════════════════════════════════

/// Convert a path to an SVG `d` attribute.
///
/// Arcs become one `A` command (two for a full turn, which a single SVG arc
/// cannot express). An arc on an open subpath is joined with a line to its
/// start point; on an empty path it starts a new subpath.
pub(super) fn path_data(path: &Path) -> String {
    let mut d = String::new();
    let mut current: Option<Point> = None;
    let mut subpath_start: Option<Point> = None;

    for cmd in &path.commands {
        match *cmd {
            PathCommand::MoveTo(p) => {
                push_cmd(&mut d, "M", &[p]);
                current = Some(p);
                subpath_start = Some(p);
            }
            PathCommand::LineTo(p) => {
                if current.is_none() {
                    push_cmd(&mut d, "M", &[p]);
                    subpath_start = Some(p);
                } else {
                    push_cmd(&mut d, "L", &[p]);
                }
                current = Some(p);
            }
            PathCommand::QuadTo { control, to } => {
                if current.is_none() {
                    push_cmd(&mut d, "M", &[control]);
                    subpath_start = Some(control);
                }
                push_cmd(&mut d, "Q", &[control, to]);
                current = Some(to);
            }
            PathCommand::Arc { center, radius, start_angle, end_angle, clockwise } => {
                let start = center.on_circle(radius, start_angle);
                match current {
                    None => {
                        push_cmd(&mut d, "M", &[start]);
                        subpath_start = Some(start);
                    }
                    Some(c) if c.distance(start) > EPSILON => push_cmd(&mut d, "L", &[start]),
                    Some(_) => {}
                }
                let sweep = arc_sweep(start_angle, end_angle, clockwise);
                let end = center.on_circle(radius, start_angle + sweep);
                if radius > EPSILON && sweep.abs() > EPSILON {
                    let sweep_flag = u8::from(clockwise);
                    if sweep.abs() >= FULL_TURN - EPSILON {
                        let mid = center.on_circle(radius, start_angle + sweep / 2.0);
                        push_arc(&mut d, radius, false, sweep_flag, mid);
                        push_arc(&mut d, radius, false, sweep_flag, end);
                    } else {
                        push_arc(&mut d, radius, sweep.abs() > 180.0, sweep_flag, end);
                    }
                }
                current = Some(end);
            }
            PathCommand::Close => {
                if current.is_some() {
                    d.push_str(" Z");
                }
                current = subpath_start;
            }
        }
    }

    d.trim_start().to_string()
}

fn push_cmd(d: &mut String, letter: &str, points: &[Point]) {
    d.push(' ');
    d.push_str(letter);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{},{}", fmt_num(p.x), fmt_num(p.y));
    }
}

fn push_arc(d: &mut String, radius: f64, large_arc: bool, sweep_flag: u8, to: Point) {
    let r = fmt_num(radius);
    let _ = write!(
        d,
        " A{r},{r} 0 {} {} {},{}",
        u8::from(large_arc),
        sweep_flag,
        fmt_num(to.x),
        fmt_num(to.y)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::path;

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(18.0), "18");
        assert_eq!(fmt_num(2.5), "2.5");
        assert_eq!(fmt_num(8.924999), "8.92");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(-3.456), "-3.46");
    }

    #[test]
    fn polyline_data() {
        let p = path::corner_box(10.0, 20.0, 50.0, true);
        assert_eq!(path_data(&p), "M10,0 L10,20 L50,20 L50,0 L10,0 Z");
    }

    #[test]
    fn quadratic_data() {
        let p = path::quadratic(Point::new(0.0, 0.0), Point::new(5.0, 10.0), Point::new(10.0, 0.0));
        assert_eq!(path_data(&p), "M0,0 Q5,10 10,0");
    }

    #[test]
    fn clockwise_half_circle_uses_sweep_flag() {
        // 270° → 90° clockwise: from the top, round the right side, to the bottom.
        let p = path::arc(Point::new(50.0, 50.0), 10.0, 270.0, 90.0, true);
        assert_eq!(path_data(&p), "M50,40 A10,10 0 0 1 50,60");
    }

    #[test]
    fn counter_clockwise_major_arc_sets_large_flag() {
        let p = path::arc(Point::new(0.0, 0.0), 10.0, 0.0, 90.0, false);
        assert_eq!(path_data(&p), "M10,0 A10,10 0 1 0 0,10");
    }

    #[test]
    fn full_circle_is_split_in_two() {
        let p = path::circle(Point::new(20.0, 20.0), 5.0);
        assert_eq!(path_data(&p), "M25,20 A5,5 0 0 1 15,20 A5,5 0 0 1 25,20 Z");
    }

    #[test]
    fn arc_on_open_path_joins_with_a_line() {
        let p = path::line(Point::new(0.0, 0.0), Point::new(10.0, 0.0))
            .extend(path::arc(Point::new(20.0, 0.0), 5.0, 90.0, 270.0, true));
        assert_eq!(path_data(&p), "M0,0 L10,0 L20,5 A5,5 0 0 1 20,-5");
    }

    #[test]
    fn mirrored_circles_still_draw_both_halves() {
        let c = path::circle(Point::new(20.0, 20.0), 5.0);
        assert_eq!(
            path_data(&c.mirrored_x(50.0)),
            "M75,20 A5,5 0 0 0 85,20 A5,5 0 0 0 75,20 Z"
        );
        assert_eq!(
            path_data(&c.mirrored_y(50.0)),
            "M25,80 A5,5 0 0 0 15,80 A5,5 0 0 0 25,80 Z"
        );
    }

    #[test]
    fn zero_radius_arc_emits_no_arc_command() {
        let p = path::arc(Point::new(0.0, 0.0), 0.0, 90.0, 270.0, true);
        assert_eq!(path_data(&p), "M0,0");
    }

    #[test]
    fn builder_wraps_elements() {
        let mut svg = SvgBuilder::new(100.0, 95.0);
        svg.shape(&Shape::new(
            path::line(Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
            Style::Stroke { color: RgbaColor::rgb(255.0, 255.0, 255.0), width: 2.5 },
        ));
        svg.shape(&Shape::new(
            path::rectangle(Point::new(0.0, 0.0), 10.0, 10.0),
            Style::Fill { color: RgbaColor::rgba(0.0, 0.0, 255.0, 127.5) },
        ));
        let out = svg.build();
        assert!(out.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 95""#));
        assert!(out.contains(r##"stroke="#ffffff" stroke-width="2.50""##));
        assert!(out.contains(r##"fill="#0000ff" fill-opacity="0.500""##));
        assert!(out.ends_with("</svg>\n"));
    }
}
