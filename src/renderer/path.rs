//! Vector path description and the stateless builders that produce it.
//!
//! Angles are in degrees, 0° at 3 o'clock, increasing clockwise on the
//! y-down drawing surface. An arc drawn clockwise from 270° to 90° passes
//! through 0° and covers the right half of its circle.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

use super::constants::FULL_TURN;

/// One drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "camelCase")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, to: Point },
    /// Circular arc. Like a canvas `arc`, it is joined to the current point
    /// with a straight segment when the path is already open.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    },
    Close,
}

/// An ordered list of drawing commands.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn quad_to(mut self, control: Point, to: Point) -> Self {
        self.commands.push(PathCommand::QuadTo { control, to });
        self
    }

    pub fn arc(
        mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Append every command of `other`.
    pub fn extend(mut self, other: Path) -> Self {
        self.commands.extend(other.commands);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Reflect across `x = axis`. Arcs keep their shape and extent: angles
    /// map to `180° − θ` and the sweep direction flips.
    pub fn mirrored_x(&self, axis: f64) -> Path {
        self.map(|p| p.mirror_x(axis), |a| 180.0 - a)
    }

    /// Reflect across `y = axis`. Angles map to `−θ` and the sweep
    /// direction flips.
    pub fn mirrored_y(&self, axis: f64) -> Path {
        self.map(|p| p.mirror_y(axis), |a| -a)
    }

    fn map(&self, point: impl Fn(Point) -> Point, angle: impl Fn(f64) -> f64) -> Path {
        let commands = self
            .commands
            .iter()
            .map(|cmd| match *cmd {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(point(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(point(p)),
                PathCommand::QuadTo { control, to } => PathCommand::QuadTo {
                    control: point(control),
                    to: point(to),
                },
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    clockwise,
                } => {
                    // End from the sweep: a full turn has equal end angles.
                    let sweep = arc_sweep(start_angle, end_angle, clockwise);
                    let start = normalize_degrees(angle(start_angle));
                    let mut end = start - sweep;
                    if sweep.abs() < FULL_TURN {
                        end = normalize_degrees(end);
                    }
                    PathCommand::Arc {
                        center: point(center),
                        radius,
                        start_angle: start,
                        end_angle: end,
                        clockwise: !clockwise,
                    }
                }
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Path { commands }
    }

    /// Every point the path references: endpoints, control points, arc
    /// centres and arc endpoints.
    pub fn points(&self) -> Vec<Point> {
        let mut out = Vec::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => out.push(p),
                PathCommand::QuadTo { control, to } => {
                    out.push(control);
                    out.push(to);
                }
                PathCommand::Arc { center, radius, start_angle, end_angle, .. } => {
                    out.push(center);
                    out.push(center.on_circle(radius, start_angle));
                    out.push(center.on_circle(radius, end_angle));
                }
                PathCommand::Close => {}
            }
        }
        out
    }
}

/// Map an angle into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if a >= 360.0 { 0.0 } else { a }
}

/// Signed sweep of an arc in degrees: positive clockwise, negative
/// counter-clockwise. Equal angles that differ by a whole turn sweep a full
/// circle; identical angles sweep nothing.
pub fn arc_sweep(start_angle: f64, end_angle: f64, clockwise: bool) -> f64 {
    let raw = if clockwise { end_angle - start_angle } else { start_angle - end_angle };
    let mut sweep = raw.rem_euclid(360.0);
    if sweep == 0.0 && raw != 0.0 {
        sweep = 360.0;
    }
    if clockwise { sweep } else { -sweep }
}

// ═══════════════════════════════════════════════════════════════════════
// Builders
// ═══════════════════════════════════════════════════════════════════════

pub fn line(from: Point, to: Point) -> Path {
    Path::new().move_to(from).line_to(to)
}

/// Open polyline through `points`.
pub fn polyline(points: &[Point]) -> Path {
    let mut iter = points.iter();
    let Some(&first) = iter.next() else {
        return Path::new();
    };
    iter.fold(Path::new().move_to(first), |path, &p| path.line_to(p))
}

pub fn rectangle(origin: Point, width: f64, height: f64) -> Path {
    Path::new()
        .move_to(origin)
        .line_to(Point::new(origin.x + width, origin.y))
        .line_to(Point::new(origin.x + width, origin.y + height))
        .line_to(Point::new(origin.x, origin.y + height))
        .close()
}

pub fn quadratic(start: Point, control: Point, end: Point) -> Path {
    Path::new().move_to(start).quad_to(control, end)
}

/// Stand-alone arc (no leading segment).
pub fn arc(center: Point, radius: f64, start_angle: f64, end_angle: f64, clockwise: bool) -> Path {
    Path::new().arc(center, radius, start_angle, end_angle, clockwise)
}

pub fn circle(center: Point, radius: f64) -> Path {
    arc(center, radius, 0.0, 360.0, true).close()
}

/// L-shaped marking from the baseline: down from `(x, 0)` to `(x, depth)`
/// then across to `(quarter_width, depth)`. With `filled`, the region is
/// closed back along the quarter boundary through `(quarter_width, 0)`.
pub fn corner_box(x: f64, depth: f64, quarter_width: f64, filled: bool) -> Path {
    let path = polyline(&[
        Point::new(x, 0.0),
        Point::new(x, depth),
        Point::new(quarter_width, depth),
    ]);
    if filled {
        close_to_baseline(path, x, quarter_width)
    } else {
        path
    }
}

/// Close an open marking that starts on the baseline at `start_x` and ends
/// on the centre line: back up to `(quarter_width, 0)`, then along the
/// baseline to the start.
pub fn close_to_baseline(path: Path, start_x: f64, quarter_width: f64) -> Path {
    path.line_to(Point::new(quarter_width, 0.0))
        .line_to(Point::new(start_x, 0.0))
        .close()
}
