//! Planar points and the quadratic Bézier helpers the field markings need.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflect across the vertical line `x = axis`.
    pub fn mirror_x(self, axis: f64) -> Self {
        Self::new(2.0 * axis - self.x, self.y)
    }

    /// Reflect across the horizontal line `y = axis`.
    pub fn mirror_y(self, axis: f64) -> Self {
        Self::new(self.x, 2.0 * axis - self.y)
    }

    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Point on the circle of `radius` around `self` at `degrees`, measured
    /// from 3 o'clock and increasing clockwise on a y-down surface.
    pub fn on_circle(self, radius: f64, degrees: f64) -> Self {
        let rad = degrees.to_radians();
        Self::new(self.x + radius * rad.cos(), self.y + radius * rad.sin())
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Control point of the quadratic Bézier from `start` to `end` whose
/// midpoint (t = 0.5) lands on `apex`.
///
/// Inverts `B(0.5) = S/4 + C/2 + E/4` for `C`, giving `C = 2D − S/2 − E/2`.
pub fn exact_control_point(start: Point, end: Point, apex: Point) -> Point {
    Point::new(
        2.0 * apex.x - start.x / 2.0 - end.x / 2.0,
        2.0 * apex.y - start.y / 2.0 - end.y / 2.0,
    )
}

/// Evaluate a quadratic Bézier at `t`.
pub fn quadratic_point(start: Point, control: Point, end: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt;
    let b = 2.0 * mt * t;
    let c = t * t;
    Point::new(
        a * start.x + b * control.x + c * end.x,
        a * start.y + b * control.y + c * end.y,
    )
}

/// Split a quadratic Bézier at t = 0.5 (de Casteljau). Returns the control
/// points of the two halves and the shared midpoint:
/// `(first_control, mid, second_control)`.
pub fn split_quadratic(start: Point, control: Point, end: Point) -> (Point, Point, Point) {
    let first = start.midpoint(control);
    let second = control.midpoint(end);
    (first, first.midpoint(second), second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn control_point_for_penalty_arc_example() {
        let s = Point::new(100.0, 0.0);
        let e = Point::new(200.0, 0.0);
        let d = Point::new(150.0, 40.0);
        let c = exact_control_point(s, e, d);
        assert_eq!(c, Point::new(150.0, 80.0));
        assert!(close(quadratic_point(s, c, e, 0.5), d));
    }

    #[test]
    fn control_point_round_trips_for_arbitrary_points() {
        let samples = [-250.0, -3.5, 0.0, 0.25, 17.0, 999.5];
        for &sx in &samples {
            for &ey in &samples {
                for &dx in &samples {
                    let s = Point::new(sx, dx * 0.5);
                    let e = Point::new(ey - 1.0, sx);
                    let d = Point::new(dx, ey);
                    let c = exact_control_point(s, e, d);
                    let mid = quadratic_point(s, c, e, 0.5);
                    assert!(
                        (mid.x - d.x).abs() < 1e-9 && (mid.y - d.y).abs() < 1e-9,
                        "S={s:?} E={e:?} D={d:?} gave {mid:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn quadratic_endpoints() {
        let s = Point::new(1.0, 2.0);
        let c = Point::new(5.0, 9.0);
        let e = Point::new(7.0, -3.0);
        assert_eq!(quadratic_point(s, c, e, 0.0), s);
        assert_eq!(quadratic_point(s, c, e, 1.0), e);
    }

    #[test]
    fn split_halves_share_the_curve_midpoint() {
        let s = Point::new(0.0, 0.0);
        let c = Point::new(50.0, 100.0);
        let e = Point::new(100.0, 0.0);
        let (c1, mid, c2) = split_quadratic(s, c, e);
        assert!(close(mid, quadratic_point(s, c, e, 0.5)));
        // The first half at its own t=0.5 is the original curve at t=0.25.
        assert!(close(quadratic_point(s, c1, mid, 0.5), quadratic_point(s, c, e, 0.25)));
        assert!(close(quadratic_point(mid, c2, e, 0.5), quadratic_point(s, c, e, 0.75)));
    }

    #[test]
    fn on_circle_uses_clockwise_degrees() {
        let o = Point::new(10.0, 10.0);
        assert!(close(o.on_circle(5.0, 0.0), Point::new(15.0, 10.0)));
        assert!(close(o.on_circle(5.0, 90.0), Point::new(10.0, 15.0)));
        assert!(close(o.on_circle(5.0, 270.0), Point::new(10.0, 5.0)));
    }

    #[test]
    fn mirroring() {
        let p = Point::new(30.0, 12.0);
        assert_eq!(p.mirror_x(150.0), Point::new(270.0, 12.0));
        assert_eq!(p.mirror_y(100.0), Point::new(30.0, 188.0));
    }
}
