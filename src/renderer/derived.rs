//! Derived geometry — converts template ratios plus a target width into the
//! absolute coordinates of every marking in one quarter field.
//!
//! Quarter-local frame: origin at the outer corner of the baseline (goal
//! line), x grows toward the centre of the field's width, y grows toward the
//! middle of the field. Every coordinate is `ratio × quarter dimension`; the
//! other three quadrants are reflections and never computed here.

use serde::Serialize;

use crate::geometry::{exact_control_point, split_quadratic, Point};
use crate::model::{BasketballTemplate, FieldKind, FootballTemplate};

use super::constants::*;

/// Bounding box dimensions shared by both sports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldFrame {
    pub full_width: f64,
    pub full_height: f64,
    pub quarter_width: f64,
    pub quarter_height: f64,
    pub line_width: f64,
}

impl FieldFrame {
    fn new(kind: FieldKind, aspect_ratio: f64, width: f64, line_width: f64) -> Self {
        let full_height = width * aspect_ratio;
        let quarter_height = match kind {
            FieldKind::Half => full_height,
            FieldKind::Full => full_height / 2.0,
        };
        Self {
            full_width: width,
            full_height,
            quarter_width: width / 2.0,
            quarter_height,
            line_width,
        }
    }

    fn x(&self, ratio: f64) -> f64 {
        ratio * self.quarter_width
    }

    fn y(&self, ratio: f64) -> f64 {
        ratio * self.quarter_height
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Basketball
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BasketballGeometry {
    pub frame: FieldFrame,
    /// Size of the interior fill rectangle.
    pub interior_width: f64,
    pub interior_height: f64,

    pub three_point_start: Point,
    pub three_point_corner: Point,
    pub three_point_control: Point,
    pub three_point_vertex: Point,

    pub passing_line_start: Point,
    pub passing_line_end: Point,

    pub interior_line_start: Point,
    pub interior_line_corner: Point,
    pub interior_line_end: Point,
    /// Horizontal distance from the key's side to the centre line.
    pub interior_margin: f64,

    pub free_throw_center: Point,
    pub free_throw_radius: f64,

    pub three_second_zone_start: Point,
    pub three_second_zone_corner: Point,
    pub three_second_zone_end: Point,

    pub backboard_start: Point,
    pub backboard_end: Point,
    pub basket_center: Point,
    pub basket_radius: f64,

    pub center_circle_radius: f64,
}

impl BasketballGeometry {
    pub fn compute(template: &BasketballTemplate, width: f64) -> Self {
        let frame = FieldFrame::new(
            template.kind,
            template.aspect_ratio,
            width,
            template.main_lines_size.width(),
        );
        let qw = frame.quarter_width;

        let three_point_x = frame.x(template.three_point_line_starting_x_ratio);
        let corner_y = frame.y(template.three_point_line_bottom_corner_y_ratio);
        let vertex_y = frame.y(template.three_point_line_vertical_y_ratio);

        let passing_y = frame.y(template.passing_line_y_ratio);

        let interior_x = frame.x(template.interior_line_starting_x_ratio);
        let interior_y = frame.y(template.interior_line_vertical_y_ratio);
        let interior_margin = qw - interior_x;

        let zone_x = frame.x(template.three_second_zone_line_starting_x_ratio);
        let zone_y = frame.y(template.three_second_zone_line_vertical_y_ratio);

        let rebound_x = frame.x(template.rebound_x_ratio);
        let rebound_y = frame.y(template.rebound_y_ratio);

        let free_throw_radius = FREE_THROW_RADIUS_FACTOR * interior_margin;

        Self {
            frame,
            interior_width: frame.x(template.field_interior_ratio),
            interior_height: frame.y(template.field_interior_ratio),

            three_point_start: Point::new(three_point_x, 0.0),
            three_point_corner: Point::new(three_point_x, corner_y),
            three_point_control: Point::new(
                frame.x(template.three_point_line_curve_control_x_ratio),
                vertex_y,
            ),
            three_point_vertex: Point::new(qw, vertex_y),

            passing_line_start: Point::new(0.0, passing_y),
            passing_line_end: Point::new(PASSING_LINE_LENGTH_FACTOR * three_point_x, passing_y),

            interior_line_start: Point::new(interior_x, 0.0),
            interior_line_corner: Point::new(interior_x, interior_y),
            interior_line_end: Point::new(qw, interior_y),
            interior_margin,

            free_throw_center: Point::new(qw, interior_y),
            free_throw_radius,

            three_second_zone_start: Point::new(zone_x, 0.0),
            three_second_zone_corner: Point::new(zone_x, zone_y),
            three_second_zone_end: Point::new(qw, zone_y),

            backboard_start: Point::new(rebound_x, rebound_y),
            backboard_end: Point::new(qw, rebound_y),
            basket_center: Point::new(qw, rebound_y),
            basket_radius: BASKET_RADIUS_FACTOR * (qw - rebound_x),

            center_circle_radius: free_throw_radius,
        }
    }

    /// Named on-field coordinates, for inspection and bounds checks.
    pub fn points(&self) -> Vec<(&'static str, Point)> {
        vec![
            ("threePointStart", self.three_point_start),
            ("threePointCorner", self.three_point_corner),
            ("threePointControl", self.three_point_control),
            ("threePointVertex", self.three_point_vertex),
            ("passingLineStart", self.passing_line_start),
            ("passingLineEnd", self.passing_line_end),
            ("interiorLineStart", self.interior_line_start),
            ("interiorLineCorner", self.interior_line_corner),
            ("interiorLineEnd", self.interior_line_end),
            ("freeThrowCenter", self.free_throw_center),
            ("threeSecondZoneStart", self.three_second_zone_start),
            ("threeSecondZoneCorner", self.three_second_zone_corner),
            ("threeSecondZoneEnd", self.three_second_zone_end),
            ("backboardStart", self.backboard_start),
            ("backboardEnd", self.backboard_end),
            ("basketCenter", self.basket_center),
        ]
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Football
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootballGeometry {
    pub frame: FieldFrame,
    pub interior_width: f64,
    pub interior_height: f64,

    /// Goal area (small box).
    pub penalty_area_start: Point,
    pub penalty_area_corner: Point,
    pub penalty_area_end: Point,

    /// Penalty area (big box).
    pub big_penalty_area_start: Point,
    pub big_penalty_area_corner: Point,
    pub big_penalty_area_end: Point,

    /// Penalty arc across the whole half: `arc_start` in this quarter,
    /// `arc_end` its mirror image, passing through `arc_apex`.
    pub arc_start: Point,
    pub arc_end: Point,
    pub arc_apex: Point,
    /// Control point of the full arc, back-solved so the curve's midpoint is
    /// the apex. May lie outside the field.
    pub arc_control: Point,
    /// Control point of the quarter's half of the arc (start → apex).
    pub arc_quarter_control: Point,

    pub goalpost_start: Point,
    pub goalpost_corner: Point,
    pub goalpost_end: Point,

    pub penalty_point: Point,
    pub spot_radius: f64,

    pub corner_arc_center: Point,
    pub corner_arc_radius: f64,

    pub center_circle_radius: f64,
}

impl FootballGeometry {
    pub fn compute(template: &FootballTemplate, width: f64) -> Self {
        let frame = FieldFrame::new(
            template.kind,
            template.aspect_ratio,
            width,
            template.main_lines_size.width(),
        );
        let qw = frame.quarter_width;

        let small_x = frame.x(template.penalty_area_starting_x_ratio);
        let small_y = frame.y(template.penalty_area_vertical_y_ratio);
        let big_x = frame.x(template.big_penalty_area_starting_x_ratio);
        let big_y = frame.y(template.big_penalty_area_vertical_y_ratio);
        let goal_x = frame.x(template.goalpost_starting_x_ratio);
        let goal_y = frame.y(template.goalpost_vertical_y_ratio);
        let arc_x = frame.x(template.arc_x_ratio);

        let arc_start = Point::new(arc_x, big_y);
        let arc_end = arc_start.mirror_x(qw);
        let arc_apex = Point::new(qw, frame.y(template.arc_control_point_y_ratio));
        let arc_control = exact_control_point(arc_start, arc_end, arc_apex);
        let (arc_quarter_control, _, _) = split_quadratic(arc_start, arc_control, arc_end);

        Self {
            frame,
            interior_width: frame.x(template.field_interior_ratio),
            interior_height: frame.y(template.field_interior_ratio),

            penalty_area_start: Point::new(small_x, 0.0),
            penalty_area_corner: Point::new(small_x, small_y),
            penalty_area_end: Point::new(qw, small_y),

            big_penalty_area_start: Point::new(big_x, 0.0),
            big_penalty_area_corner: Point::new(big_x, big_y),
            big_penalty_area_end: Point::new(qw, big_y),

            arc_start,
            arc_end,
            arc_apex,
            arc_control,
            arc_quarter_control,

            goalpost_start: Point::new(goal_x, 0.0),
            goalpost_corner: Point::new(goal_x, goal_y),
            goalpost_end: Point::new(qw, goal_y),

            penalty_point: Point::new(qw, frame.y(template.penalty_point_y_ratio)),
            spot_radius: SPOT_RADIUS_FACTOR * qw,

            corner_arc_center: Point::new(0.0, 0.0),
            corner_arc_radius: CORNER_ARC_RADIUS_FACTOR * (qw - goal_x),

            center_circle_radius: qw - arc_x,
        }
    }

    /// Named on-field coordinates. `arc_control` and `arc_end` are left out:
    /// the first is off-curve, the second belongs to the mirrored quarter.
    pub fn points(&self) -> Vec<(&'static str, Point)> {
        vec![
            ("penaltyAreaStart", self.penalty_area_start),
            ("penaltyAreaCorner", self.penalty_area_corner),
            ("penaltyAreaEnd", self.penalty_area_end),
            ("bigPenaltyAreaStart", self.big_penalty_area_start),
            ("bigPenaltyAreaCorner", self.big_penalty_area_corner),
            ("bigPenaltyAreaEnd", self.big_penalty_area_end),
            ("arcStart", self.arc_start),
            ("arcApex", self.arc_apex),
            ("arcQuarterControl", self.arc_quarter_control),
            ("goalpostStart", self.goalpost_start),
            ("goalpostCorner", self.goalpost_corner),
            ("goalpostEnd", self.goalpost_end),
            ("penaltyPoint", self.penalty_point),
            ("cornerArcCenter", self.corner_arc_center),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use pretty_assertions::assert_eq;

    #[test]
    fn half_basketball_scenario() {
        let g = BasketballGeometry::compute(&defaults::half_basketball().template, 300.0);
        assert_eq!(g.frame.full_height, 285.0);
        assert_eq!(g.frame.quarter_width, 150.0);
        assert_eq!(g.frame.quarter_height, 285.0);
        assert!((g.three_point_start.x - 18.0).abs() < 1e-12);
        assert_eq!(g.frame.line_width, 2.5);
    }

    #[test]
    fn full_field_quarter_is_half_the_height() {
        let g = BasketballGeometry::compute(&defaults::full_basketball().template, 200.0);
        assert!((g.frame.full_height - 340.0).abs() < 1e-9);
        assert!((g.frame.quarter_height - 170.0).abs() < 1e-9);
    }

    #[test]
    fn derived_radii_follow_fixed_factors() {
        let g = BasketballGeometry::compute(&defaults::half_basketball().template, 300.0);
        // interior margin = 150 - 0.6 * 150 = 60
        assert!((g.interior_margin - 60.0).abs() < 1e-9);
        assert!((g.free_throw_radius - 42.0).abs() < 1e-9);
        // basket radius = 0.35 * (150 - 0.83 * 150)
        assert!((g.basket_radius - 0.35 * 25.5).abs() < 1e-9);
    }

    #[test]
    fn penalty_arc_passes_through_apex() {
        let g = FootballGeometry::compute(&defaults::half_football().template, 320.0);
        let mid = crate::geometry::quadratic_point(g.arc_start, g.arc_control, g.arc_end, 0.5);
        assert!(mid.distance(g.arc_apex) < 1e-9);
        // The quarter's half-curve is tangent to the centre line at the apex.
        assert!((g.arc_quarter_control.y - g.arc_apex.y).abs() < 1e-9);
        assert_eq!(g.arc_end.y, g.arc_start.y);
        assert!((g.arc_end.x - (320.0 - g.arc_start.x)).abs() < 1e-9);
    }

    #[test]
    fn compute_is_deterministic() {
        let t = defaults::half_football().template;
        let a = FootballGeometry::compute(&t, 287.3);
        let b = FootballGeometry::compute(&t, 287.3);
        assert_eq!(a, b);
        let t = defaults::full_basketball().template;
        assert_eq!(BasketballGeometry::compute(&t, 41.0), BasketballGeometry::compute(&t, 41.0));
    }

    #[test]
    fn zero_width_collapses_to_origin() {
        let g = BasketballGeometry::compute(&defaults::half_basketball().template, 0.0);
        for (name, p) in g.points() {
            assert_eq!((p.x, p.y), (0.0, 0.0), "{name}");
        }
        assert_eq!(g.free_throw_radius, 0.0);
        let g = FootballGeometry::compute(&defaults::full_football().template, 0.0);
        for (name, p) in g.points() {
            assert_eq!((p.x, p.y), (0.0, 0.0), "{name}");
        }
        assert_eq!(g.arc_control, Point::new(0.0, 0.0));
        assert_eq!(g.spot_radius, 0.0);
    }
}
