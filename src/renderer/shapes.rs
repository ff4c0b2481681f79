//! Quarter-field markings for each sport.
//!
//! Everything here is drawn once, in the quarter-local frame; the composer
//! reflects it into the other quadrants.

use crate::geometry::Point;
use crate::model::{BasketballColors, FootballColors};

use super::constants::*;
use super::derived::{BasketballGeometry, FootballGeometry};
use super::path::{self, Path};
use super::{Shape, Style};

/// Shapes of one quarter, split so fills from every quadrant land beneath
/// the line work of every quadrant.
#[derive(Debug, Clone, Default)]
pub(super) struct QuarterShapes {
    pub(super) underlay: Vec<Shape>,
    pub(super) overlay: Vec<Shape>,
}

impl QuarterShapes {
    pub(super) fn mirrored_x(&self, axis: f64) -> Self {
        Self {
            underlay: self.underlay.iter().map(|s| s.mirrored_x(axis)).collect(),
            overlay: self.overlay.iter().map(|s| s.mirrored_x(axis)).collect(),
        }
    }

    pub(super) fn mirrored_y(&self, axis: f64) -> Self {
        Self {
            underlay: self.underlay.iter().map(|s| s.mirrored_y(axis)).collect(),
            overlay: self.overlay.iter().map(|s| s.mirrored_y(axis)).collect(),
        }
    }

    pub(super) fn append(&mut self, other: QuarterShapes) {
        self.underlay.extend(other.underlay);
        self.overlay.extend(other.overlay);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Basketball
// ═══════════════════════════════════════════════════════════════════════

/// Corner segment plus arc to the vertex on the centre line.
pub fn three_point_line(g: &BasketballGeometry, filled: bool) -> Path {
    let path = Path::new()
        .move_to(g.three_point_start)
        .line_to(g.three_point_corner)
        .quad_to(g.three_point_control, g.three_point_vertex);
    if filled {
        path::close_to_baseline(path, g.three_point_start.x, g.frame.quarter_width)
    } else {
        path
    }
}

pub fn interior_line(g: &BasketballGeometry, filled: bool) -> Path {
    path::corner_box(
        g.interior_line_start.x,
        g.interior_line_corner.y,
        g.frame.quarter_width,
        filled,
    )
}

pub fn three_second_zone_line(g: &BasketballGeometry) -> Path {
    path::corner_box(
        g.three_second_zone_start.x,
        g.three_second_zone_corner.y,
        g.frame.quarter_width,
        false,
    )
}

/// Left half of the free-throw circle; its centre sits on the centre line.
pub fn free_throw_arc(g: &BasketballGeometry) -> Path {
    path::arc(g.free_throw_center, g.free_throw_radius, ANGLE_DOWN, ANGLE_UP, true)
}

/// Backboard segment and the left half of the rim, as two subpaths.
pub fn rebound(g: &BasketballGeometry) -> Path {
    let rim_start = g.basket_center.on_circle(g.basket_radius, ANGLE_DOWN);
    path::line(g.backboard_start, g.backboard_end)
        .move_to(rim_start)
        .arc(g.basket_center, g.basket_radius, ANGLE_DOWN, ANGLE_UP, true)
}

pub(super) fn basketball_quarter(
    g: &BasketballGeometry,
    colors: &BasketballColors,
) -> QuarterShapes {
    let stroke = Style::Stroke {
        color: colors.main_lines_color,
        width: g.frame.line_width,
    };

    let underlay = vec![
        Shape::new(
            path::rectangle(Point::new(0.0, 0.0), g.interior_width, g.interior_height),
            Style::Fill { color: colors.interior_fill_color },
        ),
        Shape::new(
            three_point_line(g, true),
            Style::Fill { color: colors.three_point_line_interior_fill_color },
        ),
        Shape::new(
            interior_line(g, true),
            Style::Fill { color: colors.interior_line_fill_color },
        ),
    ];

    let overlay = vec![
        Shape::new(three_point_line(g, false), stroke),
        Shape::new(path::line(g.passing_line_start, g.passing_line_end), stroke),
        Shape::new(interior_line(g, false), stroke),
        Shape::new(free_throw_arc(g), stroke),
        Shape::new(three_second_zone_line(g), stroke),
        Shape::new(rebound(g), stroke),
    ];

    QuarterShapes { underlay, overlay }
}

// ═══════════════════════════════════════════════════════════════════════
// Football
// ═══════════════════════════════════════════════════════════════════════

/// First half of the penalty arc, from the big box to the apex.
pub fn penalty_arc(g: &FootballGeometry) -> Path {
    path::quadratic(g.arc_start, g.arc_quarter_control, g.arc_apex)
}

pub fn corner_arc(g: &FootballGeometry) -> Path {
    path::arc(g.corner_arc_center, g.corner_arc_radius, ANGLE_RIGHT, ANGLE_DOWN, true)
}

/// Left half of a spot centred on the centre line, closed for filling.
pub fn half_spot(center: Point, radius: f64) -> Path {
    path::arc(center, radius, ANGLE_DOWN, ANGLE_UP, true).close()
}

pub(super) fn football_quarter(g: &FootballGeometry, colors: &FootballColors) -> QuarterShapes {
    let stroke = Style::Stroke {
        color: colors.main_lines_color,
        width: g.frame.line_width,
    };
    let qw = g.frame.quarter_width;

    let underlay = vec![Shape::new(
        path::rectangle(Point::new(0.0, 0.0), g.interior_width, g.interior_height),
        Style::Fill { color: colors.turf_color },
    )];

    let overlay = vec![
        Shape::new(
            path::corner_box(g.big_penalty_area_start.x, g.big_penalty_area_corner.y, qw, false),
            stroke,
        ),
        Shape::new(
            path::corner_box(g.penalty_area_start.x, g.penalty_area_corner.y, qw, false),
            stroke,
        ),
        Shape::new(
            path::corner_box(g.goalpost_start.x, g.goalpost_corner.y, qw, false),
            stroke,
        ),
        Shape::new(penalty_arc(g), stroke),
        Shape::new(corner_arc(g), stroke),
        Shape::new(
            half_spot(g.penalty_point, g.spot_radius),
            Style::Fill { color: colors.main_lines_color },
        ),
    ];

    QuarterShapes { underlay, overlay }
}
